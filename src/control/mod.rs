//! The control loop: one synchronous cycle per call.
//!
//! Each cycle, in order:
//! 1. refresh the LED with the current mode (no-op when unchanged),
//! 2. debounce the raw button sample,
//! 3. classify gestures: a single press cycles the LED mode, a long hold
//!    triggers the vibration pulse,
//! 4. feed the idle watchdog.
//!
//! The LED animation and the haptic expiry run elsewhere; the controller
//! only talks to them through [`LedPort`] and [`HapticPort`].

#[cfg(test)]
mod tests;

use crate::config::Millis;
use crate::input::{Debouncer, Gesture, GestureInterpreter};
use crate::led::LedMode;
use crate::power_logic::{self, IdleWatchdog, SleepRequest};

/// Where mode requests go (the LED task on the device).
pub trait LedPort {
    /// Apply `mode`.  Called every cycle; must be idempotent.
    fn apply(&mut self, mode: LedMode);
}

/// Where vibration requests go (the haptic task on the device).
pub trait HapticPort {
    fn trigger(&mut self);
    fn is_active(&self) -> bool;
}

/// Result of one control cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    Continue,
    /// Idle timeout reached; enter System OFF with this wake source.
    Sleep(SleepRequest),
}

/// Button, mode and idle state owned by the control loop.
#[derive(Debug, Default)]
pub struct Controller {
    debouncer: Debouncer,
    gestures: GestureInterpreter,
    mode: LedMode,
    watchdog: IdleWatchdog,
    last_gesture: Gesture,
}

impl Controller {
    pub const fn new() -> Self {
        Self {
            debouncer: Debouncer::new(),
            gestures: GestureInterpreter::new(),
            mode: LedMode::Off,
            watchdog: IdleWatchdog::new(),
            last_gesture: Gesture::None,
        }
    }

    /// Run one cycle with the button pin level `raw_high` sampled at `now`.
    pub fn cycle<L, H>(&mut self, raw_high: bool, now: Millis, led: &mut L, haptic: &mut H) -> CycleOutcome
    where
        L: LedPort,
        H: HapticPort,
    {
        led.apply(self.mode);

        let edge = self.debouncer.sample(raw_high, now);
        self.gestures.update(edge);

        let gesture = self.gestures.take();
        match gesture {
            Gesture::None => {}
            Gesture::SinglePress => self.mode = self.mode.next(),
            Gesture::LongHold => haptic.trigger(),
        }
        self.last_gesture = gesture;

        let idle = power_logic::is_idle(self.mode, haptic.is_active());
        if self.watchdog.check(idle, now) {
            CycleOutcome::Sleep(SleepRequest::button())
        } else {
            CycleOutcome::Continue
        }
    }

    pub fn mode(&self) -> LedMode {
        self.mode
    }

    pub fn button_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }

    /// Gesture handled by the most recent cycle.
    pub fn last_gesture(&self) -> Gesture {
        self.last_gesture
    }

    pub fn idle_since(&self) -> Option<Millis> {
        self.watchdog.idle_since()
    }
}
