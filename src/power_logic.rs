//! Idle watchdog and System OFF policy.
//!
//! nRF52840 power modes used here:
//! - System ON: normal operation, control loop running
//! - System OFF: deep sleep, wake on the button's GPIO DETECT (~0.4 µA)
//!
//! Waking from System OFF is a reset; the only state carried across is the
//! `OFF` bit in `RESETREAS`, decoded into [`WakeCause`].

use crate::config::{Millis, BUTTON_PIN, IDLE_TIMEOUT_MS};
use crate::led::LedMode;

/// The device counts as idle while the LED is off and the motor is not running.
pub fn is_idle(mode: LedMode, haptic_active: bool) -> bool {
    mode == LedMode::Off && !haptic_active
}

/// Tracks how long the device has been continuously idle.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleWatchdog {
    idle_since: Option<Millis>,
}

impl IdleWatchdog {
    pub const fn new() -> Self {
        Self { idle_since: None }
    }

    /// Record this cycle's idle condition; returns `true` once the device
    /// has been idle for [`IDLE_TIMEOUT_MS`].
    pub fn check(&mut self, idle: bool, now: Millis) -> bool {
        if !idle {
            self.idle_since = None;
            return false;
        }
        let since = *self.idle_since.get_or_insert(now);
        now.saturating_sub(since) >= IDLE_TIMEOUT_MS
    }

    pub fn idle_since(&self) -> Option<Millis> {
        self.idle_since
    }
}

/// Input level that wakes the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeLevel {
    Low,
    High,
}

/// What the sleep-entry collaborator needs to arm the wake source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SleepRequest {
    /// Port 0 pin number.
    pub wake_pin: u8,
    pub wake_level: WakeLevel,
}

impl SleepRequest {
    /// Wake when the (active-low) button is pressed.
    pub const fn button() -> Self {
        Self {
            wake_pin: BUTTON_PIN,
            wake_level: WakeLevel::Low,
        }
    }
}

/// Why the device is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeCause {
    /// Cold power-on (no reset reason latched).
    PowerOn,
    /// Woken from System OFF by the button.
    Button,
    /// Pin reset, watchdog, soft reset or lockup.
    Reset,
}

impl WakeCause {
    /// `RESETREAS.OFF`: woke from System OFF via GPIO DETECT.
    const OFF: u32 = 1 << 16;

    /// Decode a raw `RESETREAS` register value.
    pub const fn from_reset_reason(resetreas: u32) -> Self {
        if resetreas & Self::OFF != 0 {
            WakeCause::Button
        } else if resetreas == 0 {
            WakeCause::PowerOn
        } else {
            WakeCause::Reset
        }
    }
}
