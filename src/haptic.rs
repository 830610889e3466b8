//! One-shot vibration pulse.
//!
//! [`HapticTimer::trigger`] drives the motor high and arms a deadline
//! [`PULSE_DURATION_MS`] ahead.  Triggering again while a pulse is running
//! moves the deadline; it does not stack.  Whoever owns the timer calls
//! [`HapticTimer::expire`] once the deadline has passed, independently of
//! the control loop.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::config::{Millis, PULSE_DURATION_MS};

/// Digital output driving the vibration motor.
pub trait MotorPin {
    fn set_level(&mut self, high: bool);
}

/// Vibration motor on a push-pull output that cannot fail to switch.
pub struct Motor<P> {
    pin: P,
}

impl<P: OutputPin<Error = Infallible>> Motor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: OutputPin<Error = Infallible>> MotorPin for Motor<P> {
    fn set_level(&mut self, high: bool) {
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if let Err(never) = result {
            match never {}
        }
    }
}

/// Vibration motor with a single re-armable deadline.
pub struct HapticTimer<M> {
    motor: M,
    deadline: Option<Millis>,
}

impl<M: MotorPin> HapticTimer<M> {
    /// Take the motor pin and make sure it is off.
    pub fn new(mut motor: M) -> Self {
        motor.set_level(false);
        Self {
            motor,
            deadline: None,
        }
    }

    /// Start (or restart) a pulse at `now`; returns the new deadline.
    pub fn trigger(&mut self, now: Millis) -> Millis {
        let deadline = now + PULSE_DURATION_MS;
        if self.deadline.is_none() {
            self.motor.set_level(true);
        }
        self.deadline = Some(deadline);
        deadline
    }

    /// Stop the motor if the deadline has passed.
    ///
    /// Returns `true` only on the call that actually ends the pulse.
    pub fn expire(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.motor.set_level(false);
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    #[cfg(test)]
    fn motor(&self) -> &M {
        &self.motor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeMotor {
        high: bool,
        rising: usize,
        falling: usize,
    }

    impl MotorPin for FakeMotor {
        fn set_level(&mut self, high: bool) {
            if high && !self.high {
                self.rising += 1;
            }
            if !high && self.high {
                self.falling += 1;
            }
            self.high = high;
        }
    }

    /// Output pin that records its level, like a GPIO with `Infallible` errors.
    #[derive(Default)]
    struct LevelPin {
        high: bool,
        writes: usize,
    }

    impl embedded_hal::digital::ErrorType for LevelPin {
        type Error = Infallible;
    }

    impl OutputPin for LevelPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn gpio_motor_follows_pulse() {
        let mut timer = HapticTimer::new(Motor::new(LevelPin::default()));
        assert!(!timer.motor().pin.high);
        assert_eq!(timer.motor().pin.writes, 1);

        timer.trigger(0);
        assert!(timer.motor().pin.high);
        assert!(timer.expire(PULSE_DURATION_MS));
        assert!(!timer.motor().pin.high);
        assert_eq!(timer.motor().pin.writes, 3);
    }

    #[test]
    fn motor_defaults_low() {
        let timer = HapticTimer::new(FakeMotor::default());
        assert!(!timer.is_active());
        assert!(!timer.motor().high);
    }

    #[test]
    fn pulse_ends_after_duration() {
        let mut timer = HapticTimer::new(FakeMotor::default());
        assert_eq!(timer.trigger(1000), 1000 + PULSE_DURATION_MS);
        assert!(timer.is_active());
        assert!(timer.motor().high);

        assert!(!timer.expire(1000 + PULSE_DURATION_MS - 1));
        assert!(timer.motor().high);

        assert!(timer.expire(1000 + PULSE_DURATION_MS));
        assert!(!timer.is_active());
        assert!(!timer.motor().high);
        assert_eq!(timer.motor().falling, 1);

        assert!(!timer.expire(1000 + PULSE_DURATION_MS + 1));
        assert_eq!(timer.motor().falling, 1);
    }

    #[test]
    fn retrigger_restarts_deadline() {
        let mut timer = HapticTimer::new(FakeMotor::default());
        timer.trigger(0);
        timer.trigger(4000);
        assert_eq!(timer.deadline(), Some(4000 + PULSE_DURATION_MS));
        assert!(!timer.expire(PULSE_DURATION_MS));
        assert!(timer.expire(4000 + PULSE_DURATION_MS));
        assert_eq!(timer.motor().rising, 1);
        assert_eq!(timer.motor().falling, 1);
    }

    #[test]
    fn expire_without_trigger_does_nothing() {
        let mut timer = HapticTimer::new(FakeMotor::default());
        assert!(!timer.expire(u64::MAX));
        assert_eq!(timer.motor().falling, 0);
    }
}
