//! Unified error type for glowtap.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Only hardware bring-up can fail; the control loop itself is total.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // PWM
    /// The PWM counter cannot represent the requested duty resolution.
    PwmResolution(u8),

    /// No prescaler reaches the requested PWM frequency.
    PwmFrequency(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PwmResolution(bits) => write!(f, "unsupported PWM resolution: {bits} bits"),
            Error::PwmFrequency(hz) => write!(f, "unreachable PWM frequency: {hz} Hz"),
        }
    }
}
