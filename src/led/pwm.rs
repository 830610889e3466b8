//! PWM timing plan for the nRF52840 PWM peripheral.
//!
//! The counter runs from a 16 MHz base clock divided by a power-of-two
//! prescaler and counts up to `COUNTERTOP`, so the carrier is
//! `16 MHz / divisor / COUNTERTOP`.  For each prescaler, finest first, we
//! derive the top that hits the requested frequency and keep the first one
//! that fits the counter while still giving at least the requested duty
//! resolution.

use crate::config::PWM_BASE_CLOCK_HZ;
use crate::error::Error;

/// Largest prescaler exponent (divide by 128).
const MAX_PRESCALER_SHIFT: u8 = 7;

/// `COUNTERTOP` is a 15-bit register.
const MAX_RESOLUTION_BITS: u8 = 15;
const MAX_COUNTER_TOP: u32 = (1 << MAX_RESOLUTION_BITS) - 1;

/// Prescaler and counter top derived from a frequency/resolution request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmPlan {
    prescaler_shift: u8,
    max_duty: u16,
}

impl PwmPlan {
    pub fn new(frequency_hz: u32, resolution_bits: u8) -> Result<Self, Error> {
        if resolution_bits == 0 || resolution_bits > MAX_RESOLUTION_BITS {
            return Err(Error::PwmResolution(resolution_bits));
        }
        if frequency_hz == 0 {
            return Err(Error::PwmFrequency(frequency_hz));
        }

        let min_top = (1u32 << resolution_bits) - 1;
        (0..=MAX_PRESCALER_SHIFT)
            .find_map(|prescaler_shift| {
                let clock = PWM_BASE_CLOCK_HZ >> prescaler_shift;
                // Nearest top; exact whenever the divided clock allows it.
                let top = (clock + frequency_hz / 2) / frequency_hz;
                (min_top..=MAX_COUNTER_TOP).contains(&top).then(|| Self {
                    prescaler_shift,
                    max_duty: top as u16,
                })
            })
            .ok_or(Error::PwmFrequency(frequency_hz))
    }

    /// Prescaler as a power of two (`0` = divide by 1, `7` = divide by 128).
    pub fn prescaler_shift(&self) -> u8 {
        self.prescaler_shift
    }

    pub fn prescaler_divisor(&self) -> u32 {
        1 << self.prescaler_shift
    }

    /// Counter top; a duty equal to this is fully on.
    pub fn max_duty(&self) -> u16 {
        self.max_duty
    }

    /// Carrier frequency actually produced.
    pub fn effective_hz(&self) -> u32 {
        PWM_BASE_CLOCK_HZ / self.prescaler_divisor() / u32::from(self.max_duty)
    }

    /// Map an 8-bit duty onto the counter range.
    pub fn scale(&self, duty: u8) -> u16 {
        let scaled = u32::from(duty) * u32::from(self.max_duty) / u32::from(u8::MAX);
        scaled as u16
    }
}
