//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and PWM settings
//! live here so they can be tuned in one place.

/// Milliseconds since boot, as reported by the monotonic clock.
///
/// 64 bits never wrap within a power session.
pub type Millis = u64;

// Button

/// A raw level change must hold for longer than this before it is accepted (ms).
pub const DEBOUNCE_WINDOW_MS: Millis = 50;

/// Holding the button this long (ms) is a long hold rather than a press.
pub const LONG_PRESS_THRESHOLD_MS: Millis = 3000;

// LED

/// Number of PWM channels driving the tri-color LED.
pub const LED_CHANNELS: usize = 3;

/// Steps in one cross-fade segment of the animation.
pub const FADE_SEGMENT_STEPS: u16 = 256;

/// Number of cross-fade segments forming one full animation cycle.
pub const FADE_SEGMENTS: u8 = 3;

/// Each animation step is held for this long (ms).
pub const FADE_STEP_MS: u64 = 3;

/// PWM carrier frequency (Hz).
pub const PWM_FREQUENCY_HZ: u32 = 5000;

/// PWM duty resolution (bits). Duty values are 0..=255.
pub const PWM_RESOLUTION_BITS: u8 = 8;

/// nRF52840 PWM base clock (Hz) before the prescaler.
pub const PWM_BASE_CLOCK_HZ: u32 = 16_000_000;

// Vibration motor

/// Length of the vibration pulse issued on a long hold (ms).
pub const PULSE_DURATION_MS: Millis = 10_000;

// Power

/// Continuous idle time (LED off, motor off) before System OFF (ms).
pub const IDLE_TIMEOUT_MS: Millis = 10_000;

// Monitoring

/// Interval between status reports (ms).
pub const MONITOR_INTERVAL_MS: u64 = 2000;

// GPIO pin assignments (nRF52840-DK)
//
// These are logical names; the actual `embassy_nrf::peripherals::*`
// types are selected in `main.rs` and `board.rs`.  Adjust for your custom PCB.
//
//   Button (active-low, pull-up) → P0.11
//   LED red                      → P0.13
//   LED green                    → P0.14
//   LED blue                     → P0.15
//   Vibration motor              → P0.04

/// Port 0 pin number of the button; also the System OFF wake source.
pub const BUTTON_PIN: u8 = 11;
