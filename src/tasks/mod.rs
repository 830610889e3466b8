//! Embassy tasks and the signals connecting them.
//!
//! ```text
//!            LED_MODE                 HAPTIC_TRIGGER
//!  control ───────────▶ led      control ──────────▶ haptic
//!     │                                                 │
//!     └──── ControlHandle ─▶ SharedState ◀─ ExpiryHandle┘
//!                               │
//!                    monitor ◀──┘ StatusReader
//! ```
//!
//! Each peripheral has a single owning task; the control loop never
//! touches the PWM or the motor pin directly.

pub mod control;
pub mod haptic;
pub mod led;
pub mod monitor;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use glowtap::led::LedMode;

/// Latest mode requested by the control loop.
pub static LED_MODE: Signal<CriticalSectionRawMutex, LedMode> = Signal::new();

/// Start or restart the vibration pulse.
pub static HAPTIC_TRIGGER: Signal<CriticalSectionRawMutex, ()> = Signal::new();
