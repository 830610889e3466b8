//! Process-wide shared state.
//!
//! Each field has exactly one writer.  [`SharedState::split`] hands each
//! writer its own capability; the handles borrow the state exclusively, so
//! no second set can exist while they live.  On the device the state is a
//! `StaticCell` initialized once in `main.rs`, so `split` runs once:
//!
//! | field          | writer                                   | handle            |
//! |----------------|------------------------------------------|-------------------|
//! | LED mode       | control loop                             | [`ControlHandle`] |
//! | button level   | control loop                             | [`ControlHandle`] |
//! | haptic active  | control loop raises, expiry clears       | [`ControlHandle`] / [`ExpiryHandle`] |
//!
//! Readers get a `Copy` [`StatusReader`].  Reads are independent relaxed
//! loads; a snapshot may be one cycle stale.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::led::LedMode;
use crate::status::StatusReport;

pub struct SharedState {
    led_mode: AtomicU8,
    haptic_active: AtomicBool,
    button_pressed: AtomicBool,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            led_mode: AtomicU8::new(LedMode::Off.to_u8()),
            haptic_active: AtomicBool::new(false),
            button_pressed: AtomicBool::new(false),
        }
    }

    /// Split into the writer capabilities and a reader.
    ///
    /// A second split while the first handles are alive does not compile:
    ///
    /// ```compile_fail
    /// use glowtap::state::SharedState;
    ///
    /// let mut state = SharedState::new();
    /// let (control, _expiry, _status) = state.split();
    /// let _again = state.split();
    /// control.raise_haptic();
    /// ```
    pub fn split(&mut self) -> (ControlHandle<'_>, ExpiryHandle<'_>, StatusReader<'_>) {
        let state: &Self = self;
        (
            ControlHandle { state },
            ExpiryHandle { state },
            StatusReader { state },
        )
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Write access owned by the control loop.
pub struct ControlHandle<'a> {
    state: &'a SharedState,
}

impl ControlHandle<'_> {
    pub fn publish_led_mode(&self, mode: LedMode) {
        self.state.led_mode.store(mode.to_u8(), Ordering::Relaxed);
    }

    pub fn set_button_pressed(&self, pressed: bool) {
        self.state.button_pressed.store(pressed, Ordering::Relaxed);
    }

    /// Mark the motor as running; only the expiry side may clear it.
    pub fn raise_haptic(&self) {
        self.state.haptic_active.store(true, Ordering::Release);
    }

    pub fn haptic_active(&self) -> bool {
        self.state.haptic_active.load(Ordering::Acquire)
    }
}

/// Write access owned by the haptic expiry.
pub struct ExpiryHandle<'a> {
    state: &'a SharedState,
}

impl ExpiryHandle<'_> {
    pub fn clear_haptic(&self) {
        self.state.haptic_active.store(false, Ordering::Release);
    }
}

/// Best-effort read access for monitoring.
#[derive(Clone, Copy)]
pub struct StatusReader<'a> {
    state: &'a SharedState,
}

impl StatusReader<'_> {
    pub fn led_mode(&self) -> LedMode {
        LedMode::from_u8(self.state.led_mode.load(Ordering::Relaxed))
    }

    pub fn haptic_active(&self) -> bool {
        self.state.haptic_active.load(Ordering::Acquire)
    }

    pub fn button_pressed(&self) -> bool {
        self.state.button_pressed.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatusReport {
        StatusReport::new(self.button_pressed(), self.led_mode(), self.haptic_active())
    }
}
