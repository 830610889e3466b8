//! Time-window button debouncer.
//!
//! The button is wired active-low with a pull-up: a LOW raw level means
//! pressed.  A raw level is accepted only once it has been steady for
//! longer than [`DEBOUNCE_WINDOW_MS`], so contact bounce of any length
//! shorter than the window collapses into a single stable edge.

use crate::config::{Millis, DEBOUNCE_WINDOW_MS};

/// Debounced classification of one poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StableEdge {
    /// Nothing to report (released, or a raw change is still settling).
    None,
    /// The button became stably pressed on this poll.
    Pressed,
    /// The button became stably released on this poll.
    Released,
    /// Still pressed; the raw level has been steadily low for `held_for` ms.
    Holding { held_for: Millis },
}

/// Debouncer state for the single device button.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    /// Raw level seen on the previous poll (true = pressed).
    last_raw_pressed: bool,
    /// When the raw level last changed.
    last_change: Millis,
    /// Accepted logical state (true = pressed).
    stable_pressed: bool,
}

impl Debouncer {
    /// Start released; the pull-up holds the line HIGH at rest.
    pub const fn new() -> Self {
        Self {
            last_raw_pressed: false,
            last_change: 0,
            stable_pressed: false,
        }
    }

    /// Feed one raw sample (`raw_high` is the pin level) taken at `now`.
    pub fn sample(&mut self, raw_high: bool, now: Millis) -> StableEdge {
        let raw_pressed = !raw_high;

        if raw_pressed != self.last_raw_pressed {
            self.last_raw_pressed = raw_pressed;
            self.last_change = now;
        }

        let steady_for = now.saturating_sub(self.last_change);

        if steady_for > DEBOUNCE_WINDOW_MS && raw_pressed != self.stable_pressed {
            self.stable_pressed = raw_pressed;
            return if raw_pressed {
                StableEdge::Pressed
            } else {
                StableEdge::Released
            };
        }

        if self.stable_pressed && raw_pressed {
            StableEdge::Holding {
                held_for: steady_for,
            }
        } else {
            StableEdge::None
        }
    }

    /// Debounced button state.
    pub fn is_pressed(&self) -> bool {
        self.stable_pressed
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
