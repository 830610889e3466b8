//! Gesture classification on top of debounced edges.
//!
//! Every press-to-release interaction yields exactly one gesture: a long
//! hold fires while the button is still down, and the release that ends
//! it is swallowed so it cannot also count as a press.

use super::debounce::StableEdge;
use crate::config::{Millis, LONG_PRESS_THRESHOLD_MS};

/// A completed button interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    #[default]
    None,
    /// Pressed and released before the long-press threshold.
    SinglePress,
    /// Held continuously for at least the long-press threshold.
    LongHold,
}

/// Turns debounced edges into [`Gesture`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureInterpreter {
    pending: Gesture,
    hold_signaled: bool,
}

impl GestureInterpreter {
    pub const fn new() -> Self {
        Self {
            pending: Gesture::None,
            hold_signaled: false,
        }
    }

    /// Advance with the debouncer's verdict for this poll.
    pub fn update(&mut self, edge: StableEdge) {
        match edge {
            StableEdge::None => {}
            StableEdge::Pressed => {
                self.hold_signaled = false;
            }
            StableEdge::Holding { held_for } => {
                if !self.hold_signaled && held_for >= LONG_PRESS_THRESHOLD_MS {
                    self.hold_signaled = true;
                    self.pending = Gesture::LongHold;
                }
            }
            StableEdge::Released => {
                if !self.hold_signaled {
                    self.pending = Gesture::SinglePress;
                }
                self.hold_signaled = false;
            }
        }
    }

    /// Hand the pending gesture to the caller and reset to [`Gesture::None`].
    pub fn take(&mut self) -> Gesture {
        core::mem::take(&mut self.pending)
    }

    /// Pending gesture without consuming it.
    #[cfg(test)]
    fn peek(&self) -> Gesture {
        self.pending
    }
}
