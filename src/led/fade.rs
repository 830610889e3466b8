//! Cross-fade animation cursor.
//!
//! One animation cycle is three linear cross-fades of
//! [`FADE_SEGMENT_STEPS`] steps each:
//!
//! ```text
//! segment 0: green ↓  red   ↑
//! segment 1: red   ↓  blue  ↑
//! segment 2: blue  ↓  green ↑
//! ```
//!
//! The channel not taking part in a segment is held at 0, so the last
//! frame of each segment hands over seamlessly to the next one.

use super::Channel;
use crate::config::{FADE_SEGMENTS, FADE_SEGMENT_STEPS, LED_CHANNELS};

/// (falling, rising) channel pair per segment.
const SEGMENTS: [(Channel, Channel); FADE_SEGMENTS as usize] = [
    (Channel::Green, Channel::Red),
    (Channel::Red, Channel::Blue),
    (Channel::Blue, Channel::Green),
];

/// Progress through the fade cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeCursor {
    segment: u8,
    position: u8,
}

impl FadeCursor {
    /// First step of segment 0.
    pub const fn start() -> Self {
        Self {
            segment: 0,
            position: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::start();
    }

    pub fn segment(&self) -> u8 {
        self.segment
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    /// Duty cycles for the current step, indexed by [`Channel::index`].
    pub fn frame(&self) -> [u8; LED_CHANNELS] {
        let (falling, rising) = SEGMENTS[usize::from(self.segment)];
        let mut duties = [0u8; LED_CHANNELS];
        duties[falling.index()] = u8::MAX - self.position;
        duties[rising.index()] = self.position;
        duties
    }

    /// Move to the next step, wrapping into the next segment and
    /// from the last segment back to the first.
    pub fn advance(&mut self) {
        if u16::from(self.position) + 1 < FADE_SEGMENT_STEPS {
            self.position += 1;
        } else {
            self.position = 0;
            self.segment = (self.segment + 1) % FADE_SEGMENTS;
        }
    }
}
