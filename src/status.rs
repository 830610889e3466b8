//! Human-readable device status for the monitor output.

use core::fmt;

use crate::led::LedMode;

/// One status line: button, LED and vibrator labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// `"PRESSED"` or `"RELEASED"`.
    pub button: &'static str,
    /// [`LedMode::label`].
    pub led: &'static str,
    /// `"ON"` or `"OFF"`.
    pub vibrator: &'static str,
}

impl StatusReport {
    pub fn new(button_pressed: bool, mode: LedMode, vibrator_on: bool) -> Self {
        Self {
            button: if button_pressed { "PRESSED" } else { "RELEASED" },
            led: mode.label(),
            vibrator: if vibrator_on { "ON" } else { "OFF" },
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Button: {} | LED: {} | Vibrator: {}",
            self.button, self.led, self.vibrator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let r = StatusReport::new(true, LedMode::AnimatedFade, false);
        assert_eq!(r.button, "PRESSED");
        assert_eq!(r.led, "FADING RGB");
        assert_eq!(r.vibrator, "OFF");
    }

    #[test]
    fn display_line() {
        let r = StatusReport::new(false, LedMode::Off, true);
        assert_eq!(
            std::format!("{r}"),
            "Button: RELEASED | LED: OFF | Vibrator: ON"
        );
    }
}
