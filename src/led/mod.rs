//! Tri-color LED display state machine.
//!
//! [`LedStateMachine`] owns the PWM sink and the fade cursor.  Solid modes
//! are written once on entry; the fade mode is advanced one step at a time
//! by whoever owns the machine (the LED task on the device), so pausing the
//! animation is simply not calling [`LedStateMachine::step`] any more.

pub mod fade;
pub mod pwm;

use crate::config::LED_CHANNELS;
pub use fade::FadeCursor;
pub use pwm::PwmPlan;

/// Display mode, cycled by single presses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    #[default]
    Off,
    StaticColor,
    AnimatedFade,
}

impl LedMode {
    /// Next mode in the cycle Off → StaticColor → AnimatedFade → Off.
    pub const fn next(self) -> Self {
        match self {
            LedMode::Off => LedMode::StaticColor,
            LedMode::StaticColor => LedMode::AnimatedFade,
            LedMode::AnimatedFade => LedMode::Off,
        }
    }

    /// Human-readable status label.
    pub const fn label(self) -> &'static str {
        match self {
            LedMode::Off => "OFF",
            LedMode::StaticColor => "STATIC RED",
            LedMode::AnimatedFade => "FADING RGB",
        }
    }

    pub const fn to_u8(self) -> u8 {
        match self {
            LedMode::Off => 0,
            LedMode::StaticColor => 1,
            LedMode::AnimatedFade => 2,
        }
    }

    /// Inverse of [`LedMode::to_u8`]; unknown values read as `Off`.
    pub const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => LedMode::StaticColor,
            2 => LedMode::AnimatedFade,
            _ => LedMode::Off,
        }
    }
}

/// One PWM channel of the LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; LED_CHANNELS] = [Channel::Red, Channel::Green, Channel::Blue];

    /// PWM channel number (0..=2).
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Three-channel, 8-bit PWM output.
pub trait PwmSink {
    fn set_duty(&mut self, channel: Channel, duty: u8);
}

/// Channel used for the static "alert" color.
const ALERT_CHANNEL: Channel = Channel::Red;

/// Mode-driven LED output with a pausable fade animation.
pub struct LedStateMachine<P> {
    pwm: P,
    mode: LedMode,
    cursor: FadeCursor,
}

impl<P: PwmSink> LedStateMachine<P> {
    /// Take ownership of the PWM sink and switch all channels off.
    pub fn new(pwm: P) -> Self {
        let mut led = Self {
            pwm,
            mode: LedMode::Off,
            cursor: FadeCursor::start(),
        };
        led.write_frame([0; LED_CHANNELS]);
        led
    }

    /// Switch display mode.
    ///
    /// Returns `false` (and touches nothing) when `mode` is already active,
    /// so calling this every cycle is harmless.  Entering `AnimatedFade`
    /// always restarts the animation from its first step.
    pub fn set_mode(&mut self, mode: LedMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;

        match mode {
            LedMode::Off => self.write_frame([0; LED_CHANNELS]),
            LedMode::StaticColor => {
                let mut frame = [0; LED_CHANNELS];
                frame[ALERT_CHANNEL.index()] = u8::MAX;
                self.write_frame(frame);
            }
            LedMode::AnimatedFade => self.cursor.reset(),
        }
        true
    }

    /// Render the current animation step and advance the cursor.
    ///
    /// Does nothing unless the fade mode is active.
    pub fn step(&mut self) {
        if !self.is_animating() {
            return;
        }
        let frame = self.cursor.frame();
        self.write_frame(frame);
        self.cursor.advance();
    }

    pub fn is_animating(&self) -> bool {
        self.mode == LedMode::AnimatedFade
    }

    pub fn mode(&self) -> LedMode {
        self.mode
    }

    pub fn cursor(&self) -> FadeCursor {
        self.cursor
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    fn write_frame(&mut self, frame: [u8; LED_CHANNELS]) {
        for channel in Channel::ALL {
            self.pwm.set_duty(channel, frame[channel.index()]);
        }
    }
}
