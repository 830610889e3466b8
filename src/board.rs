//! nRF52840 PWM adapter for the LED.
//!
//! Pin assignment (see `config.rs`):
//!   P0.13 / P0.14 / P0.15 → PWM0 channels 0 / 1 / 2 (red / green / blue)

use embassy_nrf::peripherals::{P0_13, P0_14, P0_15, PWM0};
use embassy_nrf::pwm::{Prescaler, SimplePwm};
use glowtap::led::{Channel, PwmPlan, PwmSink};

/// PWM0 driving the three LED channels.
pub struct RgbPwm {
    pwm: SimplePwm<'static, PWM0>,
    plan: PwmPlan,
}

impl RgbPwm {
    pub fn new(pwm: PWM0, red: P0_13, green: P0_14, blue: P0_15, plan: PwmPlan) -> Self {
        let mut pwm = SimplePwm::new_3ch(pwm, red, green, blue);
        pwm.set_prescaler(prescaler(&plan));
        pwm.set_max_duty(plan.max_duty());
        Self { pwm, plan }
    }

    pub fn plan(&self) -> &PwmPlan {
        &self.plan
    }
}

impl PwmSink for RgbPwm {
    fn set_duty(&mut self, channel: Channel, duty: u8) {
        self.pwm.set_duty(channel.index(), self.plan.scale(duty));
    }
}

fn prescaler(plan: &PwmPlan) -> Prescaler {
    match plan.prescaler_shift() {
        0 => Prescaler::Div1,
        1 => Prescaler::Div2,
        2 => Prescaler::Div4,
        3 => Prescaler::Div8,
        4 => Prescaler::Div16,
        5 => Prescaler::Div32,
        6 => Prescaler::Div64,
        _ => Prescaler::Div128,
    }
}
