//! LED task: sole owner of PWM0 and the fade cursor.

use defmt::{debug, info};
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};
use glowtap::config::FADE_STEP_MS;
use glowtap::led::LedStateMachine;

use super::LED_MODE;
use crate::board::RgbPwm;

#[embassy_executor::task]
pub async fn led_task(pwm: RgbPwm) -> ! {
    let mut led = LedStateMachine::new(pwm);
    let plan = led.pwm().plan();
    info!(
        "LED task started: PWM /{} top {} ({} Hz)",
        plan.prescaler_divisor(),
        plan.max_duty(),
        plan.effective_hz()
    );

    loop {
        let requested = if led.is_animating() {
            led.step();
            match select(LED_MODE.wait(), Timer::after(Duration::from_millis(FADE_STEP_MS))).await {
                Either::First(mode) => Some(mode),
                Either::Second(()) => None,
            }
        } else {
            Some(LED_MODE.wait().await)
        };

        if let Some(mode) = requested {
            if led.set_mode(mode) {
                debug!("LED output now {} (fade at {})", mode, led.cursor());
            }
        }
    }
}
