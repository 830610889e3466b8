//! Control loop task: polls the button and runs `Controller` cycles
//! back-to-back, yielding to the executor between cycles.

use defmt::{debug, info};
use embassy_futures::yield_now;
use embassy_nrf::gpio::Input;
use embassy_time::Instant;
use glowtap::control::{Controller, CycleOutcome, HapticPort, LedPort};
use glowtap::input::Gesture;
use glowtap::led::LedMode;
use glowtap::state::ControlHandle;

use super::{HAPTIC_TRIGGER, LED_MODE};
use crate::power;

/// Forwards mode changes to the LED task.
struct LedLink<'a> {
    control: &'a ControlHandle<'static>,
    applied: Option<LedMode>,
}

impl LedPort for LedLink<'_> {
    fn apply(&mut self, mode: LedMode) {
        if self.applied == Some(mode) {
            return;
        }
        self.applied = Some(mode);
        self.control.publish_led_mode(mode);
        LED_MODE.signal(mode);
        info!("LED: {}", mode.label());
    }
}

/// Forwards vibration requests to the haptic task.
struct HapticLink<'a> {
    control: &'a ControlHandle<'static>,
}

impl HapticPort for HapticLink<'_> {
    fn trigger(&mut self) {
        self.control.raise_haptic();
        HAPTIC_TRIGGER.signal(());
    }

    fn is_active(&self) -> bool {
        self.control.haptic_active()
    }
}

#[embassy_executor::task]
pub async fn control_task(button: Input<'static>, control: ControlHandle<'static>) -> ! {
    info!("Control loop started");

    let mut controller = Controller::new();
    let mut led = LedLink {
        control: &control,
        applied: None,
    };
    let mut haptic = HapticLink { control: &control };
    let mut was_pressed = false;

    loop {
        let now = Instant::now().as_millis();
        let outcome = controller.cycle(button.is_high(), now, &mut led, &mut haptic);

        match controller.last_gesture() {
            Gesture::None => {}
            gesture => info!("Gesture: {} at {} ms", gesture, now),
        }

        let pressed = controller.button_pressed();
        if pressed != was_pressed {
            debug!("Button {}", if pressed { "down" } else { "up" });
            control.set_button_pressed(pressed);
            was_pressed = pressed;
        }

        if let CycleOutcome::Sleep(request) = outcome {
            info!("Idle since {} ms", controller.idle_since());
            power::enter_system_off(request);
        }

        yield_now().await;
    }
}
