//! glowtap firmware entry point (nRF52840).
//!
//! Wires the board peripherals to the tasks in `tasks/` and hands all
//! decisions to the `glowtap` library.

#![no_std]
#![no_main]

mod board;
mod power;
mod tasks;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use glowtap::config::{PWM_FREQUENCY_HZ, PWM_RESOLUTION_BITS};
use glowtap::haptic::Motor;
use glowtap::led::PwmPlan;
use glowtap::power_logic::WakeCause;
use glowtap::state::SharedState;
use static_cell::StaticCell;

use defmt_rtt as _;
use panic_probe as _;

static STATE: StaticCell<SharedState> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let wake = power::take_wake_cause();
    let p = embassy_nrf::init(Default::default());

    match wake {
        WakeCause::Button => info!("Woke up from deep sleep"),
        WakeCause::PowerOn => info!("Power-on boot"),
        WakeCause::Reset => info!("Boot after reset"),
    }

    let (control, expiry, status) = STATE.init(SharedState::new()).split();

    let button = Input::new(p.P0_11, Pull::Up);
    let motor = Output::new(p.P0_04, Level::Low, OutputDrive::Standard);

    spawner.must_spawn(tasks::monitor::monitor_task(status));
    spawner.must_spawn(tasks::haptic::haptic_task(Motor::new(motor), expiry));

    match PwmPlan::new(PWM_FREQUENCY_HZ, PWM_RESOLUTION_BITS) {
        Ok(plan) => {
            let pwm = board::RgbPwm::new(p.PWM0, p.P0_13, p.P0_14, p.P0_15, plan);
            spawner.must_spawn(tasks::led::led_task(pwm));
        }
        Err(e) => {
            // Keep running without LED output; button and motor still work.
            error!("LED PWM setup failed: {}", e);
        }
    }

    spawner.must_spawn(tasks::control::control_task(button, control));
    info!("glowtap running");
}
