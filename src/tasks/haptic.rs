//! Haptic task: owns the motor pin and ends each pulse on its deadline.

use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::Output;
use embassy_time::{Instant, Timer};
use glowtap::haptic::{HapticTimer, Motor};
use glowtap::state::ExpiryHandle;

use super::HAPTIC_TRIGGER;

#[embassy_executor::task]
pub async fn haptic_task(motor: Motor<Output<'static>>, expiry: ExpiryHandle<'static>) -> ! {
    let mut timer = HapticTimer::new(motor);

    loop {
        let Some(deadline) = timer.deadline() else {
            HAPTIC_TRIGGER.wait().await;
            let deadline = timer.trigger(Instant::now().as_millis());
            info!("Vibrator ON until {} ms", deadline);
            continue;
        };

        // A pending trigger wins over an elapsed deadline, so a re-trigger
        // landing right at expiry extends the pulse instead of being lost.
        match select(HAPTIC_TRIGGER.wait(), Timer::at(Instant::from_millis(deadline))).await {
            Either::First(()) => {
                let deadline = timer.trigger(Instant::now().as_millis());
                info!("Vibrator re-triggered, ON until {} ms", deadline);
            }
            Either::Second(()) => {
                if timer.expire(Instant::now().as_millis()) {
                    expiry.clear_haptic();
                    info!("Vibrator OFF");
                }
            }
        }
    }
}
