//! Periodic status line over RTT.

use defmt::info;
use embassy_time::{Duration, Ticker};
use glowtap::config::MONITOR_INTERVAL_MS;
use glowtap::state::StatusReader;

#[embassy_executor::task]
pub async fn monitor_task(status: StatusReader<'static>) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(MONITOR_INTERVAL_MS));
    loop {
        ticker.next().await;
        let report = status.snapshot();
        info!(
            "Button: {} | LED: {} | Vibrator: {}",
            report.button, report.led, report.vibrator
        );
    }
}
