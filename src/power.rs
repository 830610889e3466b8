//! nRF52840 reset-reason readout and System OFF entry.
//!
//! Register access goes through the typed `embassy_nrf::pac`; the policy
//! (when to sleep, which pin wakes, how to read `RESETREAS`) lives in
//! `glowtap::power_logic`.

use defmt::info;
use embassy_nrf::pac;
use embassy_nrf::pac::gpio::vals;
use glowtap::power_logic::{SleepRequest, WakeCause, WakeLevel};

/// Read and clear the latched reset reason.
///
/// Call before anything else can reset the chip, so the cause of this boot
/// is not mixed with the next one.
pub fn take_wake_cause() -> WakeCause {
    let reason = pac::POWER.resetreas().read();
    // Write-1-to-clear.
    pac::POWER.resetreas().write_value(reason);
    WakeCause::from_reset_reason(reason.0)
}

/// Arm the wake pin's SENSE and enter System OFF.  Does not return; the
/// next button press resets the chip.
pub fn enter_system_off(request: SleepRequest) -> ! {
    info!(
        "Idle for {} ms, entering System OFF (wake: P0.{} {})",
        glowtap::config::IDLE_TIMEOUT_MS,
        request.wake_pin,
        request.wake_level
    );

    // The control loop that samples this pin never runs again.
    pac::P0.pin_cnf(usize::from(request.wake_pin)).write(|w| {
        w.set_dir(vals::Dir::INPUT);
        w.set_input(vals::Input::CONNECT);
        w.set_pull(vals::Pull::PULLUP);
        w.set_sense(match request.wake_level {
            WakeLevel::Low => vals::Sense::LOW,
            WakeLevel::High => vals::Sense::HIGH,
        });
    });
    cortex_m::asm::dsb();
    pac::POWER
        .systemoff()
        .write_value(pac::power::regs::Systemoff(1));

    // SYSTEMOFF takes effect asynchronously.
    loop {
        cortex_m::asm::wfe();
    }
}
