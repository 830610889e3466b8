//! Unit tests for the control cycle.
//!
//! These tests run on the host and drive the controller with a simulated
//! 1 ms poll, recording what reaches the LED and haptic ports.

use super::*;
use crate::config::{DEBOUNCE_WINDOW_MS, IDLE_TIMEOUT_MS, LONG_PRESS_THRESHOLD_MS};

const HIGH: bool = true;
const LOW: bool = false;

#[derive(Default)]
struct FakeLed {
    applied: Option<LedMode>,
    changes: usize,
}

impl LedPort for FakeLed {
    fn apply(&mut self, mode: LedMode) {
        if self.applied != Some(mode) {
            self.applied = Some(mode);
            self.changes += 1;
        }
    }
}

#[derive(Default)]
struct FakeHaptic {
    active: bool,
    triggers: usize,
}

impl HapticPort for FakeHaptic {
    fn trigger(&mut self) {
        self.active = true;
        self.triggers += 1;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

struct Bench {
    controller: Controller,
    led: FakeLed,
    haptic: FakeHaptic,
    now: Millis,
}

impl Bench {
    fn new() -> Self {
        Self {
            controller: Controller::new(),
            led: FakeLed::default(),
            haptic: FakeHaptic::default(),
            now: 0,
        }
    }

    /// Poll every millisecond for `ms` with a fixed level.
    fn hold(&mut self, level: bool, ms: Millis) -> Option<Millis> {
        for _ in 0..ms {
            let outcome = self
                .controller
                .cycle(level, self.now, &mut self.led, &mut self.haptic);
            if let CycleOutcome::Sleep(_) = outcome {
                return Some(self.now);
            }
            self.now += 1;
        }
        None
    }

    fn press(&mut self, ms: Millis) {
        self.hold(LOW, ms);
        self.hold(HIGH, DEBOUNCE_WINDOW_MS + 2);
    }
}

#[test]
fn first_cycle_applies_off() {
    let mut b = Bench::new();
    b.hold(HIGH, 1);
    assert_eq!(b.led.applied, Some(LedMode::Off));
}

#[test]
fn short_press_advances_mode() {
    let mut b = Bench::new();
    b.press(200);
    assert_eq!(b.controller.mode(), LedMode::StaticColor);
    b.hold(HIGH, 1);
    assert_eq!(b.led.applied, Some(LedMode::StaticColor));
    assert_eq!(b.haptic.triggers, 0);
}

#[test]
fn three_presses_return_to_off() {
    let mut b = Bench::new();
    b.press(100);
    b.press(100);
    assert_eq!(b.controller.mode(), LedMode::AnimatedFade);
    b.press(100);
    assert_eq!(b.controller.mode(), LedMode::Off);
}

#[test]
fn just_under_threshold_is_single_press() {
    let mut b = Bench::new();
    b.press(LONG_PRESS_THRESHOLD_MS - 1);
    assert_eq!(b.controller.mode(), LedMode::StaticColor);
    assert_eq!(b.haptic.triggers, 0);
}

#[test]
fn long_hold_triggers_haptic_before_release() {
    let mut b = Bench::new();
    b.hold(LOW, LONG_PRESS_THRESHOLD_MS + 1);
    assert_eq!(b.haptic.triggers, 1);
    assert!(b.controller.button_pressed());

    b.hold(HIGH, DEBOUNCE_WINDOW_MS + 2);
    assert_eq!(b.haptic.triggers, 1);
    assert_eq!(b.controller.mode(), LedMode::Off);
    assert!(!b.controller.button_pressed());
}

#[test]
fn long_hold_fires_at_threshold() {
    let mut b = Bench::new();
    b.hold(LOW, LONG_PRESS_THRESHOLD_MS);
    assert_eq!(b.haptic.triggers, 0);
    b.hold(LOW, 1);
    assert_eq!(b.haptic.triggers, 1);
    assert_eq!(b.controller.last_gesture(), Gesture::LongHold);
}

#[test]
fn idle_device_sleeps_after_timeout() {
    let mut b = Bench::new();
    let slept_at = b.hold(HIGH, IDLE_TIMEOUT_MS + 10);
    assert_eq!(slept_at, Some(IDLE_TIMEOUT_MS));
    assert_eq!(b.controller.idle_since(), Some(0));
}

#[test]
fn lit_led_keeps_device_awake() {
    let mut b = Bench::new();
    b.press(100);
    assert_eq!(b.controller.idle_since(), None);
    assert_eq!(b.hold(HIGH, 3 * IDLE_TIMEOUT_MS), None);
}

#[test]
fn running_motor_keeps_device_awake() {
    let mut b = Bench::new();
    b.hold(LOW, LONG_PRESS_THRESHOLD_MS + 1);
    b.hold(HIGH, 100);
    assert_eq!(b.hold(HIGH, 2 * IDLE_TIMEOUT_MS), None);

    b.haptic.active = false;
    let start = b.now;
    assert_eq!(b.hold(HIGH, IDLE_TIMEOUT_MS + 1), Some(start + IDLE_TIMEOUT_MS));
}

#[test]
fn sleep_request_targets_button() {
    let mut b = Bench::new();
    let mut outcome = CycleOutcome::Continue;
    for now in 0..=IDLE_TIMEOUT_MS {
        outcome = b.controller.cycle(HIGH, now, &mut b.led, &mut b.haptic);
    }
    assert_eq!(outcome, CycleOutcome::Sleep(SleepRequest::button()));
}
