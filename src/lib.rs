//! Device-independent core of the glowtap firmware.
//!
//! Everything here is plain synchronous Rust that takes the current time
//! as an argument, so it runs unchanged inside the Embassy tasks on the
//! nRF52840 and in host tests.
//!
//! Usage: `cargo test` (host) or `cargo build --features embedded --target thumbv7em-none-eabihf`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and links against this library for all decision logic.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod error;
pub mod haptic;
pub mod input;
pub mod led;
pub mod power_logic;
pub mod state;
pub mod status;

pub use error::Error;
