//! # SerialLedCounter
//!
//! Shows a count received over serial on a bank of LEDs.
//!
//! ## Architecture
//!
//! One cooperative loop, no tasks, no locks:
//! - [`Console`] assembles bytes into lines and trims them
//! - [`console::execute`] parses the count, clamps it and drives the bank
//! - [`OutputBank`] owns the LED pins and remembers the levels it wrote
//!
//! Hardware is reached only through [`hal::SerialPort`] and
//! `embedded_hal::digital::OutputPin`, so the whole core runs on the host.

#![cfg_attr(not(test), no_std)]

pub mod bank;
pub mod config;
pub mod console;
pub mod hal;

pub use bank::{Level, OutputBank};
pub use config::{CounterConfig, CONFIG, NUM_LEDS};
pub use console::{Console, ConsoleError, StartupError};
pub use hal::{SerialPort, PIN_MAP};
