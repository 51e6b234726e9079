//! Hardware Abstraction Layer for SerialLedCounter.
//!
//! Thin wrappers around ESP-IDF peripherals.
//! Business logic stays in core modules, HAL is just I/O.

pub mod gpio;
pub mod serial;

pub use gpio::{PinMap, PIN_MAP};
pub use serial::{SerialPort, SerialWriter};

#[cfg(target_os = "espidf")]
pub use serial::UartSerial;
