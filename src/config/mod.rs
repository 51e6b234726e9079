//! Module: config
//!
//! Purpose: Fixed runtime configuration for SerialLedCounter.
//!
//! Everything here is decided at build time. There is no persistence and no
//! console command that changes these values at runtime.

/// Maximum line length accepted by the line reader.
pub const LINE_SIZE: usize = 64;

/// Number of LEDs in the output bank.
pub const NUM_LEDS: usize = 5;

/// Serial and console settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    /// UART baud rate.
    pub baud_rate: u32,
    /// Byte that ends a command line.
    pub terminator: u8,
    /// Release an unterminated line after this much input silence.
    pub line_timeout_ms: u32,
    /// Line written once the firmware is ready for commands.
    pub ready_banner: &'static str,
    /// Block at startup until the host side of the channel is ready.
    pub wait_for_host: bool,
}

impl CounterConfig {
    /// Defaults matching the host tooling (9600 8N1, newline-terminated).
    pub const DEFAULT: Self = Self {
        baud_rate: 9600,
        terminator: b'\n',
        line_timeout_ms: 1000,
        ready_banner: "ARDUINO READY",
        wait_for_host: true,
    };

    /// Idle timeout in microseconds.
    #[inline]
    pub fn line_timeout_us(&self) -> u64 {
        self.line_timeout_ms as u64 * 1000
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Global configuration used by the firmware entry point.
pub static CONFIG: CounterConfig = CounterConfig::DEFAULT;
