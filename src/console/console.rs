//! Main console struct integrating line assembly and command execution

use core::fmt::Write;
use embedded_hal::digital::OutputPin;

use super::{respond, ConsoleError, LineBuffer, StartupError};
use crate::bank::OutputBank;
use crate::config::CounterConfig;
use crate::hal::{SerialPort, SerialWriter};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Outcome of one processed line: the count shown, or why it was rejected.
pub type LineResult = Result<usize, ConsoleError>;

/// Console state: the line being assembled and when its last byte arrived.
pub struct Console {
    config: CounterConfig,
    line: LineBuffer,
    /// Timestamp of the last byte pushed into `line`
    last_rx_us: Option<u64>,
}

impl Console {
    /// Create new console
    pub const fn new(config: CounterConfig) -> Self {
        Self {
            config,
            line: LineBuffer::new(),
            last_rx_us: None,
        }
    }

    /// Bytes of the line received so far
    pub fn pending(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// Bring outputs and serial channel up, then announce readiness.
    ///
    /// All LEDs are cleared before the channel is opened. When
    /// `wait_for_host` is set, `idle` is called until the port reports ready.
    pub fn start<S: SerialPort, P: OutputPin, const N: usize>(
        &mut self,
        serial: &mut S,
        bank: &mut OutputBank<P, N>,
        mut idle: impl FnMut(),
    ) -> Result<(), StartupError<S::Error, P::Error>> {
        bank.init().map_err(StartupError::Output)?;
        serial
            .open(self.config.baud_rate)
            .map_err(StartupError::Serial)?;

        if self.config.wait_for_host {
            while !serial.is_ready() {
                idle();
            }
        }

        serial
            .write_str(self.config.ready_banner)
            .and_then(|_| serial.write_str("\r\n"))
            .map_err(StartupError::Serial)?;

        log::info!(
            "{} ready: {} LEDs, {} baud",
            VERSION,
            N,
            self.config.baud_rate
        );
        Ok(())
    }

    /// Process a single input byte
    ///
    /// Returns Some(result) if a non-blank line completed, None otherwise.
    pub fn feed_byte<P: OutputPin, const N: usize>(
        &mut self,
        byte: u8,
        now_us: u64,
        bank: &mut OutputBank<P, N>,
        out: &mut dyn Write,
    ) -> Option<LineResult> {
        if byte == self.config.terminator {
            return self.finish_line(bank, out);
        }

        self.line.push(byte);
        self.last_rx_us = Some(now_us);
        None
    }

    /// Release a partial line once the input has been idle for
    /// `line_timeout_ms`. A zero timeout disables this.
    pub fn tick<P: OutputPin, const N: usize>(
        &mut self,
        now_us: u64,
        bank: &mut OutputBank<P, N>,
        out: &mut dyn Write,
    ) -> Option<LineResult> {
        let timeout_us = self.config.line_timeout_us();
        let expired = match self.last_rx_us {
            Some(last) => timeout_us > 0 && now_us.saturating_sub(last) >= timeout_us,
            None => false,
        };

        if !expired {
            return None;
        }

        log::debug!("line idle timeout, releasing {} bytes", self.line.len());
        self.finish_line(bank, out)
    }

    /// One iteration of the polling loop.
    ///
    /// Reads whatever is waiting, stopping after the first line that produced
    /// a response, then applies the idle timeout. Never blocks.
    pub fn poll<S: SerialPort, P: OutputPin, const N: usize>(
        &mut self,
        serial: &mut S,
        bank: &mut OutputBank<P, N>,
        now_us: u64,
    ) -> Result<Option<LineResult>, S::Error> {
        while serial.available() {
            let Some(byte) = serial.read_byte()? else {
                break;
            };

            let mut out = SerialWriter::new(serial);
            let result = self.feed_byte(byte, now_us, bank, &mut out);
            if let Some(e) = out.take_error() {
                return Err(e);
            }
            if result.is_some() {
                return Ok(result);
            }
        }

        let mut out = SerialWriter::new(serial);
        let result = self.tick(now_us, bank, &mut out);
        out.take_error().map_or(Ok(result), Err)
    }

    fn finish_line<P: OutputPin, const N: usize>(
        &mut self,
        bank: &mut OutputBank<P, N>,
        out: &mut dyn Write,
    ) -> Option<LineResult> {
        if self.line.overflowed() {
            log::warn!(
                "line longer than {} bytes, echo truncated",
                crate::config::LINE_SIZE
            );
        }
        log::trace!("line complete: {:?}", self.line.as_bytes());

        let result = if self.line.is_blank() {
            None
        } else {
            Some(respond(self.line.count(), self.line.trimmed(), bank, out))
        };
        self.line.clear();
        self.last_rx_us = None;
        result
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(CounterConfig::DEFAULT)
    }
}
