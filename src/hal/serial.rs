//! Serial transport seam for the command channel.
//!
//! The console only needs availability checks, single-byte reads and text
//! writes. [`UartSerial`] provides them on top of the ESP-IDF UART driver;
//! tests provide scripted implementations.

use core::fmt;

/// Byte-oriented serial channel used by the console.
pub trait SerialPort {
    /// Transport error type.
    type Error: fmt::Debug;

    /// Configure the channel for `baud_rate` and start receiving.
    fn open(&mut self, baud_rate: u32) -> Result<(), Self::Error>;

    /// True once the host side of the channel is connected.
    ///
    /// Plain UARTs are always ready; native USB channels are not until the
    /// host opens the port.
    fn is_ready(&self) -> bool;

    /// True if at least one byte can be read without blocking.
    fn available(&mut self) -> bool;

    /// Read one byte if one is waiting. Never blocks.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Write text exactly as given.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error>;
}

/// Adapts a [`SerialPort`] to [`core::fmt::Write`].
///
/// `fmt::Error` carries no payload, so the first transport error is kept
/// and can be taken with [`SerialWriter::take_error`].
pub struct SerialWriter<'a, S: SerialPort> {
    port: &'a mut S,
    error: Option<S::Error>,
}

impl<'a, S: SerialPort> SerialWriter<'a, S> {
    pub fn new(port: &'a mut S) -> Self {
        Self { port, error: None }
    }

    /// Transport error recorded by the last failed write, if any.
    pub fn take_error(&mut self) -> Option<S::Error> {
        self.error.take()
    }
}

impl<S: SerialPort> fmt::Write for SerialWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.port.write_str(s).map_err(|e| {
            if self.error.is_none() {
                self.error = Some(e);
            }
            fmt::Error
        })
    }
}

#[cfg(target_os = "espidf")]
pub use esp::UartSerial;

#[cfg(target_os = "espidf")]
mod esp {
    use super::SerialPort;
    use esp_idf_svc::hal::delay::NON_BLOCK;
    use esp_idf_svc::hal::uart::UartDriver;
    use esp_idf_svc::hal::units::Hertz;
    use esp_idf_svc::sys::EspError;

    /// Command channel on a hardware UART.
    pub struct UartSerial<'d> {
        uart: UartDriver<'d>,
    }

    impl<'d> UartSerial<'d> {
        pub fn new(uart: UartDriver<'d>) -> Self {
            Self { uart }
        }
    }

    impl SerialPort for UartSerial<'_> {
        type Error = EspError;

        fn open(&mut self, baud_rate: u32) -> Result<(), EspError> {
            self.uart.change_baudrate(Hertz(baud_rate))?;
            Ok(())
        }

        fn is_ready(&self) -> bool {
            true
        }

        fn available(&mut self) -> bool {
            matches!(self.uart.remaining_read(), Ok(n) if n > 0)
        }

        fn read_byte(&mut self) -> Result<Option<u8>, EspError> {
            let mut buf = [0u8; 1];
            let n = self.uart.read(&mut buf, NON_BLOCK)?;
            Ok((n == 1).then_some(buf[0]))
        }

        fn write_str(&mut self, s: &str) -> Result<(), EspError> {
            let mut bytes = s.as_bytes();
            while !bytes.is_empty() {
                let n = self.uart.write(bytes)?;
                bytes = &bytes[n..];
            }
            Ok(())
        }
    }
}
