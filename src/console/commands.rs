//! Count command handler
//!
//! The only command is a bare integer. It is parsed, clamped to the bank
//! size, shown on the LEDs and acknowledged with the value applied.

use core::fmt::Write;
use embedded_hal::digital::OutputPin;

use super::line_buffer::trim_line;
use super::parser::{clamp_count, parse_count};
use super::ConsoleError;
use crate::bank::OutputBank;

/// Prefix of a successful response.
pub const ACK_PREFIX: &str = "ACK: ";

/// Prefix of a rejected-line response.
pub const ERR_PREFIX: &str = "ERR: ";

/// Execute one trimmed, non-empty command line.
///
/// Writes exactly one response line to `out` and returns the count shown.
/// Write errors on `out` are ignored here; the caller owns the transport.
pub fn execute<P: OutputPin, const N: usize>(
    line: &[u8],
    bank: &mut OutputBank<P, N>,
    out: &mut dyn Write,
) -> Result<usize, ConsoleError> {
    respond(parse_count(line), line, bank, out)
}

/// Apply an already-parsed count, or report why it was rejected.
///
/// `echo` is the text quoted back in the rejection; it may be a truncated
/// prefix of the line that produced `parsed`.
pub fn respond<P: OutputPin, const N: usize>(
    parsed: Result<i64, ConsoleError>,
    echo: &[u8],
    bank: &mut OutputBank<P, N>,
    out: &mut dyn Write,
) -> Result<usize, ConsoleError> {
    let value = match parsed {
        Ok(v) => v,
        Err(err) => {
            log::warn!("rejected line \"{}\"", echo.escape_ascii());
            let _ = write!(out, "{}{}: ", ERR_PREFIX, err.message());
            let _ = write_lossy(echo, out);
            let _ = out.write_str("\r\n");
            return Err(err);
        }
    };

    let count = clamp_count(value, N);
    match bank.show_count(count) {
        Ok(shown) => {
            log::info!("count {} -> {} LEDs", value, shown);
            let _ = write!(out, "{}{}\r\n", ACK_PREFIX, shown);
            Ok(shown)
        }
        Err(e) => {
            let err = ConsoleError::OutputFault;
            log::error!("{} while showing {}: {:?}", err, count, e);
            let _ = write!(out, "{}{}\r\n", ERR_PREFIX, err.message());
            Err(err)
        }
    }
}

/// Write bytes as text, replacing each invalid UTF-8 sequence with U+FFFD.
fn write_lossy(bytes: &[u8], out: &mut dyn Write) -> core::fmt::Result {
    for chunk in bytes.utf8_chunks() {
        out.write_str(chunk.valid())?;
        if !chunk.invalid().is_empty() {
            out.write_char(char::REPLACEMENT_CHARACTER)?;
        }
    }
    Ok(())
}

/// Trim a raw line and execute it.
///
/// Returns `None` for blank lines, which get no response.
pub fn process_line<P: OutputPin, const N: usize>(
    raw: &[u8],
    bank: &mut OutputBank<P, N>,
    out: &mut dyn Write,
) -> Option<Result<usize, ConsoleError>> {
    let line = trim_line(raw);
    if line.is_empty() {
        return None;
    }
    Some(execute(line, bank, out))
}
