//! Fixed-capacity buffer for one incoming command line

use super::parser::CountScanner;
use super::ConsoleError;
use crate::config::LINE_SIZE;

/// Bytes stripped from both ends of a line.
#[inline]
pub fn is_line_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Strip leading and trailing space, tab, CR and LF.
pub fn trim_line(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|&b| !is_line_whitespace(b))
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|&b| !is_line_whitespace(b))
        .map_or(start, |i| i + 1);
    &line[start..end]
}

/// Line input buffer
///
/// Bytes past [`LINE_SIZE`] are dropped from the stored text;
/// [`LineBuffer::overflowed`] reports whether that happened since the last
/// clear. Every byte, stored or not, still reaches the count scanner, so
/// [`LineBuffer::count`] judges the whole line.
pub struct LineBuffer {
    buf: [u8; LINE_SIZE],
    len: usize,
    overflowed: bool,
    scanner: CountScanner,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_SIZE],
            len: 0,
            overflowed: false,
            scanner: CountScanner::new(),
        }
    }

    /// Push a byte
    pub fn push(&mut self, c: u8) {
        self.scanner.push(c);
        if self.len < LINE_SIZE {
            self.buf[self.len] = c;
            self.len += 1;
        } else {
            self.overflowed = true;
        }
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflowed = false;
        self.scanner = CountScanner::new();
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if input was dropped because the buffer was full
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// True if every byte pushed since the last clear was whitespace
    pub fn is_blank(&self) -> bool {
        self.scanner.is_blank()
    }

    /// Count parsed from the full line, including any dropped bytes
    pub fn count(&self) -> Result<i64, ConsoleError> {
        self.scanner.finish()
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get contents with surrounding whitespace removed
    pub fn trimmed(&self) -> &[u8] {
        trim_line(self.as_bytes())
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
