//! Count command parser
//!
//! Accepts an optional `+`/`-` followed by one or more ASCII digits.
//! Anything else is [`ConsoleError::InvalidCommandSyntax`].

use super::line_buffer::is_line_whitespace;
use super::ConsoleError;

/// Incremental count parser.
///
/// Bytes are validated and accumulated as they arrive, so the verdict does
/// not depend on how much of the line fits in the echo buffer. Leading and
/// trailing line whitespace is skipped; whitespace between other bytes is a
/// syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountScanner {
    /// Seen a non-whitespace byte
    started: bool,
    /// Seen whitespace after the first non-whitespace byte
    trailing: bool,
    negative: bool,
    digits: usize,
    value: i64,
    invalid: bool,
}

impl CountScanner {
    pub const fn new() -> Self {
        Self {
            started: false,
            trailing: false,
            negative: false,
            digits: 0,
            value: 0,
            invalid: false,
        }
    }

    /// Feed one byte of the line.
    pub fn push(&mut self, b: u8) {
        if is_line_whitespace(b) {
            self.trailing |= self.started;
            return;
        }
        if self.trailing {
            self.invalid = true;
            return;
        }

        if !self.started {
            self.started = true;
            match b {
                b'-' => {
                    self.negative = true;
                    return;
                }
                b'+' => return,
                _ => {}
            }
        }

        if b.is_ascii_digit() {
            self.digits += 1;
            self.value = self
                .value
                .saturating_mul(10)
                .saturating_add(i64::from(b - b'0'));
        } else {
            self.invalid = true;
        }
    }

    /// True if only whitespace has been fed.
    #[inline]
    pub fn is_blank(&self) -> bool {
        !self.started
    }

    /// Verdict for the bytes fed so far.
    ///
    /// A bare sign has no digits and is rejected.
    pub fn finish(&self) -> Result<i64, ConsoleError> {
        if self.invalid || self.digits == 0 {
            return Err(ConsoleError::InvalidCommandSyntax);
        }
        Ok(if self.negative { -self.value } else { self.value })
    }
}

impl Default for CountScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a trimmed line into a signed count.
///
/// The magnitude saturates at `i64::MAX`, so arbitrarily long digit strings
/// are accepted and later clamped by [`clamp_count`].
pub fn parse_count(line: &[u8]) -> Result<i64, ConsoleError> {
    let mut scanner = CountScanner::new();
    for &b in line {
        scanner.push(b);
    }
    scanner.finish()
}

/// Saturate a parsed value into `[0, max]`.
#[inline]
pub fn clamp_count(value: i64, max: usize) -> usize {
    if value <= 0 {
        0
    } else {
        usize::try_from(value).map_or(max, |v| v.min(max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_digits() {
        assert_eq!(parse_count(b"3"), Ok(3));
        assert_eq!(parse_count(b"0042"), Ok(42));
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_count(b"+4"), Ok(4));
        assert_eq!(parse_count(b"-3"), Ok(-3));
        assert_eq!(parse_count(b"-0"), Ok(0));
    }

    #[test]
    fn test_parse_saturates_long_numbers() {
        assert_eq!(parse_count(b"99999999999999999999999999"), Ok(i64::MAX));
        assert_eq!(parse_count(b"-99999999999999999999999999"), Ok(-i64::MAX));
    }

    #[test]
    fn test_bare_sign_rejected() {
        assert_eq!(parse_count(b"+"), Err(ConsoleError::InvalidCommandSyntax));
        assert_eq!(parse_count(b"-"), Err(ConsoleError::InvalidCommandSyntax));
    }

    #[test]
    fn test_scanner_ignores_length() {
        let mut scanner = CountScanner::new();
        for _ in 0..500 {
            scanner.push(b'0');
        }
        scanner.push(b'3');
        assert_eq!(scanner.finish(), Ok(3));
    }

    #[test]
    fn test_scanner_inner_whitespace_rejected() {
        let mut scanner = CountScanner::new();
        for &b in b"  5   x\r" {
            scanner.push(b);
        }
        assert!(!scanner.is_blank());
        assert_eq!(scanner.finish(), Err(ConsoleError::InvalidCommandSyntax));
    }

    #[test]
    fn test_scanner_blank() {
        let mut scanner = CountScanner::new();
        for &b in b" \t\r" {
            scanner.push(b);
        }
        assert!(scanner.is_blank());
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_count(-7, 5), 0);
        assert_eq!(clamp_count(0, 5), 0);
        assert_eq!(clamp_count(5, 5), 5);
        assert_eq!(clamp_count(i64::MAX, 5), 5);
    }
}
