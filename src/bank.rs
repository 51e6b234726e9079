//! LED output bank.
//!
//! An ordered, fixed-size set of output pins. Showing a count `n` drives
//! pins `[0, n)` active and `[n, N)` inactive; every call rewrites all pins.

use embedded_hal::digital::OutputPin;

/// Binary output level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// LED off (pin low).
    Inactive,
    /// LED on (pin high).
    Active,
}

impl Level {
    #[inline]
    pub fn is_active(self) -> bool {
        self == Level::Active
    }
}

/// Ordered bank of `N` output pins plus the last level written to each.
pub struct OutputBank<P, const N: usize> {
    pins: [P; N],
    levels: [Level; N],
}

impl<P: OutputPin, const N: usize> OutputBank<P, N> {
    /// Take ownership of `pins`. Position 1 of the count is `pins[0]`.
    ///
    /// Nothing is written until [`OutputBank::init`] or
    /// [`OutputBank::show_count`] is called.
    pub fn new(pins: [P; N]) -> Self {
        Self {
            pins,
            levels: [Level::Inactive; N],
        }
    }

    /// Drive every output inactive.
    pub fn init(&mut self) -> Result<(), P::Error> {
        self.show_count(0).map(|_| ())
    }

    /// Light the first `count` outputs and clear the rest.
    ///
    /// `count` saturates at `N`. Returns the count actually shown.
    /// On a pin error the remaining pins are left untouched and
    /// [`OutputBank::levels`] reflects the writes that succeeded.
    pub fn show_count(&mut self, count: usize) -> Result<usize, P::Error> {
        let count = count.min(N);
        for i in 0..N {
            let level = if i < count { Level::Active } else { Level::Inactive };
            self.set(i, level)?;
        }
        Ok(count)
    }

    fn set(&mut self, idx: usize, level: Level) -> Result<(), P::Error> {
        let pin = &mut self.pins[idx];
        match level {
            Level::Active => pin.set_high()?,
            Level::Inactive => pin.set_low()?,
        }
        self.levels[idx] = level;
        Ok(())
    }

    /// Last level written to each output, in position order.
    #[inline]
    pub fn levels(&self) -> &[Level; N] {
        &self.levels
    }

    /// Number of outputs currently active.
    pub fn active_count(&self) -> usize {
        self.levels.iter().filter(|l| l.is_active()).count()
    }

    /// Number of outputs in the bank.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Give the pins back.
    pub fn release(self) -> [P; N] {
        self.pins
    }
}
