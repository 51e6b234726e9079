//! GPIO pin map for the LED bank and the command UART.

use crate::config::NUM_LEDS;

/// Board wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    /// LED pins, first entry is position 1 of the displayed count.
    pub leds: [i32; NUM_LEDS],
    /// Command UART TX pin.
    pub uart_tx: i32,
    /// Command UART RX pin.
    pub uart_rx: i32,
}

impl PinMap {
    /// True if no GPIO number is used twice.
    pub fn is_distinct(&self) -> bool {
        let mut all = [0i32; NUM_LEDS + 2];
        all[..NUM_LEDS].copy_from_slice(&self.leds);
        all[NUM_LEDS] = self.uart_tx;
        all[NUM_LEDS + 1] = self.uart_rx;

        all.iter()
            .enumerate()
            .all(|(i, pin)| !all[i + 1..].contains(pin))
    }
}

/// ESP32-S3 DevKit wiring. UART0 stays on the USB bridge for logs.
#[cfg(not(feature = "esp32p4"))]
pub const PIN_MAP: PinMap = PinMap {
    leds: [2, 3, 4, 5, 6],
    uart_tx: 17,
    uart_rx: 18,
};

/// ESP32-P4 Function EV board wiring.
#[cfg(feature = "esp32p4")]
pub const PIN_MAP: PinMap = PinMap {
    leds: [20, 21, 22, 23, 26],
    uart_tx: 10,
    uart_rx: 11,
};

#[cfg(target_os = "espidf")]
pub use esp::led_drivers;

#[cfg(target_os = "espidf")]
mod esp {
    use super::PinMap;
    use crate::config::NUM_LEDS;
    use esp_idf_svc::hal::gpio::{AnyOutputPin, Output, PinDriver};
    use esp_idf_svc::sys::{EspError, ESP_ERR_INVALID_SIZE};

    /// LED output driver.
    pub type LedDriver = PinDriver<'static, AnyOutputPin, Output>;

    /// Configure every LED pin in `map` as a push-pull output.
    ///
    /// Levels are left to the caller; [`crate::OutputBank::init`] drives
    /// them all inactive.
    pub fn led_drivers(map: &PinMap) -> Result<[LedDriver; NUM_LEDS], EspError> {
        let size_mismatch = || EspError::from_infallible::<ESP_ERR_INVALID_SIZE>();

        let mut drivers = heapless::Vec::<LedDriver, NUM_LEDS>::new();
        for &gpio in &map.leds {
            drivers.push(output(gpio)?).map_err(|_| size_mismatch())?;
        }
        drivers.into_array().map_err(|_| size_mismatch())
    }

    fn output(gpio: i32) -> Result<LedDriver, EspError> {
        // SAFETY: each GPIO in the map is claimed exactly once, at boot,
        // and `PinMap::is_distinct` is checked before this call.
        let pin = unsafe { AnyOutputPin::new(gpio) };
        PinDriver::output(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_map_has_no_duplicates() {
        assert!(PIN_MAP.is_distinct());
    }

    #[test]
    fn test_duplicate_detected() {
        let map = PinMap {
            leds: [2, 3, 4, 5, 6],
            uart_tx: 4,
            uart_rx: 18,
        };
        assert!(!map.is_distinct());
    }
}
