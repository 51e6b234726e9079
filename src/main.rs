//! SerialLedCounter - Main entry point
//!
//! 1. Install the ESP-IDF logger
//! 2. Configure LED pins and the command UART
//! 3. Clear the LEDs, open the channel, print the ready banner
//! 4. Poll the console forever, yielding one RTOS tick per pass

#[cfg(target_os = "espidf")]
use esp_idf_svc::{
    hal::{
        gpio::AnyIOPin,
        peripherals::Peripherals,
        uart::{config::Config, UartDriver},
        units::Hertz,
    },
    sys::{self as esp_idf_sys, EspError},
};

#[cfg(target_os = "espidf")]
use serial_led_counter::{
    hal::{gpio::led_drivers, UartSerial},
    Console, OutputBank, StartupError, CONFIG, PIN_MAP,
};

#[cfg(target_os = "espidf")]
fn main() -> Result<(), EspError> {
    // Initialize ESP-IDF
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    debug_assert!(PIN_MAP.is_distinct(), "pin map reuses a GPIO");
    log::info!(
        "LEDs on {:?}, command UART tx={} rx={}",
        PIN_MAP.leds,
        PIN_MAP.uart_tx,
        PIN_MAP.uart_rx
    );

    let peripherals = Peripherals::take()?;

    // SAFETY: UART pins come from the pin map, which shares no GPIO with
    // the LEDs, and are claimed once here.
    let (tx, rx) = unsafe { (AnyIOPin::new(PIN_MAP.uart_tx), AnyIOPin::new(PIN_MAP.uart_rx)) };
    let uart = UartDriver::new(
        peripherals.uart1,
        tx,
        rx,
        Option::<AnyIOPin>::None, // CTS
        Option::<AnyIOPin>::None, // RTS
        &Config::default().baudrate(Hertz(CONFIG.baud_rate)),
    )?;

    let mut serial = UartSerial::new(uart);
    let mut bank = OutputBank::new(led_drivers(&PIN_MAP)?);
    let mut console = Console::new(CONFIG);

    console
        .start(&mut serial, &mut bank, || unsafe {
            esp_idf_sys::vTaskDelay(10);
        })
        .map_err(|e| {
            log::error!("{}", e);
            match e {
                StartupError::Serial(e) | StartupError::Output(e) => e,
            }
        })?;

    loop {
        if let Err(e) = console.poll(&mut serial, &mut bank, timestamp_us()) {
            log::error!("serial error: {:?}", e);
        }

        // Let the idle task feed the watchdog
        unsafe {
            esp_idf_sys::vTaskDelay(1);
        }
    }
}

#[cfg(target_os = "espidf")]
fn timestamp_us() -> u64 {
    // SAFETY: esp_timer is started by ESP-IDF before main
    let now = unsafe { esp_idf_sys::esp_timer_get_time() };
    now.max(0) as u64
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!(
        "{} is firmware; build it for an ESP-IDF target (esp32s3 or esp32p4).",
        serial_led_counter::console::VERSION
    );
}
