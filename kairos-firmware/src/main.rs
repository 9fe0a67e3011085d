//! Kairos - Desk Clock & Alarm Firmware
//!
//! Main firmware binary for STM32F407 boards with an ILI9341 TFT on the
//! FSMC bus, a DS3231 RTC on I2C1 and three front-panel buttons.
//!
//! Named after the Greek "kairos" meaning "the right moment".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::i2c::I2c;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use kairos_core::config::{parse_config, ClockConfig};
use kairos_core::app::ClockApp;
use kairos_display::{Lcd, Panel};
use kairos_drivers::input::ButtonScanner;
use kairos_drivers::rtc::Ds3231;
use kairos_hal_stm32f4::fsmc::FsmcTiming;
use kairos_hal_stm32f4::{i2c, Button, FsmcBus, Pin};

mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit clock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../clock.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Kairos firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Display: FSMC bank 1, reset on PB14, backlight on PB15
    let bus = FsmcBus::new(p.FSMC, FsmcTiming::default());
    let reset = Pin::new(Output::new(p.PB14, Level::High, Speed::Low));
    let backlight = Pin::new(Output::new(p.PB15, Level::Low, Speed::Low));
    let mut panel = Panel::new(Lcd::new(bus, config.display.scan_dir), reset, backlight);
    let id = panel.init(&mut Delay);
    info!(
        "LCD {=u16:#x} ready, {}x{}",
        id,
        panel.lcd().width(),
        panel.lcd().height()
    );

    // RTC: DS3231 on I2C1 (PB8=SCL, PB9=SDA)
    let i2c = I2c::new_blocking(p.I2C1, p.PB8, p.PB9, i2c::rtc_config());
    let rtc = Ds3231::new(i2c);
    info!("RTC bus initialized");

    // Buttons: active low with pull-ups, registered in scanner index order
    let mut buttons = ButtonScanner::new(true);
    for pin in [
        Input::new(p.PE4, Pull::Up),
        Input::new(p.PE3, Pull::Up),
        Input::new(p.PE2, Pull::Up),
    ] {
        if buttons.add(Button::new(pin)).is_err() {
            warn!("Button scanner full");
        }
    }
    info!("{} buttons registered", buttons.len());

    let app = ClockApp::new(config);

    spawner
        .spawn(tasks::clock_task(app, panel, rtc, buttons))
        .unwrap();

    info!("All tasks spawned");
}

/// Parse the embedded configuration, falling back to defaults
fn load_config() -> ClockConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Configuration loaded: tick={}ms alarm={}",
                config.timing.tick_ms, config.alarm
            );
            config
        }
        Err(e) => {
            warn!("Invalid embedded config ({}), using defaults", e);
            ClockConfig::default()
        }
    }
}
