//! I2C settings for the DS3231 RTC

use embassy_stm32::i2c::Config;
use embassy_stm32::time::Hertz;
use embassy_time::Duration;

/// DS3231 supports fast mode, but the board pull-ups are sized for 100 kHz
pub const RTC_FREQUENCY_HZ: u32 = 100_000;

/// Bus timeout; a stuck transfer must not eat the next tick
pub const RTC_TIMEOUT_MS: u64 = 20;

/// Blocking I2C configuration for the RTC bus
pub fn rtc_config() -> Config {
    let mut config = Config::default();
    config.frequency = Hertz(RTC_FREQUENCY_HZ);
    config.timeout = Duration::from_millis(RTC_TIMEOUT_MS);
    config
}
