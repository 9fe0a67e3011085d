//! Clock tick task
//!
//! Every tick: sample the buttons, then let the application update its
//! state and redraw.

use defmt::*;
use embassy_stm32::i2c::{I2c, Master};
use embassy_stm32::mode::Blocking;
use embassy_time::{Duration, Instant, Ticker};

use kairos_core::app::ClockApp;
use kairos_display::Panel;
use kairos_drivers::input::ButtonScanner;
use kairos_drivers::rtc::Ds3231;
use kairos_hal_stm32f4::{Button, FsmcBus, Pin};

pub type Display = Panel<FsmcBus<'static>, Pin<'static>, Pin<'static>>;
pub type Rtc = Ds3231<I2c<'static, Blocking, Master>>;
pub type Buttons = ButtonScanner<Button<'static>>;

/// Redraws slower than this miss the next tick
const SLOW_TICK_US: u64 = 40_000;

#[embassy_executor::task]
pub async fn clock_task(mut app: ClockApp, mut panel: Display, mut rtc: Rtc, mut buttons: Buttons) {
    info!("Clock task started");

    let lcd = panel.lcd_mut();
    app.init(&mut rtc, lcd);
    info!("Clock at {}", app.current());

    let tick = Duration::from_millis(u64::from(app.config().timing.tick_ms));
    let mut ticker = Ticker::every(tick);
    let mut rtc_errors = rtc.error_count();

    loop {
        ticker.next().await;
        let start = Instant::now();

        buttons.scan();
        let mode = app.mode();
        app.on_tick(&mut rtc, &buttons, lcd);

        if app.mode() != mode {
            debug!("Mode {} -> {}", mode, app.mode());
        }
        if rtc.error_count() != rtc_errors {
            rtc_errors = rtc.error_count();
            warn!("RTC errors: {}", rtc_errors);
        }

        let elapsed = start.elapsed().as_micros();
        if elapsed > SLOW_TICK_US {
            trace!("Slow tick: {}us", elapsed);
        }
    }
}
