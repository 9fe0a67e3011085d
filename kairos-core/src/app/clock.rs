//! Clock application controller

use crate::config::ClockConfig;
use crate::state::{Action, Event, Mode};
use crate::time::{Alarm, DateTime};
use crate::traits::{Button, ButtonInputs, Canvas, Rgb565, RtcDriver};
use crate::ui::{draw_frame, Frame};

use super::alarm::AlarmMonitor;
use super::blink::Blink;
use super::hold::HoldRepeat;

/// The clock/alarm application
///
/// `cur` mirrors the RTC outside of time setting. While setting, edits go
/// to `edit` and `cur` follows it, so the RTC is only written when the
/// user leaves the field cycle or the mode.
#[derive(Debug, Clone)]
pub struct ClockApp {
    config: ClockConfig,
    mode: Mode,
    cur: DateTime,
    edit: DateTime,
    alarm: Alarm,
    blink: Blink,
    hold: HoldRepeat,
    monitor: AlarmMonitor,
}

impl ClockApp {
    /// Create an application from a validated configuration
    pub fn new(config: ClockConfig) -> Self {
        let timing = &config.timing;
        Self {
            mode: Mode::View,
            cur: DateTime::default(),
            edit: DateTime::default(),
            alarm: config.alarm,
            blink: Blink::new(timing.blink_ms),
            hold: HoldRepeat::from_timing(timing),
            monitor: AlarmMonitor::new(timing.alarm_ms),
            config,
        }
    }

    /// Enter VIEW synchronized with the RTC and clear the screen
    pub fn init<R, C>(&mut self, rtc: &mut R, canvas: &mut C)
    where
        R: RtcDriver + ?Sized,
        C: Canvas + ?Sized,
    {
        self.mode = Mode::View;
        self.cur = rtc.read_time();
        self.edit = self.cur;
        self.blink.reset();
        self.hold.reset();
        canvas.clear(Rgb565::BLACK);
    }

    /// Run one tick: update state, then redraw
    pub fn on_tick<R, B, C>(&mut self, rtc: &mut R, buttons: &B, canvas: &mut C)
    where
        R: RtcDriver + ?Sized,
        B: ButtonInputs + ?Sized,
        C: Canvas + ?Sized,
    {
        self.step(rtc, buttons);
        self.render(canvas);
    }

    /// State update half of a tick
    ///
    /// Returns true on the tick the alarm effect starts.
    pub fn step<R, B>(&mut self, rtc: &mut R, buttons: &B) -> bool
    where
        R: RtcDriver + ?Sized,
        B: ButtonInputs + ?Sized,
    {
        let tick_ms = self.config.timing.tick_ms;
        let map = self.config.buttons;

        self.blink.advance(tick_ms);

        if self.hold.update(buttons.press_count(map.index(Button::Up)), tick_ms) {
            self.dispatch(Event::UpRepeat, rtc);
        }

        if !self.mode.is_setting_time() {
            self.cur = rtc.read_time();
        }

        // Edges apply in order, each one seeing the mode the previous left
        if buttons.is_edge(map.index(Button::Mode)) {
            self.dispatch(Event::ModePress, rtc);
        }
        if buttons.is_edge(map.index(Button::Up)) {
            self.dispatch(Event::UpPress, rtc);
        }
        if buttons.is_edge(map.index(Button::Ok)) {
            self.dispatch(Event::OkPress, rtc);
        }

        if self.mode.is_setting_time() {
            self.cur = self.edit;
        }

        self.monitor.update(&self.cur, &self.alarm, tick_ms)
    }

    /// Redraw the full screen from the current state
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let frame = Frame {
            mode: self.mode,
            time: &self.cur,
            alarm: &self.alarm,
            blink_on: self.blink.is_on(),
            banner: self.monitor.banner(),
        };
        draw_frame(canvas, &frame);
    }

    fn dispatch<R: RtcDriver + ?Sized>(&mut self, event: Event, rtc: &mut R) {
        let (mode, action) = self.mode.transition(event);
        self.mode = mode;
        self.apply(action, rtc);
    }

    fn apply<R: RtcDriver + ?Sized>(&mut self, action: Action, rtc: &mut R) {
        match action {
            Action::None => {}
            Action::Snapshot => self.edit = self.cur,
            Action::Commit => rtc.commit(&self.edit),
            Action::Resync => {
                rtc.commit(&self.edit);
                self.cur = rtc.read_time();
                self.edit = self.cur;
            }
            Action::IncrementTime(field) => self.edit.increment(field),
            Action::IncrementAlarm(field) => {
                self.alarm.increment(field);
            }
            Action::ToggleAlarm => self.alarm.toggle(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Time currently shown: the RTC time, or the edit buffer while setting
    pub fn current(&self) -> &DateTime {
        &self.cur
    }

    /// Scratch buffer used while setting the time
    pub fn edit_buffer(&self) -> &DateTime {
        &self.edit
    }

    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    pub fn is_alarm_active(&self) -> bool {
        self.monitor.is_active()
    }

    pub fn blink_on(&self) -> bool {
        self.blink.is_on()
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }
}
