//! Screen layout for a 240 px wide portrait panel
//!
//! ```text
//!   y=0   +--------------------------------+
//!         | MODE: ALARM          ON        |  status bar, 16 px
//!   y=20  +--------------------------------+
//!   y=100 |        HH : MM : SS            |  24 px
//!   y=130 |  D:dd Dt:dd Mo:mm Yr:yy        |  24 px
//!   y=180 +--------------------------------+
//!         |        ALARM!                  |  banner
//!   y=220 +--------------------------------+
//! ```
//!
//! Every frame redraws all regions; glyphs are drawn opaque so no area
//! needs clearing first except the status bar.

use crate::app::Banner;
use crate::state::Mode;
use crate::time::{Alarm, DateTime, Field};
use crate::traits::{Canvas, Rgb565, TextMode};

const DIGIT_SIZE: u8 = 24;
const STATUS_SIZE: u8 = 16;

const STATUS_BAR: (u16, u16, u16, u16) = (0, 0, 240, 20);
const BANNER: (u16, u16, u16, u16) = (0, 180, 240, 220);

const TIME_Y: u16 = 100;
const DATE_Y: u16 = 130;

/// Everything one frame shows
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub mode: Mode,
    /// Live time, or the edit buffer while setting
    pub time: &'a DateTime,
    pub alarm: &'a Alarm,
    pub blink_on: bool,
    pub banner: Banner,
}

impl Frame<'_> {
    /// Whether `field` is under the cursor and currently blanked
    fn is_blank(&self, field: Field) -> bool {
        !self.blink_on && self.is_active(field)
    }

    fn is_active(&self, field: Field) -> bool {
        match self.mode {
            Mode::View => false,
            Mode::SetTime { field: f } => f == field,
            // The alarm has no calendar fields to highlight
            Mode::Alarm { field: f } => field.is_time_of_day() && f == Some(field),
        }
    }

    /// Hour, minute, second shown in the large time row
    fn time_row(&self) -> [u8; 3] {
        if self.mode.is_alarm() {
            [self.alarm.hour, self.alarm.min, self.alarm.sec]
        } else {
            [self.time.hour, self.time.min, self.time.sec]
        }
    }
}

/// Redraw the whole screen
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, frame: &Frame<'_>) {
    draw_status_bar(canvas, frame);
    draw_time_row(canvas, frame);
    draw_date_row(canvas, frame);
    draw_banner(canvas, frame.banner);
}

fn draw_status_bar<C: Canvas + ?Sized>(canvas: &mut C, frame: &Frame<'_>) {
    let (xs, ys, xe, ye) = STATUS_BAR;
    canvas.fill(xs, ys, xe, ye, Rgb565::BLACK);

    let label = match frame.mode {
        Mode::View => "MODE: VIEW",
        Mode::SetTime { .. } => "MODE: SET",
        Mode::Alarm { .. } => "MODE: ALARM",
    };
    canvas.show_str(4, 2, label, Rgb565::WHITE, Rgb565::BLACK, STATUS_SIZE, TextMode::Opaque);

    if frame.mode.is_alarm() {
        let (text, color) = if frame.alarm.enabled {
            ("ON", Rgb565::GREEN)
        } else {
            ("OFF", Rgb565::RED)
        };
        canvas.show_str(140, 2, text, color, Rgb565::BLACK, STATUS_SIZE, TextMode::Opaque);
    }
}

fn draw_time_row<C: Canvas + ?Sized>(canvas: &mut C, frame: &Frame<'_>) {
    let [hour, min, sec] = frame.time_row();
    draw_two_digits(canvas, 70, TIME_Y, hour, frame.is_blank(Field::Hour));
    draw_colon(canvas, 100);
    draw_two_digits(canvas, 110, TIME_Y, min, frame.is_blank(Field::Min));
    draw_colon(canvas, 140);
    draw_two_digits(canvas, 150, TIME_Y, sec, frame.is_blank(Field::Sec));
}

fn draw_date_row<C: Canvas + ?Sized>(canvas: &mut C, frame: &Frame<'_>) {
    let dt = frame.time;
    let cells = [
        (20, "D:", 50, Field::Day),
        (70, "Dt:", 100, Field::Date),
        (120, "Mo:", 150, Field::Month),
        (180, "Yr:", 210, Field::Year),
    ];
    for (label_x, label, value_x, field) in cells {
        canvas.show_str(
            label_x,
            DATE_Y,
            label,
            Rgb565::YELLOW,
            Rgb565::BLACK,
            DIGIT_SIZE,
            TextMode::Opaque,
        );
        draw_two_digits(canvas, value_x, DATE_Y, dt.get(field), frame.is_blank(field));
    }
}

fn draw_banner<C: Canvas + ?Sized>(canvas: &mut C, banner: Banner) {
    let (xs, ys, xe, ye) = BANNER;
    match banner {
        Banner::Hidden => {}
        Banner::Clear => canvas.fill(xs, ys, xe, ye, Rgb565::BLACK),
        Banner::Show { inverted } => {
            let (fg, bg) = if inverted {
                (Rgb565::BLACK, Rgb565::YELLOW)
            } else {
                (Rgb565::YELLOW, Rgb565::BLACK)
            };
            canvas.fill(xs, ys, xe, ye, bg);
            canvas.show_str(70, 190, "ALARM!", fg, bg, DIGIT_SIZE, TextMode::Opaque);
        }
    }
}

fn draw_two_digits<C: Canvas + ?Sized>(canvas: &mut C, x: u16, y: u16, value: u8, blank: bool) {
    if blank {
        canvas.show_str(x, y, "  ", Rgb565::BLACK, Rgb565::BLACK, DIGIT_SIZE, TextMode::Opaque);
    } else {
        canvas.show_int_num(x, y, value as u16, 2, Rgb565::GREEN, Rgb565::BLACK, DIGIT_SIZE);
    }
}

fn draw_colon<C: Canvas + ?Sized>(canvas: &mut C, x: u16) {
    canvas.show_str(x, TIME_Y, ":", Rgb565::GREEN, Rgb565::BLACK, DIGIT_SIZE, TextMode::Opaque);
}
