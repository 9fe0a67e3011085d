//! Clock screen surface backed by the controller

use kairos_core::traits::{Canvas, Rgb565, TextMode};
use kairos_hal::LcdBus;

use crate::lcd::Lcd;

impl<B: LcdBus> Canvas for Lcd<B> {
    fn width(&self) -> u16 {
        self.info.width
    }

    fn height(&self) -> u16 {
        self.info.height
    }

    fn clear(&mut self, color: Rgb565) {
        Lcd::clear(self, color)
    }

    fn fill(&mut self, xs: u16, ys: u16, xe: u16, ye: u16, color: Rgb565) {
        Lcd::fill(self, xs, ys, xe, ye, color)
    }

    fn show_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
        size: u8,
        mode: TextMode,
    ) {
        Lcd::show_str(self, x, y, text, fg, bg, size, mode)
    }

    fn show_int_num(&mut self, x: u16, y: u16, num: u16, len: u8, fg: Rgb565, bg: Rgb565, size: u8) {
        Lcd::show_int_num(self, x, y, num, len, fg, bg, size)
    }
}
