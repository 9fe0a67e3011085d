//! Glyph, numeral and string rendering

use kairos_core::traits::{Rgb565, TextMode};
use kairos_hal::LcdBus;

use crate::font;
use crate::lcd::Lcd;

const CARRIAGE_RETURN: u8 = 0x0D;

/// Decimal digit of `num` at `place` (0 = units)
fn digit_at(num: u32, place: u8) -> u8 {
    match 10u32.checked_pow(place as u32) {
        Some(p) => (num / p % 10) as u8,
        None => 0,
    }
}

impl<B: LcdBus> Lcd<B> {
    /// Draw one character cell of `size / 2` x `size` pixels
    ///
    /// Characters without a glyph and unsupported sizes draw nothing.
    /// Opaque cells must fit on the panel entirely; transparent cells are
    /// clipped per pixel.
    #[allow(clippy::too_many_arguments)]
    pub fn show_char(
        &mut self,
        x: u16,
        y: u16,
        ch: u8,
        fg: Rgb565,
        bg: Rgb565,
        size: u8,
        mode: TextMode,
    ) {
        let Some(bitmap) = font::glyph(ch, size) else {
            return;
        };
        let width = size as u16 / 2;
        let row_bytes = font::row_bytes(size);
        let is_set = |row: &[u8], col: u16| row[col as usize / 8] >> (col % 8) & 1 != 0;

        match mode {
            TextMode::Opaque => {
                if x as u32 + width as u32 > self.info.width as u32
                    || y as u32 + size as u32 > self.info.height as u32
                {
                    return;
                }
                self.address_set(x, y, x + width - 1, y + size as u16 - 1);
                for row in bitmap.chunks_exact(row_bytes) {
                    for col in 0..width {
                        let color = if is_set(row, col) { fg } else { bg };
                        self.bus.write_data(color.0);
                    }
                }
            }
            TextMode::Transparent => {
                for (dy, row) in bitmap.chunks_exact(row_bytes).enumerate() {
                    for col in 0..width {
                        if is_set(row, col) {
                            self.plot(x as i32 + col as i32, y as i32 + dy as i32, fg);
                        }
                    }
                }
            }
        }
    }

    /// Draw `num` right-aligned in `len` cells
    ///
    /// Zeros before the first significant digit are drawn as blank cells;
    /// the last cell always shows a digit.
    #[allow(clippy::too_many_arguments)]
    pub fn show_int_num(
        &mut self,
        x: u16,
        y: u16,
        num: u16,
        len: u8,
        fg: Rgb565,
        bg: Rgb565,
        size: u8,
    ) {
        let width = size as u16 / 2;
        let mut leading = true;
        for t in 0..len {
            let digit = digit_at(num as u32, len - t - 1);
            let cx = x.saturating_add(t as u16 * width);
            if leading && digit == 0 && t + 1 < len {
                self.show_char(cx, y, b' ', fg, bg, size, TextMode::Opaque);
                continue;
            }
            leading = false;
            self.show_char(cx, y, b'0' + digit, fg, bg, size, TextMode::Opaque);
        }
    }

    /// Draw `num` with two decimals as `len` digits plus a point
    ///
    /// Digits past the second decimal are truncated, not rounded. The
    /// point takes the cell `len - 2`, so the output is `len + 1` cells
    /// wide. With `len < 2` no point is drawn.
    #[allow(clippy::too_many_arguments)]
    pub fn show_float_num(
        &mut self,
        x: u16,
        y: u16,
        num: f32,
        len: u8,
        fg: Rgb565,
        bg: Rgb565,
        size: u8,
    ) {
        let width = size as u16 / 2;
        let scaled = (num * 100.0) as u16;
        let point = len.checked_sub(2);
        for t in 0..len {
            let digit = digit_at(scaled as u32, len - t - 1);
            let mut cell = t;
            if let Some(p) = point {
                if t == p {
                    let px = x.saturating_add(p as u16 * width);
                    self.show_char(px, y, b'.', fg, bg, size, TextMode::Opaque);
                }
                if t >= p {
                    cell += 1;
                }
            }
            let cx = x.saturating_add(cell as u16 * width);
            self.show_char(cx, y, b'0' + digit, fg, bg, size, TextMode::Opaque);
        }
    }

    /// Draw ASCII text
    ///
    /// `\r` returns to the starting column one row down. Bytes without a
    /// glyph (including UTF-8 sequences) are skipped without moving the
    /// cursor. Drawing stops at the first character that would not fit.
    #[allow(clippy::too_many_arguments)]
    pub fn show_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
        size: u8,
        mode: TextMode,
    ) {
        let advance = size as u16 / 2;
        let max_x = self.info.width.saturating_sub(advance);
        let max_y = self.info.height.saturating_sub(size as u16);
        let (x0, mut x, mut y) = (x, x, y);

        for byte in text.bytes() {
            if x > max_x || y > max_y {
                return;
            }
            match byte {
                CARRIAGE_RETURN => {
                    y = y.saturating_add(size as u16);
                    x = x0;
                }
                font::FIRST..=font::LAST => {
                    self.show_char(x, y, byte, fg, bg, size, mode);
                    x = x.saturating_add(advance);
                }
                _ => {}
            }
        }
    }

    /// Draw text centred horizontally, offset by `x`
    #[allow(clippy::too_many_arguments)]
    pub fn str_center(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
        size: u8,
        mode: TextMode,
    ) {
        let cells = text
            .bytes()
            .filter(|b| (font::FIRST..=font::LAST).contains(b))
            .count() as u16;
        let text_width = cells.saturating_mul(size as u16 / 2);
        let offset = self.info.width.saturating_sub(text_width) / 2;
        self.show_str(x.saturating_add(offset), y, text, fg, bg, size, mode);
    }
}
