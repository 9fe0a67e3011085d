//! Drawing surface trait
//!
//! The subset of the rendering engine the clock screen needs. The
//! display crate implements it for its controller driver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 16-bit RGB565 colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const WHITE: Self = Self(0xFFFF);
    pub const BLACK: Self = Self(0x0000);
    pub const BLUE: Self = Self(0x001F);
    pub const BRED: Self = Self(0xF81F);
    pub const GRED: Self = Self(0xFFE0);
    pub const GBLUE: Self = Self(0x07FF);
    pub const RED: Self = Self(0xF800);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const GREEN: Self = Self(0x07E0);
    pub const CYAN: Self = Self(0x7FFF);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const BROWN: Self = Self(0xBC40);
    pub const BRRED: Self = Self(0xFC07);
    pub const GRAY: Self = Self(0x8430);
    pub const DARKBLUE: Self = Self(0x01CF);
    pub const LIGHTBLUE: Self = Self(0x7D7C);
    pub const GRAYBLUE: Self = Self(0x5458);
    pub const LIGHTGREEN: Self = Self(0x841F);
    pub const LIGHTGRAY: Self = Self(0xEF5B);
    pub const LGRAY: Self = Self(0xC618);
    pub const LGRAYBLUE: Self = Self(0xA651);
    pub const LBBLUE: Self = Self(0x2B12);

    /// Build from 8-bit channels, dropping the low bits
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

/// How glyph background pixels are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextMode {
    /// Background pixels are painted with the background colour
    #[default]
    Opaque,
    /// Only foreground pixels are drawn
    Transparent,
}

/// Pixel surface with text support
pub trait Canvas {
    /// Width in pixels for the current orientation
    fn width(&self) -> u16;

    /// Height in pixels for the current orientation
    fn height(&self) -> u16;

    /// Fill the whole surface
    fn clear(&mut self, color: Rgb565);

    /// Fill `[xs, xe) x [ys, ye)`
    fn fill(&mut self, xs: u16, ys: u16, xe: u16, ye: u16, color: Rgb565);

    /// Draw ASCII text with glyphs `size` pixels tall
    #[allow(clippy::too_many_arguments)]
    fn show_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb565,
        bg: Rgb565,
        size: u8,
        mode: TextMode,
    );

    /// Draw `num` right-aligned in `len` digits, leading zeros blanked
    #[allow(clippy::too_many_arguments)]
    fn show_int_num(&mut self, x: u16, y: u16, num: u16, len: u8, fg: Rgb565, bg: Rgb565, size: u8);
}
