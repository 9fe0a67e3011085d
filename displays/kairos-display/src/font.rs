//! Bitmap fonts
//!
//! Glyphs cover printable ASCII (0x20-0x7E). Each size has its own table;
//! a glyph is `size` rows of `ceil(size / 2 / 8)` bytes, least significant
//! bit leftmost.
//!
//! The tables are scaled at compile time from a 5x8 column font (bit 0 at
//! the top, a blank sixth column for spacing).

/// First character with a glyph
pub const FIRST: u8 = b' ';
/// Last character with a glyph
pub const LAST: u8 = b'~';
/// Number of glyphs per table
pub const GLYPH_COUNT: usize = (LAST - FIRST + 1) as usize;

#[rustfmt::skip]
const BASE_5X8: [[u8; 5]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x56, 0x20, 0x50], // &
    [0x00, 0x08, 0x07, 0x03, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x2A, 0x1C, 0x7F, 0x1C, 0x2A], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x80, 0x70, 0x30, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x00, 0x60, 0x60, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x72, 0x49, 0x49, 0x49, 0x46], // 2
    [0x21, 0x41, 0x49, 0x4D, 0x33], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x31], // 6
    [0x41, 0x21, 0x11, 0x09, 0x07], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x46, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x00, 0x14, 0x00, 0x00], // :
    [0x00, 0x40, 0x34, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x59, 0x09, 0x06], // ?
    [0x3E, 0x41, 0x5D, 0x59, 0x4E], // @
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x41, 0x3E], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x73], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x1C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x26, 0x49, 0x49, 0x49, 0x32], // S
    [0x03, 0x01, 0x7F, 0x01, 0x03], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x59, 0x49, 0x4D, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x41], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x41, 0x7F], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x03, 0x07, 0x08, 0x00], // `
    [0x20, 0x54, 0x54, 0x78, 0x40], // a
    [0x7F, 0x28, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x28], // c
    [0x38, 0x44, 0x44, 0x28, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x00, 0x08, 0x7E, 0x09, 0x02], // f
    [0x18, 0xA4, 0xA4, 0x9C, 0x78], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x40, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x78, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0xFC, 0x18, 0x24, 0x24, 0x18], // p
    [0x18, 0x24, 0x24, 0x18, 0xFC], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x24], // s
    [0x04, 0x04, 0x3F, 0x44, 0x24], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x4C, 0x90, 0x90, 0x90, 0x7C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x77, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x02, 0x01, 0x02, 0x04, 0x02], // ~
];

/// Nearest-neighbour scale of the base font into a row-major table
const fn scale<const N: usize>(width: usize, height: usize) -> [[u8; N]; GLYPH_COUNT] {
    let row_bytes = (width + 7) / 8;
    let mut out = [[0u8; N]; GLYPH_COUNT];
    let mut g = 0;
    while g < GLYPH_COUNT {
        let mut row = 0;
        while row < height {
            let src_row = row * 8 / height;
            let mut col = 0;
            while col < width {
                let src_col = col * 6 / width;
                if src_col < 5 && (BASE_5X8[g][src_col] >> src_row) & 1 != 0 {
                    out[g][row * row_bytes + col / 8] |= 1 << (col % 8);
                }
                col += 1;
            }
            row += 1;
        }
        g += 1;
    }
    out
}

/// 8x16 glyphs
pub static ASCII_1608: [[u8; 16]; GLYPH_COUNT] = scale::<16>(8, 16);
/// 12x24 glyphs
pub static ASCII_2412: [[u8; 48]; GLYPH_COUNT] = scale::<48>(12, 24);
/// 16x32 glyphs
pub static ASCII_3216: [[u8; 64]; GLYPH_COUNT] = scale::<64>(16, 32);

/// Bitmap for `ch` at glyph height `size`
///
/// `None` for characters without a glyph and for sizes other than 16, 24
/// and 32.
pub fn glyph(ch: u8, size: u8) -> Option<&'static [u8]> {
    if !(FIRST..=LAST).contains(&ch) {
        return None;
    }
    let index = (ch - FIRST) as usize;
    match size {
        16 => Some(&ASCII_1608[index]),
        24 => Some(&ASCII_2412[index]),
        32 => Some(&ASCII_3216[index]),
        _ => None,
    }
}

/// Whether a glyph table exists for `size`
pub fn is_supported(size: u8) -> bool {
    matches!(size, 16 | 24 | 32)
}

/// Bytes per glyph row at height `size`
pub const fn row_bytes(size: u8) -> usize {
    (size as usize / 2 + 7) / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bit(glyph: &[u8], size: u8, x: usize, y: usize) -> bool {
        glyph[y * row_bytes(size) + x / 8] >> (x % 8) & 1 != 0
    }

    #[test]
    fn test_table_sizes() {
        for size in [16u8, 24, 32] {
            let g = glyph(b'A', size).unwrap();
            assert_eq!(g.len(), row_bytes(size) * size as usize);
        }
    }

    #[test]
    fn test_space_is_blank() {
        for size in [16u8, 24, 32] {
            assert!(glyph(b' ', size).unwrap().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_unsupported_lookups() {
        assert!(glyph(b'A', 12).is_none());
        assert!(glyph(0x7F, 16).is_none());
        assert!(glyph(0x0D, 16).is_none());
        assert!(glyph(0xC3, 24).is_none());
        assert!(!is_supported(12));
    }

    #[test]
    fn test_colon_scaled_three_times() {
        // ':' is column 2 with rows 2 and 4 set
        let g = glyph(b':', 24).unwrap();
        for y in 6..9 {
            assert!(bit(g, 24, 4, y) && bit(g, 24, 5, y));
            assert!(!bit(g, 24, 3, y) && !bit(g, 24, 6, y));
        }
        for y in 12..15 {
            assert!(bit(g, 24, 4, y));
        }
        assert!(!bit(g, 24, 4, 5));
        assert!(!bit(g, 24, 4, 9));
        assert!(!bit(g, 24, 4, 15));
    }

    #[test]
    fn test_spacing_column_blank() {
        for size in [16u8, 24, 32] {
            let width = size as usize / 2;
            for ch in FIRST..=LAST {
                let g = glyph(ch, size).unwrap();
                for y in 0..size as usize {
                    assert!(!bit(g, size, width - 1, y));
                }
            }
        }
    }
}
