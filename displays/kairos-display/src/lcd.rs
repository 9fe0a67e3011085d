//! Controller driver and window protocol

use kairos_core::config::ScanDir;
use kairos_core::traits::Rgb565;
use kairos_hal::LcdBus;

/// Panel size along its short edge
pub const PANEL_SHORT: u16 = 240;
/// Panel size along its long edge
pub const PANEL_LONG: u16 = 320;

/// Controller commands
pub(crate) mod cmd {
    pub const SLEEP_OUT: u16 = 0x11;
    pub const GAMMA_SET: u16 = 0x26;
    pub const DISPLAY_OFF: u16 = 0x28;
    pub const DISPLAY_ON: u16 = 0x29;
    pub const COLUMN_ADDRESS: u16 = 0x2A;
    pub const PAGE_ADDRESS: u16 = 0x2B;
    pub const MEMORY_WRITE: u16 = 0x2C;
    pub const MEMORY_READ: u16 = 0x2E;
    pub const MEMORY_ACCESS_CONTROL: u16 = 0x36;
    pub const PIXEL_FORMAT: u16 = 0x3A;
    pub const READ_ID4: u16 = 0xD3;
}

/// BGR colour order bit of the memory access control register
pub(crate) const MADCTL_BGR: u16 = 0x08;

/// Orientation-dependent facts about the attached panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceInfo {
    /// Width for the current orientation
    pub width: u16,
    /// Height for the current orientation
    pub height: u16,
    /// Controller id read at bring-up, 0 until then
    pub id: u16,
    /// Current scan direction
    pub dir: ScanDir,
}

impl DeviceInfo {
    /// Dimensions for a scan direction
    pub const fn for_dir(dir: ScanDir) -> Self {
        let (width, height) = if dir.swaps_axes() {
            (PANEL_LONG, PANEL_SHORT)
        } else {
            (PANEL_SHORT, PANEL_LONG)
        };
        Self {
            width,
            height,
            id: 0,
            dir,
        }
    }

    /// Whether (x, y) lies on the panel
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }
}

/// Driver for an ILI9341-class controller
pub struct Lcd<B> {
    pub(crate) bus: B,
    pub(crate) info: DeviceInfo,
}

impl<B: LcdBus> Lcd<B> {
    /// Wrap a bus; nothing is sent until [`Lcd::init`] or a draw call
    pub fn new(bus: B, dir: ScanDir) -> Self {
        Self {
            bus,
            info: DeviceInfo::for_dir(dir),
        }
    }

    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    pub fn width(&self) -> u16 {
        self.info.width
    }

    pub fn height(&self) -> u16 {
        self.info.height
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    /// Change orientation and program the memory access control register
    pub fn set_dir(&mut self, dir: ScanDir) {
        let id = self.info.id;
        self.info = DeviceInfo::for_dir(dir);
        self.info.id = id;
        self.bus
            .write_command(cmd::MEMORY_ACCESS_CONTROL, &[MADCTL_BGR | dir.bits() as u16]);
    }

    /// Open the inclusive window `[x1, x2] x [y1, y2]` for a memory write
    ///
    /// Pixel data written afterwards fills the window row by row.
    pub fn address_set(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        self.bus.write_command(
            cmd::COLUMN_ADDRESS,
            &[x1 >> 8, x1 & 0xFF, x2 >> 8, x2 & 0xFF],
        );
        self.bus
            .write_command(cmd::PAGE_ADDRESS, &[y1 >> 8, y1 & 0xFF, y2 >> 8, y2 & 0xFF]);
        self.bus.write_reg(cmd::MEMORY_WRITE);
    }

    /// Move the controller's memory pointer without changing the window end
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.bus.write_command(cmd::COLUMN_ADDRESS, &[x >> 8, x & 0xFF]);
        self.bus.write_command(cmd::PAGE_ADDRESS, &[y >> 8, y & 0xFF]);
    }

    pub fn display_on(&mut self) {
        self.bus.write_reg(cmd::DISPLAY_ON);
    }

    pub fn display_off(&mut self) {
        self.bus.write_reg(cmd::DISPLAY_OFF);
    }

    /// Read back one pixel
    ///
    /// The controller returns 8 bits per channel over two words after a
    /// dummy read; the result is packed back into RGB565.
    pub fn read_point(&mut self, x: u16, y: u16) -> Rgb565 {
        self.set_cursor(x, y);
        self.bus.write_reg(cmd::MEMORY_READ);
        let _dummy = self.bus.read_data();
        let rg = self.bus.read_data();
        let b = self.bus.read_data();
        let g = (rg & 0xFF) << 8;
        Rgb565(((rg >> 11) << 11) | ((g >> 10) << 5) | (b >> 11))
    }

    /// Fill the whole panel
    pub fn clear(&mut self, color: Rgb565) {
        let (w, h) = (self.info.width, self.info.height);
        self.address_set(0, 0, w - 1, h - 1);
        self.bus.write_repeated(color.0, w as u32 * h as u32);
    }

    /// Fill `[xs, xe) x [ys, ye)`, clipped to the panel
    pub fn fill(&mut self, xs: u16, ys: u16, xe: u16, ye: u16, color: Rgb565) {
        let xe = xe.min(self.info.width);
        let ye = ye.min(self.info.height);
        if xs >= xe || ys >= ye {
            return;
        }
        self.address_set(xs, ys, xe - 1, ye - 1);
        self.bus
            .write_repeated(color.0, (xe - xs) as u32 * (ye - ys) as u32);
    }

    /// Set one pixel
    pub fn draw_point(&mut self, x: u16, y: u16, color: Rgb565) {
        self.plot(x as i32, y as i32, color);
    }

    /// Clipped single-pixel write in signed coordinates
    pub(crate) fn plot(&mut self, x: i32, y: i32, color: Rgb565) {
        if !self.info.contains(x, y) {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        self.address_set(x, y, x, y);
        self.bus.write_data(color.0);
    }

    /// Blit a `length` x `width` image of big-endian RGB565 byte pairs
    ///
    /// A short `pic` stops the blit early.
    pub fn show_picture(&mut self, x: u16, y: u16, length: u16, width: u16, pic: &[u8]) {
        if length == 0 || width == 0 {
            return;
        }
        let x2 = x.saturating_add(length - 1);
        let y2 = y.saturating_add(width - 1);
        if x2 >= self.info.width || y2 >= self.info.height {
            return;
        }
        self.address_set(x, y, x2, y2);
        let pixels = length as usize * width as usize;
        for pair in pic.chunks_exact(2).take(pixels) {
            self.bus.write_data(u16::from_be_bytes([pair[0], pair[1]]));
        }
    }
}
