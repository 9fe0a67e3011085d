//! Host-side controller emulation for tests

use std::vec;
use std::vec::Vec;

use kairos_hal::LcdBus;

const STRIDE: usize = 320;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Params,
    Write,
    Read(u8),
    Id(u8),
}

/// Emulates the window/memory-write protocol into a 320x320 framebuffer
pub struct FrameBus {
    fb: Vec<u16>,
    log: Vec<(u16, Vec<u16>)>,
    phase: Phase,
    col: (u16, u16),
    page: (u16, u16),
    cursor: (u16, u16),
    /// Pixel words written through memory writes
    pub pixel_writes: usize,
    /// Value returned as the controller id
    pub id: u16,
}

impl FrameBus {
    pub fn new() -> Self {
        Self {
            fb: vec![0; STRIDE * STRIDE],
            log: Vec::new(),
            phase: Phase::Params,
            col: (0, 0),
            page: (0, 0),
            cursor: (0, 0),
            pixel_writes: 0,
            id: 0x9341,
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> u16 {
        self.fb[y as usize * STRIDE + x as usize]
    }

    pub fn set_pixel(&mut self, x: u16, y: u16, color: u16) {
        self.fb[y as usize * STRIDE + x as usize] = color;
    }

    /// Number of framebuffer pixels holding `color`
    pub fn count(&self, color: u16) -> usize {
        self.fb.iter().filter(|&&p| p == color).count()
    }

    /// Coordinates of every pixel holding `color`, row-major
    pub fn points(&self, color: u16) -> Vec<(u16, u16)> {
        self.fb
            .iter()
            .enumerate()
            .filter(|(_, &p)| p == color)
            .map(|(i, _)| ((i % STRIDE) as u16, (i / STRIDE) as u16))
            .collect()
    }

    /// Every command written, pixel writes excluded
    pub fn commands(&self) -> Vec<u16> {
        self.log
            .iter()
            .map(|(reg, _)| *reg)
            .filter(|&reg| !matches!(reg, 0x2A | 0x2B | 0x2C))
            .collect()
    }

    /// Parameters of the most recent `reg` command
    pub fn last_params(&self, reg: u16) -> Option<&[u16]> {
        self.log
            .iter()
            .rev()
            .find(|(r, _)| *r == reg)
            .map(|(_, p)| p.as_slice())
    }

    fn write_pixel(&mut self, color: u16) {
        let (x, y) = self.cursor;
        if (x as usize) < STRIDE && (y as usize) < STRIDE {
            self.fb[y as usize * STRIDE + x as usize] = color;
        }
        self.pixel_writes += 1;
        if x >= self.col.1 {
            self.cursor = (self.col.0, y + 1);
        } else {
            self.cursor = (x + 1, y);
        }
    }
}

impl LcdBus for FrameBus {
    fn write_reg(&mut self, reg: u16) {
        self.log.push((reg, Vec::new()));
        self.phase = match reg {
            0x2C => {
                self.cursor = (self.col.0, self.page.0);
                Phase::Write
            }
            0x2E => Phase::Read(0),
            0xD3 => Phase::Id(0),
            _ => Phase::Params,
        };
    }

    fn write_data(&mut self, data: u16) {
        if self.phase == Phase::Write {
            self.write_pixel(data);
            return;
        }
        let Some((reg, params)) = self.log.last_mut() else {
            return;
        };
        params.push(data);
        let word = |hi: u16, lo: u16| (hi << 8) | lo;
        let target = match *reg {
            0x2A => &mut self.col,
            0x2B => &mut self.page,
            _ => return,
        };
        match params.len() {
            2 => target.0 = word(params[0], params[1]),
            4 => target.1 = word(params[2], params[3]),
            _ => {}
        }
    }

    fn read_data(&mut self) -> u16 {
        match self.phase {
            Phase::Read(stage) => {
                self.phase = Phase::Read(stage + 1);
                let p = self.pixel(self.col.0, self.page.0);
                let r8 = (p >> 11) << 3;
                let g8 = ((p >> 5) & 0x3F) << 2;
                let b8 = (p & 0x1F) << 3;
                match stage {
                    0 => 0,
                    1 => (r8 << 8) | g8,
                    _ => b8 << 8,
                }
            }
            Phase::Id(stage) => {
                self.phase = Phase::Id(stage + 1);
                match stage {
                    2 => self.id >> 8,
                    3 => self.id & 0xFF,
                    _ => 0,
                }
            }
            _ => 0,
        }
    }
}
