//! Display controller bus abstraction
//!
//! TFT controllers of the ILI9341 family expose a command/data pair: a
//! register (command) write selects what the following data words mean.
//! On the reference board the pair is memory mapped through the FSMC, but
//! an 8080-style GPIO bus or an SPI bridge fit the same trait.

/// Command/data bus to a display controller
///
/// All operations are infallible. The bus is a local, always-present
/// peripheral; a fault here is a hardware problem outside of what the
/// firmware can recover from.
pub trait LcdBus {
    /// Write a command (register index)
    fn write_reg(&mut self, reg: u16);

    /// Write one data word
    fn write_data(&mut self, data: u16);

    /// Read one data word
    fn read_data(&mut self) -> u16;

    /// Write a command followed by its parameter words
    fn write_command(&mut self, reg: u16, params: &[u16]) {
        self.write_reg(reg);
        for &p in params {
            self.write_data(p);
        }
    }

    /// Stream the same data word `count` times
    fn write_repeated(&mut self, data: u16, count: u32) {
        for _ in 0..count {
            self.write_data(data);
        }
    }
}

impl<T: LcdBus + ?Sized> LcdBus for &mut T {
    fn write_reg(&mut self, reg: u16) {
        (**self).write_reg(reg)
    }

    fn write_data(&mut self, data: u16) {
        (**self).write_data(data)
    }

    fn read_data(&mut self) -> u16 {
        (**self).read_data()
    }
}
