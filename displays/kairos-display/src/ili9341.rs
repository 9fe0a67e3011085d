//! ILI9341 power-up program
//!
//! One-shot reset, id read and register program. Waits are blocking and
//! scoped to this routine.

use embedded_hal::delay::DelayNs;
use kairos_hal::{LcdBus, OutputPin};

use crate::lcd::{cmd, Lcd, MADCTL_BGR};

/// Reset pulse low and recovery times
const RESET_MS: u32 = 500;
/// Required wait after sleep-out before further commands
const SLEEP_OUT_MS: u32 = 120;

/// Vendor power, timing and gamma registers, applied in order
#[rustfmt::skip]
const VENDOR_PROGRAM: &[(u16, &[u16])] = &[
    (0xCF, &[0x00, 0xC1, 0x30]),             // power control B
    (0xED, &[0x64, 0x03, 0x12, 0x81]),       // power-on sequence
    (0xE8, &[0x85, 0x10, 0x7A]),             // driver timing A
    (0xCB, &[0x39, 0x2C, 0x00, 0x34, 0x02]), // power control A
    (0xF7, &[0x20]),                         // pump ratio
    (0xEA, &[0x00, 0x00]),                   // driver timing B
    (0xC0, &[0x1B]),                         // power control 1, VRH
    (0xC1, &[0x01]),                         // power control 2
    (0xC5, &[0x30, 0x30]),                   // VCOM 1
    (0xC7, &[0xB7]),                         // VCOM 2
];

/// Panel format and gamma, applied after the scan direction
#[rustfmt::skip]
const PANEL_PROGRAM: &[(u16, &[u16])] = &[
    (cmd::PIXEL_FORMAT, &[0x55]),            // 16 bpp
    (0xB1, &[0x00, 0x1A]),                   // frame rate
    (0xB6, &[0x0A, 0xA2]),                   // display function
    (0xF2, &[0x00]),                         // 3-gamma off
    (cmd::GAMMA_SET, &[0x01]),
    (0xE0, &[0x0F, 0x2A, 0x28, 0x08, 0x0E, 0x08, 0x54, 0xA9,
             0x43, 0x0A, 0x0F, 0x00, 0x00, 0x00, 0x00]),
    (0xE1, &[0x00, 0x15, 0x17, 0x07, 0x11, 0x06, 0x2B, 0x56,
             0x3C, 0x05, 0x10, 0x0F, 0x3F, 0x3F, 0x0F]),
];

impl<B: LcdBus> Lcd<B> {
    /// Reset and program the controller, then turn on the backlight
    ///
    /// Returns the controller id, also kept in [`Lcd::info`].
    pub fn init<RST, BL, D>(&mut self, reset: &mut RST, backlight: &mut BL, delay: &mut D) -> u16
    where
        RST: OutputPin,
        BL: OutputPin,
        D: DelayNs,
    {
        reset.set_low();
        delay.delay_ms(RESET_MS);
        reset.set_high();
        delay.delay_ms(RESET_MS);

        let id = self.read_id();
        self.info.id = id;
        #[cfg(feature = "defmt")]
        defmt::debug!("LCD controller id {=u16:#x}", id);

        for &(reg, params) in VENDOR_PROGRAM {
            self.bus.write_command(reg, params);
        }
        self.bus.write_command(
            cmd::MEMORY_ACCESS_CONTROL,
            &[MADCTL_BGR | self.info.dir.bits() as u16],
        );
        for &(reg, params) in PANEL_PROGRAM {
            self.bus.write_command(reg, params);
        }

        // Full-panel window
        let (w, h) = (self.info.width - 1, self.info.height - 1);
        self.bus
            .write_command(cmd::PAGE_ADDRESS, &[0x00, 0x00, h >> 8, h & 0xFF]);
        self.bus
            .write_command(cmd::COLUMN_ADDRESS, &[0x00, 0x00, w >> 8, w & 0xFF]);

        self.bus.write_reg(cmd::SLEEP_OUT);
        delay.delay_ms(SLEEP_OUT_MS);
        self.display_on();

        backlight.set_high();
        id
    }

    /// Read the 16-bit controller id (register 0xD3)
    ///
    /// The first two reads are dummy and version bytes.
    fn read_id(&mut self) -> u16 {
        self.bus.write_reg(cmd::READ_ID4);
        let _dummy = self.bus.read_data();
        let _version = self.bus.read_data();
        let hi = self.bus.read_data() & 0xFF;
        let lo = self.bus.read_data() & 0xFF;
        (hi << 8) | lo
    }
}

/// A panel together with its reset and backlight lines
///
/// Owns the control pins for as long as the panel is in use, so they
/// keep the level bring-up left them at.
pub struct Panel<B, RST, BL> {
    lcd: Lcd<B>,
    reset: RST,
    backlight: BL,
}

impl<B: LcdBus, RST: OutputPin, BL: OutputPin> Panel<B, RST, BL> {
    pub fn new(lcd: Lcd<B>, reset: RST, backlight: BL) -> Self {
        Self {
            lcd,
            reset,
            backlight,
        }
    }

    /// Run [`Lcd::init`] with the owned control lines
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> u16 {
        self.lcd.init(&mut self.reset, &mut self.backlight, delay)
    }

    pub fn lcd(&self) -> &Lcd<B> {
        &self.lcd
    }

    pub fn lcd_mut(&mut self) -> &mut Lcd<B> {
        &mut self.lcd
    }

    pub fn set_backlight(&mut self, on: bool) {
        self.backlight.set_state(on);
    }

    pub fn release(self) -> (Lcd<B>, RST, BL) {
        (self.lcd, self.reset, self.backlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FrameBus;
    use kairos_core::config::ScanDir;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    /// Shared timeline of pin changes and delays
    type Timeline = Rc<RefCell<Vec<&'static str>>>;

    struct Pin {
        name: &'static str,
        log: Timeline,
        high: bool,
    }

    impl OutputPin for Pin {
        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push(if self.name == "rst" { "rst high" } else { "bl high" });
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push(if self.name == "rst" { "rst low" } else { "bl low" });
        }
    }

    struct Delay {
        log: Timeline,
        total_ms: u32,
    }

    impl DelayNs for Delay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns / 1_000_000;
            self.log.borrow_mut().push("wait");
        }

        fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
            self.log.borrow_mut().push("wait");
        }
    }

    #[test]
    fn test_init_sequence() {
        let log: Timeline = Rc::new(RefCell::new(Vec::new()));
        let mut rst = Pin {
            name: "rst",
            log: log.clone(),
            high: true,
        };
        let mut bl = Pin {
            name: "bl",
            log: log.clone(),
            high: false,
        };
        let mut delay = Delay {
            log: log.clone(),
            total_ms: 0,
        };

        let mut lcd = Lcd::new(FrameBus::new(), ScanDir::L2rU2d);
        let id = lcd.init(&mut rst, &mut bl, &mut delay);

        assert_eq!(id, 0x9341);
        assert_eq!(lcd.info().id, 0x9341);
        assert!(rst.high && bl.high);
        assert_eq!(delay.total_ms, 2 * RESET_MS + SLEEP_OUT_MS);
        assert_eq!(
            *log.borrow(),
            ["rst low", "wait", "rst high", "wait", "wait", "bl high"]
        );

        let bus = lcd.release();
        let commands = bus.commands();
        assert_eq!(commands.first(), Some(&0xD3));
        assert_eq!(&commands[commands.len() - 2..], &[0x11, 0x29]);
        assert_eq!(bus.last_params(0x36), Some(&[0x08][..]));
        assert_eq!(bus.last_params(0x3A), Some(&[0x55][..]));
        assert_eq!(bus.last_params(0x2A), Some(&[0x00, 0x00, 0x00, 0xEF][..]));
        assert_eq!(bus.last_params(0x2B), Some(&[0x00, 0x00, 0x01, 0x3F][..]));
    }

    #[test]
    fn test_init_landscape_window() {
        let log: Timeline = Rc::new(RefCell::new(Vec::new()));
        let mut rst = Pin {
            name: "rst",
            log: log.clone(),
            high: true,
        };
        let mut bl = Pin {
            name: "bl",
            log: log.clone(),
            high: false,
        };
        let mut delay = Delay { log, total_ms: 0 };

        let mut lcd = Lcd::new(FrameBus::new(), ScanDir::U2dR2l);
        lcd.init(&mut rst, &mut bl, &mut delay);
        let bus = lcd.release();
        assert_eq!(bus.last_params(0x36), Some(&[0x68][..]));
        assert_eq!(bus.last_params(0x2A), Some(&[0x00, 0x00, 0x01, 0x3F][..]));
    }

    /// Pin that records its level and when it is dropped
    struct OwnedPin {
        high: Rc<RefCell<bool>>,
        dropped: Rc<RefCell<bool>>,
    }

    impl OutputPin for OwnedPin {
        fn set_high(&mut self) {
            *self.high.borrow_mut() = true;
        }

        fn set_low(&mut self) {
            *self.high.borrow_mut() = false;
        }
    }

    impl Drop for OwnedPin {
        fn drop(&mut self) {
            *self.dropped.borrow_mut() = true;
        }
    }

    #[test]
    fn test_panel_keeps_control_lines_after_init() {
        let bl_high = Rc::new(RefCell::new(false));
        let bl_dropped = Rc::new(RefCell::new(false));
        let rst_high = Rc::new(RefCell::new(true));
        let rst_dropped = Rc::new(RefCell::new(false));
        let log: Timeline = Rc::new(RefCell::new(Vec::new()));
        let mut delay = Delay { log, total_ms: 0 };

        let mut panel = Panel::new(
            Lcd::new(FrameBus::new(), ScanDir::L2rU2d),
            OwnedPin {
                high: rst_high.clone(),
                dropped: rst_dropped.clone(),
            },
            OwnedPin {
                high: bl_high.clone(),
                dropped: bl_dropped.clone(),
            },
        );
        assert_eq!(panel.init(&mut delay), 0x9341);
        assert_eq!(panel.lcd().info().id, 0x9341);

        // Drawing after bring-up leaves both lines held
        panel.lcd_mut().clear(kairos_core::traits::Rgb565::BLACK);
        assert!(*bl_high.borrow() && *rst_high.borrow());
        assert!(!*bl_dropped.borrow() && !*rst_dropped.borrow());

        panel.set_backlight(false);
        assert!(!*bl_high.borrow());

        drop(panel);
        assert!(*bl_dropped.borrow() && *rst_dropped.borrow());
    }
}
