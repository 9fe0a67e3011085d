//! FSMC-attached TFT bus
//!
//! The panel sits on NOR/SRAM bank 1 (NE1) as a 16-bit 8080 device with
//! its RS line on A18. A write below the A18 boundary is a register
//! select, one halfword above it is data.
//!
//! embassy-stm32 only drives SDRAM through its FMC wrapper, so the SRAM
//! bank and the pin routing are programmed through the typed PAC.

use core::ptr;

use embassy_stm32::fmc::Fmc;
use embassy_stm32::pac;
use embassy_stm32::pac::fmc::vals::{Mtyp, Mwid};
use embassy_stm32::pac::gpio::vals::{Moder, Ospeedr};
use embassy_stm32::pac::gpio::Gpio;
use embassy_stm32::peripherals::FSMC;
use embassy_stm32::Peri;
use kairos_hal::LcdBus;

/// Register-select address (A18 low)
const LCD_REG: usize = 0x6000_0000 | 0x0007_FFFE;
/// Data address (A18 high)
const LCD_RAM: usize = LCD_REG + 2;

/// FSMC alternate function number
const AF_FSMC: u8 = 12;

/// D0-D3, D13-D15, NOE, NWE, NE1, A18
const PORT_D_PINS: &[usize] = &[0, 1, 4, 5, 7, 8, 9, 10, 13, 14, 15];
/// D4-D12
const PORT_E_PINS: &[usize] = &[7, 8, 9, 10, 11, 12, 13, 14, 15];

/// Bus timing in HCLK cycles
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FsmcTiming {
    /// Address setup (ADDSET, 0-15)
    pub address_setup: u8,
    /// Data phase (DATAST, 1-255)
    pub data_setup: u8,
    /// Bus turnaround (BUSTURN, 0-15)
    pub turnaround: u8,
}

impl Default for FsmcTiming {
    /// Safe for the ILI9341 read cycle up to 168 MHz HCLK
    fn default() -> Self {
        Self {
            address_setup: 2,
            data_setup: 10,
            turnaround: 1,
        }
    }
}

/// Memory-mapped 16-bit LCD bus
pub struct FsmcBus<'d> {
    _fmc: Fmc<'d, FSMC>,
}

impl<'d> FsmcBus<'d> {
    /// Route the pins to the FSMC and enable bank 1
    ///
    /// The port D/E pins listed above must not be used for anything else.
    pub fn new(fsmc: Peri<'d, FSMC>, timing: FsmcTiming) -> Self {
        let mut fmc = Fmc::new_raw(fsmc);
        fmc.enable();

        for &pin in PORT_D_PINS {
            route_to_fsmc(pac::GPIOD, pin);
        }
        for &pin in PORT_E_PINS {
            route_to_fsmc(pac::GPIOE, pin);
        }

        pac::FSMC.btr1().modify(|w| {
            w.set_addset(timing.address_setup & 0x0F);
            w.set_datast(timing.data_setup.max(1));
            w.set_busturn(timing.turnaround & 0x0F);
        });
        pac::FSMC.bcr1().modify(|w| {
            w.set_muxen(false);
            w.set_mtyp(Mtyp::SRAM);
            w.set_mwid(Mwid::BITS16);
            w.set_wren(true);
            w.set_mbken(true);
        });

        #[cfg(feature = "defmt")]
        defmt::debug!("FSMC bank 1 enabled: {}", timing);

        Self { _fmc: fmc }
    }
}

impl LcdBus for FsmcBus<'_> {
    fn write_reg(&mut self, reg: u16) {
        // SAFETY: LCD_REG lies in the bank enabled by `new`.
        unsafe { ptr::write_volatile(LCD_REG as *mut u16, reg) }
    }

    fn write_data(&mut self, data: u16) {
        // SAFETY: LCD_RAM lies in the bank enabled by `new`.
        unsafe { ptr::write_volatile(LCD_RAM as *mut u16, data) }
    }

    fn read_data(&mut self) -> u16 {
        // SAFETY: LCD_RAM lies in the bank enabled by `new`.
        unsafe { ptr::read_volatile(LCD_RAM as *const u16) }
    }
}

/// Alternate function 12, very high speed
fn route_to_fsmc(port: Gpio, pin: usize) {
    port.afr(pin / 8).modify(|w| w.set_afr(pin % 8, AF_FSMC));
    port.ospeedr()
        .modify(|w| w.set_ospeedr(pin, Ospeedr::VERY_HIGH_SPEED));
    port.moder().modify(|w| w.set_moder(pin, Moder::ALTERNATE));
}
