//! STM32F4-specific HAL for the Kairos firmware
//!
//! Implements the `kairos-hal` traits on top of embassy-stm32:
//!
//! - [`fsmc::FsmcBus`] - 16-bit 8080 TFT bus through the FSMC NOR/SRAM bank 1
//! - [`gpio::Pin`], [`gpio::Button`] - output and input pins
//! - [`i2c`] - bus settings for the DS3231 RTC
//!
//! # Features
//!
//! - `stm32f407vg` / `stm32f407ze` - chip selection
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod fsmc;
pub mod gpio;
pub mod i2c;

pub use fsmc::FsmcBus;
pub use gpio::{Button, Pin};
