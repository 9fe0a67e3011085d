//! Rendering engine for ILI9341-class RGB565 TFT controllers
//!
//! This crate provides:
//! - [`Lcd`], a driver over any [`kairos_hal::LcdBus`] with the windowed
//!   write protocol, points, lines, rectangles and circles
//! - Bitmap text in 16, 24 and 32 pixel glyph heights, integer and
//!   fixed-point numerals
//! - The controller bring-up program
//! - An implementation of the clock screen's `Canvas` trait
//!
//! # Architecture
//!
//! Every drawing call is stateless apart from the [`DeviceInfo`]
//! (orientation, reported size, controller id). Pixels outside the
//! reported size are clipped, never sent to the controller.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod canvas;
pub mod font;
mod geometry;
pub mod ili9341;
pub mod lcd;
mod text;

#[cfg(test)]
mod testing;

pub use kairos_core::config::ScanDir;
pub use kairos_core::traits::{Rgb565, TextMode};
pub use ili9341::Panel;
pub use lcd::{DeviceInfo, Lcd};
