//! Front-panel input drivers

pub mod buttons;

pub use buttons::{ButtonScanner, MAX_BUTTONS};
