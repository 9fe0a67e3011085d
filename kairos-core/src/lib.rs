//! Board-agnostic core logic for the clock/alarm firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Time and alarm value types with bounds-wrapping arithmetic
//! - Mode/field state machine for editing time and the alarm
//! - The tick-driven clock application (hold-repeat, blink, alarm match)
//! - Screen layout drawn through the [`traits::Canvas`] trait
//! - Collaborator traits (RTC, buttons, canvas)
//! - Configuration type definitions and a TOML subset parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod state;
pub mod time;
pub mod traits;
pub mod ui;
