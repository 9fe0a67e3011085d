//! Hardware driver implementations
//!
//! Concrete implementations of the collaborator traits defined in
//! kairos-core:
//!
//! - DS3231 real-time clock over I2C
//! - Debounced GPIO button scanner

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod input;
pub mod rtc;
