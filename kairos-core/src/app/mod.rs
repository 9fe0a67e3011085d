//! Tick-driven clock application
//!
//! [`ClockApp`] owns all application state. The host calls
//! [`ClockApp::on_tick`] once per tick period; nothing else mutates it.

pub mod alarm;
pub mod blink;
pub mod clock;
pub mod hold;

pub use alarm::{AlarmMonitor, Banner};
pub use blink::Blink;
pub use clock::ClockApp;
pub use hold::HoldRepeat;
