//! Embassy async tasks
//!
//! The clock is a single cooperative task: it owns the panel, the RTC and
//! the button scanner, so nothing is shared.

pub mod clock;

pub use clock::clock_task;
