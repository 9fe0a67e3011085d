//! Collaborator traits
//!
//! The clock logic talks to the RTC, the button scanner and the screen
//! only through these traits, so it runs unchanged on the board and in
//! host tests.

pub mod buttons;
pub mod canvas;
pub mod rtc;

pub use buttons::{Button, ButtonInputs};
pub use canvas::{Canvas, Rgb565, TextMode};
pub use rtc::{RtcDriver, COMMIT_ORDER};
