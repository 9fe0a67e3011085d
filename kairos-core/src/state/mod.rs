//! Editing-mode state machine
//!
//! The mode and field cursor are a pure function of the previous mode
//! and a button event. Side effects on the time buffers are returned as
//! an [`Action`] for the application to carry out.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{Action, Mode};
