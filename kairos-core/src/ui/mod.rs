//! Clock screen layout

pub mod layout;

pub use layout::{draw_frame, Frame};
