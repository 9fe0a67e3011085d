//! Time and alarm data model
//!
//! Plain value types. Every editable value is kept inside its bounds by
//! [`wrap_inc`], so out-of-range fields cannot be produced by editing.

pub mod alarm;
pub mod datetime;
pub mod field;

pub use alarm::Alarm;
pub use datetime::DateTime;
pub use field::{wrap_inc, Field};
