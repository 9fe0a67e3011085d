//! Clock configuration
//!
//! Every tunable of the appliance, with defaults matching the stock
//! board, plus a small TOML reader for the firmware's `clock.toml`.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
