//! Single alarm slot

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::datetime::DateTime;
use super::field::{wrap_inc, Field};

/// Daily alarm
///
/// Only the time-of-day fields exist here; calendar fields are never
/// matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alarm {
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub min: u8,
    /// Second (0-59)
    pub sec: u8,
    /// Whether the alarm fires at all
    pub enabled: bool,
}

impl Default for Alarm {
    fn default() -> Self {
        Self {
            hour: 7,
            min: 0,
            sec: 0,
            enabled: false,
        }
    }
}

impl Alarm {
    /// Create a disabled alarm at the given time
    pub const fn new(hour: u8, min: u8, sec: u8) -> Self {
        Self {
            hour,
            min,
            sec,
            enabled: false,
        }
    }

    /// Read a time-of-day field, `None` for calendar fields
    pub const fn get(&self, field: Field) -> Option<u8> {
        match field {
            Field::Hour => Some(self.hour),
            Field::Min => Some(self.min),
            Field::Sec => Some(self.sec),
            _ => None,
        }
    }

    /// Wrap-increment a time-of-day field
    ///
    /// Calendar fields do not apply to the alarm and are ignored.
    /// Returns whether anything changed.
    pub fn increment(&mut self, field: Field) -> bool {
        let (min, max) = field.bounds();
        let value = match field {
            Field::Hour => &mut self.hour,
            Field::Min => &mut self.min,
            Field::Sec => &mut self.sec,
            _ => return false,
        };
        *value = wrap_inc(*value, min, max);
        true
    }

    /// Flip the enabled flag
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Whether `now` is exactly the alarm time (enabled or not)
    pub const fn time_matches(&self, now: &DateTime) -> bool {
        now.hour == self.hour && now.min == self.min && now.sec == self.sec
    }

    /// Whether the alarm is enabled and `now` is exactly the alarm time
    pub const fn fires_at(&self, now: &DateTime) -> bool {
        self.enabled && self.time_matches(now)
    }

    /// Whether every field is inside its bounds
    pub const fn is_valid(&self) -> bool {
        Field::Hour.contains(self.hour) && Field::Min.contains(self.min) && Field::Sec.contains(self.sec)
    }
}
