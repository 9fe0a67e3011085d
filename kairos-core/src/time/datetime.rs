//! Calendar date and time-of-day

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::field::{wrap_inc, Field};

/// Year offset of the two-digit year field
pub const CENTURY: u16 = 2000;

/// Wall-clock date and time as kept by the RTC
///
/// The date is not checked against the month length; the RTC owns the
/// calendar and this type only mirrors its registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    /// Seconds (0-59)
    pub sec: u8,
    /// Minutes (0-59)
    pub min: u8,
    /// Hours (0-23)
    pub hour: u8,
    /// Day of week (1-7)
    pub day: u8,
    /// Day of month (1-31)
    pub date: u8,
    /// Month (1-12)
    pub month: u8,
    /// Year within the century (0-99)
    pub year: u8,
}

impl Default for DateTime {
    fn default() -> Self {
        Self {
            sec: 0,
            min: 0,
            hour: 0,
            day: 1,
            date: 1,
            month: 1,
            year: 0,
        }
    }
}

impl DateTime {
    /// Create a date/time from its time-of-day and calendar parts
    pub const fn new(hour: u8, min: u8, sec: u8, day: u8, date: u8, month: u8, year: u8) -> Self {
        Self {
            sec,
            min,
            hour,
            day,
            date,
            month,
            year,
        }
    }

    /// Read one field
    pub const fn get(&self, field: Field) -> u8 {
        match field {
            Field::Sec => self.sec,
            Field::Min => self.min,
            Field::Hour => self.hour,
            Field::Day => self.day,
            Field::Date => self.date,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    /// Mutable access to one field
    pub fn get_mut(&mut self, field: Field) -> &mut u8 {
        match field {
            Field::Sec => &mut self.sec,
            Field::Min => &mut self.min,
            Field::Hour => &mut self.hour,
            Field::Day => &mut self.day,
            Field::Date => &mut self.date,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        }
    }

    /// Wrap-increment one field within its bounds
    pub fn increment(&mut self, field: Field) {
        let (min, max) = field.bounds();
        let value = self.get_mut(field);
        *value = wrap_inc(*value, min, max);
    }

    /// Full four-digit year
    pub const fn full_year(&self) -> u16 {
        CENTURY + self.year as u16
    }

    /// Whether every field is inside its bounds
    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|&f| f.contains(self.get(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_wraps_each_field() {
        let mut dt = DateTime::new(23, 59, 59, 7, 31, 12, 99);
        for field in Field::ALL {
            dt.increment(field);
        }
        assert_eq!(dt, DateTime::new(0, 0, 0, 1, 1, 1, 0));
    }

    #[test]
    fn test_increment_counts_up() {
        let mut dt = DateTime::new(6, 30, 15, 2, 14, 3, 25);
        dt.increment(Field::Hour);
        dt.increment(Field::Date);
        assert_eq!(dt.hour, 7);
        assert_eq!(dt.date, 15);
        assert_eq!(dt.min, 30);
    }

    #[test]
    fn test_full_year() {
        let dt = DateTime::new(0, 0, 0, 1, 1, 1, 25);
        assert_eq!(dt.full_year(), 2025);
    }

    #[test]
    fn test_validity() {
        assert!(DateTime::default().is_valid());
        let mut dt = DateTime::default();
        dt.month = 13;
        assert!(!dt.is_valid());
    }
}
