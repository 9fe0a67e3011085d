//! Editable date/time fields

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One editable unit of the date/time
///
/// The declaration order is the cursor order used while editing:
/// seconds first, year last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Field {
    /// Seconds, 0-59
    Sec,
    /// Minutes, 0-59
    Min,
    /// Hours, 0-23
    Hour,
    /// Day of week, 1-7
    Day,
    /// Day of month, 1-31 (not checked against month length)
    Date,
    /// Month, 1-12
    Month,
    /// Year within the century, 0-99 (2000-2099)
    Year,
}

impl Field {
    /// Number of fields
    pub const COUNT: usize = 7;

    /// All fields in cursor order
    pub const ALL: [Field; Field::COUNT] = [
        Field::Sec,
        Field::Min,
        Field::Hour,
        Field::Day,
        Field::Date,
        Field::Month,
        Field::Year,
    ];

    /// Position of this field in cursor order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Field at a cursor position
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Inclusive (min, max) bounds
    pub const fn bounds(self) -> (u8, u8) {
        match self {
            Field::Sec | Field::Min => (0, 59),
            Field::Hour => (0, 23),
            Field::Day => (1, 7),
            Field::Date => (1, 31),
            Field::Month => (1, 12),
            Field::Year => (0, 99),
        }
    }

    /// Smallest legal value
    pub const fn min(self) -> u8 {
        self.bounds().0
    }

    /// Largest legal value
    pub const fn max(self) -> u8 {
        self.bounds().1
    }

    /// Whether `value` lies within this field's bounds
    pub const fn contains(self, value: u8) -> bool {
        let (min, max) = self.bounds();
        value >= min && value <= max
    }

    /// Next field, wrapping from `Year` back to `Sec`
    pub const fn next_cyclic(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Next field, or `None` after `Year`
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Whether this is a time-of-day field (hour, minute or second)
    ///
    /// Only these fields exist on the alarm.
    pub const fn is_time_of_day(self) -> bool {
        matches!(self, Field::Sec | Field::Min | Field::Hour)
    }
}

/// Increment `value`, wrapping to `min` once it exceeds `max`
pub const fn wrap_inc(value: u8, min: u8, max: u8) -> u8 {
    let next = value.wrapping_add(1);
    if next > max {
        min
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_at_max() {
        assert_eq!(wrap_inc(23, 0, 23), 0);
        assert_eq!(wrap_inc(31, 1, 31), 1);
        assert_eq!(wrap_inc(99, 0, 99), 0);
        assert_eq!(wrap_inc(7, 1, 7), 1);
    }

    #[test]
    fn test_cyclic_order() {
        let mut field = Field::Hour;
        let mut seen = 0;
        loop {
            field = field.next_cyclic();
            seen += 1;
            if field == Field::Hour {
                break;
            }
        }
        assert_eq!(seen, Field::COUNT);
        assert_eq!(Field::Year.next_cyclic(), Field::Sec);
    }

    #[test]
    fn test_linear_next_stops_after_year() {
        assert_eq!(Field::Hour.next(), Some(Field::Day));
        assert_eq!(Field::Month.next(), Some(Field::Year));
        assert_eq!(Field::Year.next(), None);
    }

    #[test]
    fn test_time_of_day_fields() {
        let tod: usize = Field::ALL.iter().filter(|f| f.is_time_of_day()).count();
        assert_eq!(tod, 3);
        assert!(!Field::Date.is_time_of_day());
    }

    proptest! {
        #[test]
        fn prop_wrap_inc_stays_in_bounds(index in 0usize..Field::COUNT, raw in 0u8..=99) {
            let field = Field::ALL[index];
            let (min, max) = field.bounds();
            let value = min + raw % (max - min + 1);
            let next = wrap_inc(value, min, max);
            prop_assert!(field.contains(next));
            if value == max {
                prop_assert_eq!(next, min);
            } else {
                prop_assert_eq!(next, value + 1);
            }
        }
    }
}
