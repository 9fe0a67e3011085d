//! Real-time clock driver trait

use crate::time::{DateTime, Field};

/// Order in which fields are written on commit
///
/// Calendar first, seconds last, so the seconds counter restarts only
/// once everything else is in place.
pub const COMMIT_ORDER: [Field; Field::COUNT] = [
    Field::Year,
    Field::Month,
    Field::Date,
    Field::Day,
    Field::Hour,
    Field::Min,
    Field::Sec,
];

/// Battery-backed clock chip
///
/// Calls are infallible at this level. Implementations that talk to a
/// real bus handle their own faults (see the DS3231 driver).
pub trait RtcDriver {
    /// Read the current date and time
    fn read_time(&mut self) -> DateTime;

    /// Write a single field
    fn write_field(&mut self, field: Field, value: u8);

    /// Write every field of `dt`, in [`COMMIT_ORDER`]
    fn commit(&mut self, dt: &DateTime) {
        for field in COMMIT_ORDER {
            self.write_field(field, dt.get(field));
        }
    }
}

impl<T: RtcDriver + ?Sized> RtcDriver for &mut T {
    fn read_time(&mut self) -> DateTime {
        (**self).read_time()
    }

    fn write_field(&mut self, field: Field, value: u8) {
        (**self).write_field(field, value)
    }
}
