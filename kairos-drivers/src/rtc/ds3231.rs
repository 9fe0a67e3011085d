//! DS3231 real-time clock
//!
//! Time-keeping registers 0x00-0x06 hold BCD seconds, minutes, hours,
//! day of week, date, month (bit 7 = century) and year. The driver reads
//! them in one burst and writes them one register at a time, always in
//! 24-hour mode.

use embedded_hal::i2c::I2c;
use kairos_core::time::{DateTime, Field};
use kairos_core::traits::RtcDriver;

/// 7-bit bus address
pub const DS3231_ADDR: u8 = 0x68;

/// Number of time-keeping registers
const TIME_REGS: usize = 7;

/// Register addresses
mod reg {
    pub const SECONDS: u8 = 0x00;
    pub const MINUTES: u8 = 0x01;
    pub const HOURS: u8 = 0x02;
    pub const DAY: u8 = 0x03;
    pub const DATE: u8 = 0x04;
    pub const MONTH: u8 = 0x05;
    pub const YEAR: u8 = 0x06;
}

/// 12-hour mode select in the hours register
const HOURS_12H: u8 = 0x40;
/// PM flag in 12-hour mode
const HOURS_PM: u8 = 0x20;
/// Century flag in the month register
const MONTH_CENTURY: u8 = 0x80;

/// DS3231 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ds3231Error<E> {
    /// Bus transfer failed
    I2c(E),
    /// Register held a value that is not valid BCD or is out of range
    InvalidRegister(u8),
}

/// Decode a packed BCD byte
pub fn bcd_to_bin(value: u8) -> Option<u8> {
    let (hi, lo) = (value >> 4, value & 0x0F);
    if hi > 9 || lo > 9 {
        return None;
    }
    Some(hi * 10 + lo)
}

/// Encode 0-99 as packed BCD
pub fn bin_to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

const fn register_of(field: Field) -> u8 {
    match field {
        Field::Sec => reg::SECONDS,
        Field::Min => reg::MINUTES,
        Field::Hour => reg::HOURS,
        Field::Day => reg::DAY,
        Field::Date => reg::DATE,
        Field::Month => reg::MONTH,
        Field::Year => reg::YEAR,
    }
}

/// Decode the time-keeping register block
fn decode<E>(raw: &[u8; TIME_REGS]) -> Result<DateTime, Ds3231Error<E>> {
    let field = |r: u8, mask: u8, f: Field| -> Result<u8, Ds3231Error<E>> {
        bcd_to_bin(raw[r as usize] & mask)
            .filter(|&v| f.contains(v))
            .ok_or(Ds3231Error::InvalidRegister(r))
    };

    let hours = raw[reg::HOURS as usize];
    let hour = if hours & HOURS_12H != 0 {
        let h12 = bcd_to_bin(hours & 0x1F)
            .filter(|h| (1..=12).contains(h))
            .ok_or(Ds3231Error::InvalidRegister(reg::HOURS))?;
        h12 % 12 + if hours & HOURS_PM != 0 { 12 } else { 0 }
    } else {
        field(reg::HOURS, 0x3F, Field::Hour)?
    };

    Ok(DateTime {
        sec: field(reg::SECONDS, 0x7F, Field::Sec)?,
        min: field(reg::MINUTES, 0x7F, Field::Min)?,
        hour,
        day: field(reg::DAY, 0x07, Field::Day)?,
        date: field(reg::DATE, 0x3F, Field::Date)?,
        month: field(reg::MONTH, !MONTH_CENTURY, Field::Month)?,
        year: field(reg::YEAR, 0xFF, Field::Year)?,
    })
}

/// DS3231 driver
///
/// Also satisfies the infallible [`RtcDriver`] contract: a failed read
/// returns the last good time and a failed write is dropped, both counted
/// in [`Ds3231::error_count`].
pub struct Ds3231<I2C> {
    i2c: I2C,
    last: DateTime,
    errors: u32,
}

impl<I2C: I2c> Ds3231<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            last: DateTime::default(),
            errors: 0,
        }
    }

    /// Burst-read and decode the current time
    pub fn try_read(&mut self) -> Result<DateTime, Ds3231Error<I2C::Error>> {
        let mut raw = [0u8; TIME_REGS];
        self.i2c
            .write_read(DS3231_ADDR, &[reg::SECONDS], &mut raw)
            .map_err(Ds3231Error::I2c)?;
        decode(&raw)
    }

    /// Write one field in BCD
    pub fn try_write(&mut self, field: Field, value: u8) -> Result<(), Ds3231Error<I2C::Error>> {
        // Plain BCD in the hours register selects 24-hour mode
        self.i2c
            .write(DS3231_ADDR, &[register_of(field), bin_to_bcd(value)])
            .map_err(Ds3231Error::I2c)
    }

    /// Failed transfers since creation
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    /// Last successfully read time
    pub fn last_time(&self) -> &DateTime {
        &self.last
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RtcDriver for Ds3231<I2C> {
    fn read_time(&mut self) -> DateTime {
        match self.try_read() {
            Ok(now) => self.last = now,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                match _e {
                    Ds3231Error::InvalidRegister(r) => {
                        defmt::warn!("DS3231 register {=u8:#x} invalid, keeping last time", r)
                    }
                    Ds3231Error::I2c(_) => defmt::warn!("DS3231 read failed, keeping last time"),
                }
                self.errors = self.errors.saturating_add(1);
            }
        }
        self.last
    }

    fn write_field(&mut self, field: Field, value: u8) {
        if self.try_write(field, value).is_err() {
            self.errors = self.errors.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("DS3231 write of {} failed", field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    /// Register-file model of the chip
    struct MockI2c {
        regs: [u8; 0x13],
        pointer: usize,
        fail: bool,
        writes: usize,
    }

    impl MockI2c {
        fn with_time(raw: [u8; TIME_REGS]) -> Self {
            let mut regs = [0u8; 0x13];
            regs[..TIME_REGS].copy_from_slice(&raw);
            Self {
                regs,
                pointer: 0,
                fail: false,
                writes: 0,
            }
        }
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail || address != DS3231_ADDR {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((&first, rest)) = bytes.split_first() {
                            self.pointer = first as usize;
                            for &b in rest {
                                self.regs[self.pointer] = b;
                                self.pointer += 1;
                                self.writes += 1;
                            }
                        }
                    }
                    Operation::Read(buf) => {
                        for b in buf.iter_mut() {
                            *b = self.regs[self.pointer];
                            self.pointer += 1;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_bcd() {
        assert_eq!(bcd_to_bin(0x59), Some(59));
        assert_eq!(bcd_to_bin(0x0A), None);
        assert_eq!(bin_to_bcd(47), 0x47);
    }

    #[test]
    fn test_read_24h() {
        let i2c = MockI2c::with_time([0x56, 0x34, 0x12, 0x03, 0x15, 0x06, 0x24]);
        let mut rtc = Ds3231::new(i2c);
        assert_eq!(rtc.read_time(), DateTime::new(12, 34, 56, 3, 15, 6, 24));
        assert_eq!(rtc.error_count(), 0);
    }

    #[test]
    fn test_read_masks_century_and_converts_12h() {
        // 11 PM in 12-hour mode, century bit set
        let i2c = MockI2c::with_time([0x00, 0x00, 0x40 | 0x20 | 0x11, 0x01, 0x01, 0x80 | 0x12, 0x99]);
        let mut rtc = Ds3231::new(i2c);
        let now = rtc.try_read().unwrap();
        assert_eq!(now.hour, 23);
        assert_eq!(now.month, 12);
        assert_eq!(now.year, 99);

        // 12 AM is midnight
        let i2c = MockI2c::with_time([0x00, 0x00, 0x40 | 0x12, 0x01, 0x01, 0x01, 0x00]);
        let mut rtc = Ds3231::new(i2c);
        assert_eq!(rtc.try_read().unwrap().hour, 0);
    }

    #[test]
    fn test_invalid_register_reported() {
        let i2c = MockI2c::with_time([0x00, 0x00, 0x00, 0x01, 0x32, 0x01, 0x00]);
        let mut rtc = Ds3231::new(i2c);
        assert_eq!(rtc.try_read(), Err(Ds3231Error::InvalidRegister(reg::DATE)));
    }

    #[test]
    fn test_failed_read_keeps_last_time() {
        let i2c = MockI2c::with_time([0x10, 0x00, 0x08, 0x02, 0x01, 0x01, 0x25]);
        let mut rtc = Ds3231::new(i2c);
        let good = rtc.read_time();
        rtc.i2c.fail = true;
        assert_eq!(rtc.read_time(), good);
        assert_eq!(rtc.error_count(), 1);
        rtc.write_field(Field::Sec, 0);
        assert_eq!(rtc.error_count(), 2);
    }

    #[test]
    fn test_commit_writes_bcd_registers() {
        let mut rtc = Ds3231::new(MockI2c::with_time([0; TIME_REGS]));
        rtc.commit(&DateTime::new(23, 59, 58, 7, 31, 12, 99));
        let i2c = rtc.release();
        assert_eq!(i2c.writes, 7);
        assert_eq!(&i2c.regs[..TIME_REGS], &[0x58, 0x59, 0x23, 0x07, 0x31, 0x12, 0x99]);
    }

    proptest::proptest! {
        #[test]
        fn bcd_roundtrip_below_100(v in 0u8..100) {
            proptest::prop_assert_eq!(bcd_to_bin(bin_to_bcd(v)), Some(v));
        }
    }
}
