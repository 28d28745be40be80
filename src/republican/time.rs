//! Decimal time: 10 hours a day, 100 minutes an hour, 100 seconds a minute.
//!
//! A decimal second lasts 0.864 standard seconds. Conversions keep
//! nanosecond precision and truncate, using integer ratios so that e.g.
//! 5h00m00s is exactly noon.

use std::fmt;

use chrono::{NaiveTime, TimeDelta, TimeZone, Timelike};

use crate::clock::{self, Clock, STANDARD_NANOS_PER_DAY};
use crate::error::{Error, Result};

pub const HOURS_PER_DAY: u32 = 10;
pub const MINUTES_PER_HOUR: u32 = 100;
pub const SECONDS_PER_MINUTE: u32 = 100;

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub const NANOS_PER_MINUTE: u64 = NANOS_PER_SECOND * SECONDS_PER_MINUTE as u64;
pub const NANOS_PER_HOUR: u64 = NANOS_PER_MINUTE * MINUTES_PER_HOUR as u64;
pub const NANOS_PER_DAY: u64 = NANOS_PER_HOUR * HOURS_PER_DAY as u64;

// standard / decimal = 0.864 = 108 / 125
const STANDARD_RATIO: u64 = 108;
const DECIMAL_RATIO: u64 = 125;

/// A time of day in decimal time.
///
/// Ordered chronologically.
///
/// # Example
///
/// ```
/// use respublikana::republican::DecimalTime;
///
/// let noon = DecimalTime::from_hms(5, 0, 0).unwrap();
/// assert_eq!("12:00:00", noon.to_naive_time().to_string());
/// assert_eq!("5h00m00s", noon.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DecimalTime {
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
}

impl DecimalTime {
    /// Midnight.
    pub const MIN: DecimalTime = DecimalTime {
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
    };
    /// The last nanosecond of the day, 9h99m99.999999999s.
    pub const MAX: DecimalTime = DecimalTime {
        hour: HOURS_PER_DAY - 1,
        minute: MINUTES_PER_HOUR - 1,
        second: SECONDS_PER_MINUTE - 1,
        nanosecond: NANOS_PER_SECOND as u32 - 1,
    };

    /// Creates a time, failing with [`Error::InvalidTime`] if a field is out
    /// of range.
    pub fn new(hour: u32, minute: u32, second: u32, nanosecond: u32) -> Result<Self> {
        for (field, value, bound) in [
            ("hour", hour, HOURS_PER_DAY),
            ("minute", minute, MINUTES_PER_HOUR),
            ("second", second, SECONDS_PER_MINUTE),
            ("nanosecond", nanosecond, NANOS_PER_SECOND as u32),
        ] {
            if value >= bound {
                return Err(Error::invalid_time(field, value, 0, i64::from(bound) - 1));
            }
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }
    /// Same as [`DecimalTime::new`] with zero nanoseconds.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self> {
        Self::new(hour, minute, second, 0)
    }
    /// Creates a time from the number of decimal nanoseconds since midnight,
    /// which must be below [`NANOS_PER_DAY`].
    pub fn from_nanosecond_of_day(nanos: u64) -> Result<Self> {
        if nanos >= NANOS_PER_DAY {
            return Err(out_of_day("nanosecond of day", nanos, NANOS_PER_DAY));
        }
        Ok(Self::split(nanos))
    }
    /// Returns a copy with the nanosecond field replaced.
    pub fn with_nanosecond(&self, nanosecond: u32) -> Result<Self> {
        Self::new(self.hour, self.minute, self.second, nanosecond)
    }

    /// Returns the hour, `0..10`.
    pub fn hour(&self) -> u32 {
        self.hour
    }
    /// Returns the minute of the hour, `0..100`.
    pub fn minute(&self) -> u32 {
        self.minute
    }
    /// Returns the second of the minute, `0..100`.
    pub fn second(&self) -> u32 {
        self.second
    }
    /// Returns the nanosecond of the decimal second.
    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Decimal nanoseconds since midnight.
    pub fn nanosecond_of_day(&self) -> u64 {
        u64::from(self.hour) * NANOS_PER_HOUR
            + u64::from(self.minute) * NANOS_PER_MINUTE
            + u64::from(self.second) * NANOS_PER_SECOND
            + u64::from(self.nanosecond)
    }

    /// Standard nanoseconds since midnight, truncated.
    ///
    /// ```
    /// use respublikana::republican::DecimalTime;
    ///
    /// let time = DecimalTime::from_hms(1, 0, 0).unwrap();
    /// assert_eq!((2 * 3600 + 24 * 60) * 1_000_000_000, time.to_standard_nanosecond_of_day());
    /// ```
    pub fn to_standard_nanosecond_of_day(&self) -> u64 {
        self.nanosecond_of_day() * STANDARD_RATIO / DECIMAL_RATIO
    }
    /// Creates a time from standard nanoseconds since midnight, truncated.
    ///
    /// Fails with [`Error::InvalidTime`] if `nanos` is not below
    /// [`STANDARD_NANOS_PER_DAY`].
    pub fn from_standard_nanosecond_of_day(nanos: u64) -> Result<Self> {
        if nanos >= STANDARD_NANOS_PER_DAY {
            return Err(out_of_day(
                "standard nanosecond of day",
                nanos,
                STANDARD_NANOS_PER_DAY,
            ));
        }
        Ok(Self::from_standard_unchecked(nanos))
    }

    /// Converts a standard time of day. A leap second counts as the last
    /// nanosecond of the second before it.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        let nanos = clock::standard_nanosecond_of_day(time.num_seconds_from_midnight(), time.nanosecond());
        Self::from_standard_unchecked(nanos)
    }
    /// Converts into a standard time of day, truncated to the nanosecond.
    pub fn to_naive_time(&self) -> NaiveTime {
        let nanos = self.to_standard_nanosecond_of_day() as i64;
        NaiveTime::MIN + TimeDelta::nanoseconds(nanos)
    }

    /// Returns the current decimal time in `zone`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{FixedOffset, TimeZone, Utc};
    /// use respublikana::clock::FixedClock;
    /// use respublikana::republican::DecimalTime;
    ///
    /// let clock = FixedClock(Utc.with_ymd_and_hms(2000, 1, 1, 11, 0, 0).unwrap());
    /// let zone = FixedOffset::east_opt(3600).unwrap();
    /// assert_eq!(DecimalTime::from_hms(5, 0, 0).unwrap(), DecimalTime::now(&clock, &zone));
    /// ```
    pub fn now<C, Tz>(clock: &C, zone: &Tz) -> Self
    where
        C: Clock + ?Sized,
        Tz: TimeZone,
    {
        Self::from_naive_time(clock::local_now(clock, zone).time())
    }

    /// Rounds to the nearest second, half up.
    ///
    /// Rounding up from the last second of the day wraps to midnight.
    ///
    /// ```
    /// use respublikana::republican::DecimalTime;
    ///
    /// let time = DecimalTime::new(4, 99, 99, 500_000_000).unwrap();
    /// assert_eq!(DecimalTime::from_hms(5, 0, 0).unwrap(), time.round_to_second());
    /// ```
    pub fn round_to_second(&self) -> Self {
        let truncated = self.nanosecond_of_day() - u64::from(self.nanosecond);
        if u64::from(self.nanosecond) < NANOS_PER_SECOND / 2 {
            Self::split(truncated)
        } else {
            Self::split((truncated + NANOS_PER_SECOND) % NANOS_PER_DAY)
        }
    }

    fn from_standard_unchecked(nanos: u64) -> Self {
        Self::split(nanos * DECIMAL_RATIO / STANDARD_RATIO)
    }

    /// `nanos` must be below [`NANOS_PER_DAY`].
    fn split(nanos: u64) -> Self {
        Self {
            hour: (nanos / NANOS_PER_HOUR) as u32,
            minute: (nanos % NANOS_PER_HOUR / NANOS_PER_MINUTE) as u32,
            second: (nanos % NANOS_PER_MINUTE / NANOS_PER_SECOND) as u32,
            nanosecond: (nanos % NANOS_PER_SECOND) as u32,
        }
    }
}

impl From<NaiveTime> for DecimalTime {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive_time(time)
    }
}

/// `4h63m87s`, with the nanoseconds (`4h63m87.000000700s`) when not zero.
impl fmt::Display for DecimalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h{:02}m{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        f.write_str("s")
    }
}

fn out_of_day(field: &'static str, nanos: u64, per_day: u64) -> Error {
    Error::invalid_time(
        field,
        i64::try_from(nanos).unwrap_or(i64::MAX),
        0,
        per_day as i64 - 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> DecimalTime {
        DecimalTime::from_hms(h, m, s).unwrap()
    }

    fn naive(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn constants() {
        assert_eq!(100_000_000_000_000, NANOS_PER_DAY);
        assert_eq!(NANOS_PER_DAY - 1, DecimalTime::MAX.nanosecond_of_day());
        assert_eq!(0, DecimalTime::MIN.nanosecond_of_day());
    }

    #[test]
    fn new_checks_ranges() {
        assert!(DecimalTime::new(9, 99, 99, 999_999_999).is_ok());
        for ((h, m, s, ns), std) in [
            ((10, 0, 0, 0), Error::invalid_time("hour", 10u32, 0, 9)),
            ((0, 100, 0, 0), Error::invalid_time("minute", 100u32, 0, 99)),
            ((0, 0, 100, 0), Error::invalid_time("second", 100u32, 0, 99)),
            (
                (0, 0, 0, 1_000_000_000),
                Error::invalid_time("nanosecond", 1_000_000_000u32, 0, 999_999_999),
            ),
        ] {
            assert_eq!(Err(std), DecimalTime::new(h, m, s, ns));
        }
        let time = hms(4, 70, 30);
        assert_eq!(DecimalTime::new(4, 70, 30, 7), time.with_nanosecond(7));
        assert!(time.with_nanosecond(1_000_000_000).is_err());
    }

    #[test]
    fn nanosecond_of_day() {
        let time = DecimalTime::new(1, 2, 3, 4).unwrap();
        let n = 10_203_000_000_004;
        assert_eq!(n, time.nanosecond_of_day());
        assert_eq!(Ok(time), DecimalTime::from_nanosecond_of_day(n));
        assert_eq!(
            Err(Error::invalid_time("nanosecond of day", 100_000_000_000_000i64, 0, 99_999_999_999_999)),
            DecimalTime::from_nanosecond_of_day(NANOS_PER_DAY)
        );
    }

    #[test]
    fn to_standard() {
        for ((h, m, s), std) in [
            ((0, 0, 0), naive(0, 0, 0)),
            ((1, 0, 0), naive(2, 24, 0)),
            ((5, 0, 0), naive(12, 0, 0)),
            ((0, 62, 50), naive(1, 30, 0)),
            ((0, 0, 5), NaiveTime::from_hms_milli_opt(0, 0, 4, 320).unwrap()),
            ((3, 33, 33), NaiveTime::from_hms_milli_opt(7, 59, 59, 712).unwrap()),
            ((5, 45, 1), NaiveTime::from_hms_milli_opt(13, 4, 48, 864).unwrap()),
        ] {
            assert_eq!(std, hms(h, m, s).to_naive_time(), "{h}h{m}m{s}s");
        }
        assert_eq!(
            NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap(),
            DecimalTime::MAX.to_naive_time()
        );
    }

    #[test]
    fn from_standard() {
        for (time, std) in [
            (naive(0, 0, 0), DecimalTime::MIN),
            (naive(2, 24, 0), hms(1, 0, 0)),
            (naive(12, 0, 0), hms(5, 0, 0)),
            (naive(1, 30, 0), hms(0, 62, 50)),
            (naive(8, 0, 0), DecimalTime::new(3, 33, 33, 333_333_333).unwrap()),
            (naive(20, 40, 29), DecimalTime::new(8, 61, 44, 675_925_925).unwrap()),
            (naive(11, 7, 58), DecimalTime::new(4, 63, 86, 574_074_074).unwrap()),
        ] {
            assert_eq!(std, DecimalTime::from_naive_time(time), "{time}");
        }
    }

    #[test]
    fn from_standard_rejects_full_day() {
        assert!(DecimalTime::from_standard_nanosecond_of_day(STANDARD_NANOS_PER_DAY - 1).is_ok());
        assert!(matches!(
            DecimalTime::from_standard_nanosecond_of_day(STANDARD_NANOS_PER_DAY),
            Err(Error::InvalidTime { .. })
        ));
    }

    #[test]
    fn leap_second() {
        let time = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        assert_eq!(DecimalTime::MAX.with_nanosecond(999_999_998), Ok(DecimalTime::from(time)));
    }

    #[test]
    fn rounding() {
        let t = |h, m, s, ns| DecimalTime::new(h, m, s, ns).unwrap();
        for (time, std) in [
            (t(4, 70, 30, 800_000_000), hms(4, 70, 31)),
            (t(4, 70, 30, 500_000_000), hms(4, 70, 31)),
            (t(4, 70, 30, 499_999_999), hms(4, 70, 30)),
            (t(4, 70, 30, 0), hms(4, 70, 30)),
            (t(4, 99, 99, 500_000_000), hms(5, 0, 0)),
            (t(4, 63, 86, 574_074_074), hms(4, 63, 87)),
            (t(9, 99, 99, 500_000_000), DecimalTime::MIN),
        ] {
            assert_eq!(std, time.round_to_second(), "{time}");
        }
    }

    #[test]
    fn ordering() {
        assert!(hms(1, 2, 3) < hms(1, 2, 4));
        assert!(hms(1, 2, 99) < hms(1, 3, 0));
        assert!(hms(0, 99, 99) < hms(1, 0, 0));
        assert!(hms(4, 5, 6) < DecimalTime::new(4, 5, 6, 1).unwrap());
    }

    #[test]
    fn display() {
        assert_eq!("4h63m87s", hms(4, 63, 87).to_string());
        assert_eq!("0h00m05s", hms(0, 0, 5).to_string());
        assert_eq!("4h63m87.000000700s", DecimalTime::new(4, 63, 87, 700).unwrap().to_string());
    }
}
