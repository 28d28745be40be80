//! Calendar-independant date, used for the standard (Gregorian) side of every
//! conversion.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};

/// Julian day number of 0001-01-01 minus one, i.e. `jdn - days_from_ce`.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar
/// (Julian day number 0).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub const fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `(year, month, day)` is not a date of the proleptic
    /// Gregorian calendar, or if it is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use respublikana::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(1900, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return None;
        }
        u32::try_from(gregorian_to_jdn(i64::from(year), month, day))
            .map(Self::from_jdn)
            .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use respublikana::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        // u32 JDNs stay below Gregorian year 11.8 million
        (year as i32, month as i32, day as i32)
    }
    /// Returns the Gregorian year of the date.
    pub fn year(&self) -> i32 {
        self.gregorian().0
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use respublikana::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Adds `days` (possibly negative), returning `None` when the result
    /// leaves the supported range.
    ///
    /// ```
    /// use respublikana::Date;
    ///
    /// let date = Date::from_gregorian(1799, 12, 31).unwrap();
    /// assert_eq!((1800, 1, 1), date.checked_add_days(1).unwrap().gregorian());
    /// assert_eq!(None, Date::from_jdn(0).checked_add_days(-1));
    /// ```
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        u32::try_from(i64::from(self.jdn) + days)
            .map(Self::from_jdn)
            .ok()
    }

    /// Converts from [`chrono::NaiveDate`], returning `None` for dates before
    /// JDN 0.
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        u32::try_from(i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET)
            .map(Self::from_jdn)
            .ok()
    }
    /// Converts into [`chrono::NaiveDate`], returning `None` past chrono's
    /// supported years.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let days = i32::try_from(i64::from(self.jdn) - JDN_CE_OFFSET).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

/// # Panics
///
/// Panics if the result leaves the supported range. Use
/// [`Date::checked_add_days`] when that can happen.
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.unsigned_abs()
        })
    }
}
/// Number of days from `rhs` to `self`.
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        i64::from(self.jdn) - i64::from(rhs.jdn)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Julian day number of a valid Gregorian date, which may fall outside the
/// range of [`Date`].
pub(crate) fn gregorian_to_jdn(year: i64, month: i32, day: i32) -> i64 {
    let (y, m, d) = (year, i64::from(month), i64::from(day));
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

/// Number of days of `month` (`1..=12`) in Gregorian `year`.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 => 28 + YearType::from_gregorian(year).is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(1792, 9, 22).unwrap();
        assert_eq!(2375840, date.jdn());
    }

    #[test]
    fn from_gregorian_rejects_invalid() {
        for (y, m, d) in [
            (1800, 2, 29),
            (1900, 2, 29),
            (2021, 4, 31),
            (2021, 13, 1),
            (2021, 0, 1),
            (2021, 1, 0),
            (-4714, 11, 23),
        ] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
        assert!(Date::from_gregorian(2000, 2, 29).is_some());
        assert!(Date::from_gregorian(1804, 2, 29).is_some());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2375840);
        assert_eq!((1792, 9, 22), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(1800, 2, 28).unwrap();
        assert_eq!((1800, 3, 1), (date + 1).gregorian());
        assert_eq!((1800, 2, 27), (date + -1).gregorian());
        let leap = Date::from_gregorian(2000, 2, 28).unwrap();
        assert_eq!((2000, 2, 29), (leap + 1).gregorian());
        assert_eq!(2, Date::from_gregorian(2000, 3, 1).unwrap() - date.checked_add_days(365 * 200 + 48).unwrap());
    }

    #[test]
    fn difference_spans_whole_range() {
        let (first, last) = (Date::from_jdn(0), Date::from_jdn(u32::MAX));
        assert_eq!(i64::from(u32::MAX), last - first);
        assert_eq!(-i64::from(u32::MAX), first - last);
    }

    #[test]
    fn chrono_interop() {
        let naive = NaiveDate::from_ymd_opt(1792, 9, 22).unwrap();
        let date = Date::from_naive(naive).unwrap();
        assert_eq!(2375840, date.jdn());
        assert_eq!(Some(naive), date.to_naive());
        assert_eq!(None, Date::from_jdn(u32::MAX).to_naive());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
        assert_eq!("1792-09-22", Date::from_jdn(2375840).to_string());
    }

    #[test]
    fn month_lengths() {
        for ((y, m), std) in [((1800, 2), 28), ((2000, 2), 29), ((1999, 9), 30), ((1999, 12), 31)] {
            assert_eq!(std, days_in_month(y, m));
        }
    }
}
