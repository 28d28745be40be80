//! A Republican date together with a decimal time of day.

use std::fmt;

use chrono::{NaiveDateTime, TimeZone};

use super::{DecimalTime, Month, RepublicanDate};
use crate::clock::{self, Clock};
use crate::date::Date;
use crate::error::{Component, Error, Result};

/// A Republican date and decimal time, ordered date first.
///
/// The date and the time convert independently: a day of either calendar
/// runs from midnight to midnight.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use respublikana::republican::RepublicanDateTime;
///
/// let std = NaiveDate::from_ymd_opt(1804, 5, 18).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let dt = RepublicanDateTime::try_from(std).unwrap();
/// assert_eq!("An 12 Floréal 28 5h00m00s", dt.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct RepublicanDateTime {
    date: RepublicanDate,
    time: DecimalTime,
}

impl RepublicanDateTime {
    /// Pairs a date with a time of day.
    pub fn new(date: RepublicanDate, time: DecimalTime) -> Self {
        Self { date, time }
    }
    /// Assembles a date-time from optional halves, failing with
    /// [`Error::MissingComponent`] naming the first one absent.
    pub fn from_parts(date: Option<RepublicanDate>, time: Option<DecimalTime>) -> Result<Self> {
        let date = date.ok_or(Error::MissingComponent(Component::Date))?;
        let time = time.ok_or(Error::MissingComponent(Component::Time))?;
        Ok(Self::new(date, time))
    }
    /// Validates every field, as [`RepublicanDate::new`] and
    /// [`DecimalTime::new`] do.
    pub fn from_components(
        year: i32,
        month: Month,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    ) -> Result<Self> {
        Ok(Self::new(
            RepublicanDate::new(year, month, day)?,
            DecimalTime::new(hour, minute, second, nanosecond)?,
        ))
    }

    /// Returns the date part.
    pub fn date(&self) -> RepublicanDate {
        self.date
    }
    /// Returns the time part.
    pub fn time(&self) -> DecimalTime {
        self.time
    }
    /// Returns the year ("An").
    pub fn year(&self) -> i32 {
        self.date.year()
    }
    /// Returns the month.
    pub fn month(&self) -> Month {
        self.date.month()
    }
    /// Returns the day of the month.
    pub fn day(&self) -> u32 {
        self.date.day()
    }
    /// Returns the decimal hour.
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }
    /// Returns the decimal minute.
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }
    /// Returns the decimal second.
    pub fn second(&self) -> u32 {
        self.time.second()
    }
    /// Returns the nanosecond of the decimal second.
    pub fn nanosecond(&self) -> u32 {
        self.time.nanosecond()
    }

    /// Converts a standard date and standard nanosecond of that day.
    pub fn from_standard(date: Date, nanosecond_of_day: u64) -> Result<Self> {
        Ok(Self::new(
            RepublicanDate::from_date(date)?,
            DecimalTime::from_standard_nanosecond_of_day(nanosecond_of_day)?,
        ))
    }
    /// Converts into a standard date and standard nanosecond of that day.
    pub fn to_standard(&self) -> Result<(Date, u64)> {
        Ok((self.date.to_date()?, self.time.to_standard_nanosecond_of_day()))
    }
    /// Converts into [`chrono::NaiveDateTime`].
    pub fn to_naive_date_time(&self) -> Result<NaiveDateTime> {
        Ok(self.date.to_naive_date()?.and_time(self.time.to_naive_time()))
    }

    /// Returns the current date-time in `zone`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use respublikana::clock::FixedClock;
    /// use respublikana::republican::RepublicanDateTime;
    ///
    /// let clock = FixedClock(Utc.with_ymd_and_hms(1793, 1, 21, 9, 36, 0).unwrap());
    /// let now = RepublicanDateTime::now(&clock, &Utc).unwrap();
    /// assert_eq!("An 1 Pluviôse 2 4h00m00s", now.to_string());
    /// ```
    pub fn now<C, Tz>(clock: &C, zone: &Tz) -> Result<Self>
    where
        C: Clock + ?Sized,
        Tz: TimeZone,
    {
        Self::try_from(clock::local_now(clock, zone))
    }

    /// Rounds the time to the nearest second, see
    /// [`DecimalTime::round_to_second`]. The date is left unchanged, also when
    /// the time wraps to midnight.
    pub fn round_to_second(&self) -> Self {
        Self::new(self.date, self.time.round_to_second())
    }
}

impl TryFrom<NaiveDateTime> for RepublicanDateTime {
    type Error = Error;

    fn try_from(dt: NaiveDateTime) -> Result<Self> {
        Ok(Self::new(
            RepublicanDate::try_from(dt.date())?,
            DecimalTime::from_naive_time(dt.time()),
        ))
    }
}

impl fmt::Display for RepublicanDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
