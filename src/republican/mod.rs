//! French Republican calendar.
//!
//! A Republican year starts on the day of the autumn equinox and has twelve
//! months of 30 days, each split into three décades, followed by five
//! complementary days (six in a sextile year). Year 1 ("An I") starts on
//! 1792-09-22.
//!
//! Days are synchronized with standard days, so a [`RepublicanDate`] maps to
//! exactly one [`Date`] and back, see [`convert`].
//!
//! # Example
//!
//! ```
//! use respublikana::Date;
//! use respublikana::republican::{Month, RepublicanDate};
//!
//! let date = Date::from_gregorian(1799, 11, 9).unwrap();
//! let coup = RepublicanDate::from_date(date).unwrap();
//!
//! assert_eq!(RepublicanDate::new(8, Month::Brumaire, 18).unwrap(), coup);
//! assert_eq!("An 8 Brumaire 18", coup.to_string());
//! assert_eq!("An VIII Brumaire 18", format!("{coup:#}"));
//! ```

use std::fmt::{self as core_fmt, Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDate, TimeZone};

use crate::clock::{self, Clock};
use crate::date::Date;
use crate::error::{Error, Result};

pub mod convert;
pub mod datetime;
pub mod fmt;
pub mod sextile;
pub mod time;

pub use datetime::RepublicanDateTime;
pub use time::DecimalTime;

/// Days in each of the twelve regular months.
pub const DAYS_PER_MONTH: u32 = 30;

/// Days in a décade.
pub const DAYS_PER_DECADE: u32 = 10;

/// Month of the Republican calendar, ordered Vendémiaire first.
///
/// [`Month::Sansculottides`] is not a real month but the complementary days
/// closing the year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Month {
    Vendemiaire = 1,
    Brumaire,
    Frimaire,
    Nivose,
    Pluviose,
    Ventose,
    Germinal,
    Floreal,
    Prairial,
    Messidor,
    Thermidor,
    Fructidor,
    Sansculottides,
}

/// Season of a regular month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Season {
    Autumn,
    Winter,
    Spring,
    Summer,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 13] = {
        use Month::*;
        [
            Vendemiaire,
            Brumaire,
            Frimaire,
            Nivose,
            Pluviose,
            Ventose,
            Germinal,
            Floreal,
            Prairial,
            Messidor,
            Thermidor,
            Fructidor,
            Sansculottides,
        ]
    };

    /// Looks up a month by its ordinal, `1..=13`.
    ///
    /// ```
    /// use respublikana::republican::Month;
    ///
    /// assert_eq!(Some(Month::Floreal), Month::from_ordinal(8));
    /// assert_eq!(None, Month::from_ordinal(14));
    /// ```
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        let idx = usize::try_from(ordinal.checked_sub(1)?).ok()?;
        Self::ALL.get(idx).copied()
    }
    /// Returns the ordinal, 1 for Vendémiaire through 13 for the
    /// complementary days.
    pub fn ordinal(&self) -> u32 {
        *self as u32
    }
    /// Returns the 0-based position in [`Month::ALL`].
    pub fn index(&self) -> usize {
        *self as usize - 1
    }
    /// Returns the canonical name, see [`fmt::MONTH_NAMES`].
    pub fn name(&self) -> &'static str {
        fmt::MONTH_NAMES[self.index()]
    }
    /// `true` for the complementary days.
    pub fn is_complementary(&self) -> bool {
        matches!(self, Month::Sansculottides)
    }
    /// Number of days in the month for a sextile or common year.
    pub fn max_day(&self, sextile: bool) -> u32 {
        match (self.is_complementary(), sextile) {
            (false, _) => DAYS_PER_MONTH,
            (true, false) => 5,
            (true, true) => 6,
        }
    }
    /// Returns the season of a regular month, `None` for the complementary
    /// days.
    pub fn season(&self) -> Option<Season> {
        match self.ordinal() {
            1..=3 => Some(Season::Autumn),
            4..=6 => Some(Season::Winter),
            7..=9 => Some(Season::Spring),
            10..=12 => Some(Season::Summer),
            _ => None,
        }
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> core_fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a month name, ignoring case and accents.
///
/// The complementary days also answer to "Sanculottides" and "Jours
/// complémentaires", with or without the final `s`.
///
/// ```
/// use respublikana::republican::Month;
///
/// assert_eq!(Ok(Month::Nivose), "nivose".parse());
/// assert_eq!(Ok(Month::Floreal), "Floréal".parse());
/// assert_eq!(Ok(Month::Sansculottides), "Sanculottide".parse());
/// ```
impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let folded = fmt::fold(s.trim());
        let key = folded.strip_suffix('s').unwrap_or(&folded);
        if ["sansculottide", "sanculottide", "jours complementaire"].contains(&key) {
            return Ok(Month::Sansculottides);
        }
        Month::ALL
            .into_iter()
            .find(|m| fmt::fold(m.name()) == folded)
            .ok_or_else(|| Error::parse(s, "unknown month name"))
    }
}

/// Festival of a complementary day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum SpecialDay {
    Vertu = 1,
    Genie,
    Travail,
    Opinion,
    Recompenses,
    /// Only in sextile years.
    Revolution,
}

impl SpecialDay {
    /// Maps the day of the complementary "month", `1..=6`.
    pub fn from_day(day: u32) -> Option<Self> {
        use SpecialDay::*;
        match day {
            1 => Some(Vertu),
            2 => Some(Genie),
            3 => Some(Travail),
            4 => Some(Opinion),
            5 => Some(Recompenses),
            6 => Some(Revolution),
            _ => None,
        }
    }
    /// Returns the day of the complementary "month".
    pub fn day(&self) -> u32 {
        *self as u32
    }
    /// Returns the festival name, see [`fmt::SPECIAL_DAY_NAMES`].
    pub fn name(&self) -> &'static str {
        fmt::SPECIAL_DAY_NAMES[*self as usize - 1]
    }
}

impl Display for SpecialDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> core_fmt::Result {
        f.write_str(self.name())
    }
}

/// A date of the Republican calendar.
///
/// Ordered by year, month, then day. Values are always valid: the only ways
/// to obtain one are the checked constructors and the converters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct RepublicanDate {
    year: i32,
    month: Month,
    day: u32,
}

impl RepublicanDate {
    /// First day of the calendar, An 1 Vendémiaire 1 (1792-09-22, see
    /// [`convert::EPOCH`]).
    pub const MIN: RepublicanDate = RepublicanDate {
        year: 1,
        month: Month::Vendemiaire,
        day: 1,
    };

    /// Creates a date, checking that `year` is positive and that `day` exists
    /// in `month` of that year.
    ///
    /// # Example
    ///
    /// ```
    /// use respublikana::republican::{Month, RepublicanDate};
    ///
    /// assert!(RepublicanDate::new(3, Month::Sansculottides, 6).is_ok()); // sextile
    /// assert!(RepublicanDate::new(4, Month::Sansculottides, 6).is_err());
    /// ```
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self> {
        if year < 1 {
            return Err(Error::invalid_date("year", year, 1, i32::MAX.into()));
        }
        let max = month.max_day(sextile::is_sextile(year));
        if !(1..=max).contains(&day) {
            return Err(Error::invalid_date("day", day, 1, max.into()));
        }
        Ok(Self { year, month, day })
    }
    /// Same as [`RepublicanDate::new`], with the month given by ordinal
    /// (`1..=13`).
    pub fn from_ordinals(year: i32, month: u32, day: u32) -> Result<Self> {
        let month = Month::from_ordinal(month).ok_or(Error::invalid_date("month", month, 1, 13))?;
        Self::new(year, month, day)
    }

    /// Converts a standard date, see [`convert::to_republican`].
    pub fn from_date(date: Date) -> Result<Self> {
        convert::to_republican(date)
    }
    /// Converts into a standard date, see [`convert::to_standard`].
    pub fn to_date(&self) -> Result<Date> {
        convert::to_standard(*self)
    }
    /// Converts into [`chrono::NaiveDate`].
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        let date = self.to_date()?;
        date.to_naive().ok_or(Error::OutOfRange {
            jdn: date.jdn().into(),
        })
    }
    /// Returns the current Republican date in `zone`.
    pub fn today<C, Tz>(clock: &C, zone: &Tz) -> Result<Self>
    where
        C: Clock + ?Sized,
        Tz: TimeZone,
    {
        Self::try_from(clock::local_now(clock, zone).date())
    }

    /// Returns the year ("An").
    pub fn year(&self) -> i32 {
        self.year
    }
    /// Returns the month.
    pub fn month(&self) -> Month {
        self.month
    }
    /// Returns the day of the month, from 1.
    pub fn day(&self) -> u32 {
        self.day
    }
    /// Returns the décade (`1..=3`) of the month containing the day.
    ///
    /// A décade is a period of 10 days, not 10 years.
    pub fn decade(&self) -> u32 {
        (self.day - 1) / DAYS_PER_DECADE + 1
    }
    /// Returns the day within its décade (`1..=10`, Primidi through Décadi),
    /// or `None` for the complementary days.
    pub fn day_of_decade(&self) -> Option<u32> {
        (!self.month.is_complementary()).then(|| (self.day - 1) % DAYS_PER_DECADE + 1)
    }
    /// Determines if the year of the date is sextile.
    pub fn is_sextile(&self) -> bool {
        sextile::is_sextile(self.year)
    }
    /// `true` for the complementary days.
    pub fn is_special_day(&self) -> bool {
        self.month.is_complementary()
    }
    /// Returns the festival of a complementary day, `None` for other days.
    ///
    /// ```
    /// use respublikana::republican::{Month, RepublicanDate, SpecialDay};
    ///
    /// let date = RepublicanDate::new(3, Month::Sansculottides, 6).unwrap();
    /// assert_eq!(Some(SpecialDay::Revolution), date.special_day());
    /// ```
    pub fn special_day(&self) -> Option<SpecialDay> {
        if self.is_special_day() {
            SpecialDay::from_day(self.day)
        } else {
            None
        }
    }
    /// `true` if `self` is strictly before `other`.
    pub fn is_before(&self, other: &RepublicanDate) -> bool {
        self < other
    }

    /// Adds `days` to the day of the month without carrying into other months.
    ///
    /// This only serves small corrections within a month; fails with
    /// [`Error::InvalidDate`] if the result is not in the month. Use
    /// [`RepublicanDate::plus_days`] for general arithmetic.
    ///
    /// ```
    /// use respublikana::republican::{Month, RepublicanDate};
    ///
    /// let date = RepublicanDate::new(8, Month::Nivose, 12).unwrap();
    /// assert_eq!(10, date.shift_within_month(-2).unwrap().day());
    /// assert!(RepublicanDate::MIN.shift_within_month(-1).is_err());
    /// ```
    pub fn shift_within_month(&self, days: i64) -> Result<Self> {
        let day = i64::from(self.day) + days;
        let max = self.month.max_day(self.is_sextile());
        match u32::try_from(day) {
            Ok(day) => Self::new(self.year, self.month, day),
            Err(_) => Err(Error::invalid_date("day", day, 1, max.into())),
        }
    }

    /// Adds `days` (possibly negative), rolling over months and years.
    ///
    /// Goes through the standard calendar; fails with [`Error::PreEpoch`] if
    /// the result is before An 1 Vendémiaire 1.
    ///
    /// ```
    /// use respublikana::republican::{Month, RepublicanDate};
    ///
    /// let date = RepublicanDate::MIN.plus_days(365).unwrap();
    /// assert_eq!(RepublicanDate::new(2, Month::Vendemiaire, 1).unwrap(), date);
    /// assert!(RepublicanDate::MIN.plus_days(-1).is_err());
    /// ```
    pub fn plus_days(&self, days: i64) -> Result<Self> {
        let jdn = i64::from(self.to_date()?.jdn()) + days;
        let date = u32::try_from(jdn)
            .map(Date::from_jdn)
            .map_err(|_| Error::OutOfRange { jdn })?;
        convert::to_republican(date)
    }

    /// Days since the start of the year, counting Vendémiaire 1 as 1.
    pub(crate) fn day_index(&self) -> i64 {
        i64::from(DAYS_PER_MONTH * (self.month.ordinal() - 1) + self.day)
    }
}

/// `An <year> <month> <day>`, e.g. `An 12 Floréal 28`; the alternate form
/// (`{:#}`) writes the year in Roman numerals.
impl Display for RepublicanDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> core_fmt::Result {
        if f.alternate() {
            write!(f, "{} {} {}", fmt::year(self.year), self.month, self.day)
        } else {
            write!(f, "An {} {} {}", self.year, self.month, self.day)
        }
    }
}

/// Parses the [`Display`] forms, with the year in Arabic or Roman numerals
/// and the month as accepted by [`Month::from_str`].
///
/// ```
/// use respublikana::republican::{Month, RepublicanDate};
///
/// let std = RepublicanDate::new(12, Month::Floreal, 28).unwrap();
/// assert_eq!(Ok(std), "An 12 Floréal 28".parse());
/// assert_eq!(Ok(std), "An XII Floreal 28".parse());
/// ```
impl FromStr for RepublicanDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut it = s.split_whitespace();
        if !it.next().is_some_and(|w| w.eq_ignore_ascii_case("an")) {
            return Err(Error::parse(s, "expected \"An\""));
        }
        let year = it.next().ok_or_else(|| Error::parse(s, "missing year"))?;
        let year = match year.parse::<i32>() {
            Ok(year) => year,
            Err(_) => fmt::parse_roman(year)
                .and_then(|y| i32::try_from(y).ok())
                .ok_or_else(|| Error::parse(s, "invalid year"))?,
        };
        // the day is the last word, the month name may span several
        let rest: Vec<&str> = it.collect();
        let (day, month) = match rest.split_last() {
            None => return Err(Error::parse(s, "missing month")),
            Some((_, [])) => return Err(Error::parse(s, "missing day")),
            Some((day, month)) => (*day, month.join(" ")),
        };
        let month: Month = month
            .parse()
            .map_err(|_| Error::parse(s, "unknown month name"))?;
        let day = day.parse().map_err(|_| Error::parse(s, "invalid day"))?;
        Self::new(year, month, day)
    }
}

impl TryFrom<Date> for RepublicanDate {
    type Error = Error;

    fn try_from(date: Date) -> Result<Self> {
        convert::to_republican(date)
    }
}

impl TryFrom<NaiveDate> for RepublicanDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        match Date::from_naive(date) {
            Some(date) => convert::to_republican(date),
            None => Err(Error::PreEpoch {
                year: date.year(),
                month: date.month() as i32,
                day: date.day() as i32,
            }),
        }
    }
}
