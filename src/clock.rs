//! Wall-clock access.
//!
//! Reading "now" is the only side effect in this crate, so it goes through
//! the [`Clock`] trait: production code passes [`SystemClock`], tests pass a
//! [`FixedClock`]. The time zone is passed separately, as any
//! [`chrono::TimeZone`].

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::date::Date;

/// Nanoseconds in a standard day.
pub const STANDARD_NANOS_PER_DAY: u64 = 86_400 * 1_000_000_000;

/// A source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The operating system clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at a given instant.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Returns the local wall-clock time of the clock's instant in `zone`.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use respublikana::clock::{self, FixedClock};
///
/// let clock = FixedClock(Utc.with_ymd_and_hms(1799, 11, 9, 23, 0, 0).unwrap());
/// let east = FixedOffset::east_opt(3600).unwrap();
/// assert_eq!("1799-11-10 00:00:00", clock::local_now(&clock, &east).to_string());
/// ```
pub fn local_now<C, Tz>(clock: &C, zone: &Tz) -> NaiveDateTime
where
    C: Clock + ?Sized,
    Tz: TimeZone,
{
    clock.now().with_timezone(zone).naive_local()
}

/// Returns the local date of the clock's instant in `zone`.
///
/// Returns `None` if the date is outside the range of [`Date`].
pub fn local_date<C, Tz>(clock: &C, zone: &Tz) -> Option<Date>
where
    C: Clock + ?Sized,
    Tz: TimeZone,
{
    Date::from_naive(local_now(clock, zone).date())
}

/// Returns the standard nanosecond of the local day of the clock's instant
/// in `zone`.
pub fn local_nanosecond_of_day<C, Tz>(clock: &C, zone: &Tz) -> u64
where
    C: Clock + ?Sized,
    Tz: TimeZone,
{
    let time = local_now(clock, zone).time();
    standard_nanosecond_of_day(time.num_seconds_from_midnight(), time.nanosecond())
}

/// A leap second is folded into the last nanosecond of the preceding second.
pub(crate) fn standard_nanosecond_of_day(seconds: u32, nanosecond: u32) -> u64 {
    let nanos = u64::from(seconds) * 1_000_000_000 + u64::from(nanosecond.min(999_999_999));
    nanos.min(STANDARD_NANOS_PER_DAY - 1)
}
