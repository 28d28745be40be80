//! Conversion between standard dates and Republican dates.
//!
//! Both directions work on whole days. The offset between the two calendars
//! drifts by a day or two over the centuries, because sextile years and
//! Gregorian leap years do not line up: the drift is the difference of the
//! two leap counters of [`sextile`](super::sextile).

use tracing::{debug, trace};

use super::sextile::{gregorian_leap_count, republican_leap_count, EPOCH_YEAR};
use super::{Month, RepublicanDate, DAYS_PER_MONTH};
use crate::date::{gregorian_to_jdn, Date};
use crate::error::{Error, Result};

/// 1792-09-22, the standard date of An 1 Vendémiaire 1.
pub const EPOCH: Date = Date::from_jdn(2_375_840);

/// Converts a standard date into a Republican date.
///
/// Fails with [`Error::PreEpoch`] for dates before [`EPOCH`].
///
/// # Example
///
/// ```
/// use respublikana::Date;
/// use respublikana::republican::{convert, Month, RepublicanDate};
///
/// let date = Date::from_gregorian(1804, 5, 18).unwrap();
/// let std = RepublicanDate::new(12, Month::Floreal, 28).unwrap();
/// assert_eq!(Ok(std), convert::to_republican(date));
/// ```
pub fn to_republican(date: Date) -> Result<RepublicanDate> {
    if date < EPOCH {
        debug!(%date, "rejecting date before the Republican epoch");
        let (year, month, day) = date.gregorian();
        return Err(Error::PreEpoch { year, month, day });
    }
    let jdn = i64::from(date.jdn());
    let standard_year = i64::from(date.year());

    // the Republican year starting in autumn of `standard_year`
    let mut year = standard_year - EPOCH_YEAR;
    let mut start = year_start(standard_year);
    if jdn < start {
        start = year_start(standard_year - 1);
    } else {
        year += 1;
    }

    let offset = jdn - start;
    trace!(%date, year, start, offset, "located Republican year");
    let year = i32::try_from(year).map_err(|_| Error::OutOfRange { jdn })?;
    RepublicanDate::from_ordinals(
        year,
        (offset / i64::from(DAYS_PER_MONTH)) as u32 + 1,
        (offset % i64::from(DAYS_PER_MONTH)) as u32 + 1,
    )
}

/// Converts a Republican date into a standard date.
///
/// Fails with [`Error::OutOfRange`] when the result cannot be represented by
/// [`Date`].
///
/// # Example
///
/// ```
/// use respublikana::republican::{convert, Month, RepublicanDate};
///
/// let date = RepublicanDate::new(1, Month::Pluviose, 2).unwrap();
/// assert_eq!("1793-01-21", convert::to_standard(date).unwrap().to_string());
/// ```
pub fn to_standard(date: RepublicanDate) -> Result<Date> {
    let new_year = new_year_day(date.year())?;
    let delta = date.day_index() - new_year.day_index();
    let jdn = gregorian_to_jdn(EPOCH_YEAR + i64::from(date.year()), 1, 1) + delta;
    trace!(%date, %new_year, delta, jdn, "located standard date");
    u32::try_from(jdn)
        .map(Date::from_jdn)
        .map_err(|_| Error::OutOfRange { jdn })
}

/// JDN of Vendémiaire 1 of the Republican year beginning in autumn of
/// `standard_year`.
fn year_start(standard_year: i64) -> i64 {
    let drift = republican_leap_count(standard_year - EPOCH_YEAR) - gregorian_leap_count(standard_year);
    gregorian_to_jdn(standard_year, 9, 22) + drift
}

/// Republican date of January 1 of standard year `1792 + year`, i.e. the
/// January falling within An `year`.
///
/// Nivôse 12 in An 1, then moving by at most two days either way.
fn new_year_day(year: i32) -> Result<RepublicanDate> {
    let previous = i64::from(year) - 1;
    let drift = gregorian_leap_count(previous + EPOCH_YEAR) - republican_leap_count(previous);
    RepublicanDate::new(year, Month::Nivose, 12)?.shift_within_month(drift)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    fn republican(y: i32, m: u32, d: u32) -> RepublicanDate {
        RepublicanDate::from_ordinals(y, m, d).unwrap()
    }

    #[test]
    fn epoch() {
        assert_eq!(gregorian(1792, 9, 22), EPOCH);
        assert_eq!(Ok(RepublicanDate::MIN), to_republican(EPOCH));
        assert_eq!(Ok(EPOCH), to_standard(RepublicanDate::MIN));
    }

    #[test]
    fn both_directions() {
        let data = [
            ((1, 1, 1), (1792, 9, 22)),
            ((1, 5, 2), (1793, 1, 21)),
            ((3, 13, 6), (1795, 9, 22)),
            ((4, 1, 1), (1795, 9, 23)),
            ((8, 2, 18), (1799, 11, 9)),
            ((8, 6, 10), (1800, 3, 1)),
            ((12, 1, 1), (1803, 9, 24)),
            ((12, 8, 28), (1804, 5, 18)),
            ((27, 3, 21), (1818, 12, 12)),
            ((79, 6, 27), (1871, 3, 18)),
            ((108, 1, 1), (1899, 9, 22)),
            ((108, 13, 6), (1900, 9, 22)),
            ((109, 1, 1), (1900, 9, 23)),
            ((208, 13, 6), (2000, 9, 21)),
            ((229, 3, 10), (2020, 11, 30)),
            ((232, 4, 12), (2024, 1, 1)),
        ];
        for ((y, m, d), (gy, gm, gd)) in data {
            let (rdate, date) = (republican(y, m, d), gregorian(gy, gm, gd));
            assert_eq!(Ok(rdate), to_republican(date), "{date}");
            assert_eq!(Ok(date), to_standard(rdate), "{rdate}");
        }
    }

    #[test]
    fn new_year_days() {
        for (year, std) in [(1, 12), (8, 11), (12, 10), (109, 11), (209, 12), (232, 12)] {
            assert_eq!(republican(year, 4, std), new_year_day(year).unwrap(), "An {year}");
        }
    }

    #[test]
    fn year_starts() {
        for (year, (m, d)) in [
            (1792, (9, 22)),
            (1795, (9, 23)),
            (1803, (9, 24)),
            (1811, (9, 23)),
            (1899, (9, 22)),
            (1900, (9, 23)),
            (2000, (9, 22)),
        ] {
            let std = i64::from(gregorian(year, m, d).jdn());
            assert_eq!(std, year_start(year.into()), "{year}");
        }
    }

    #[test]
    fn pre_epoch() {
        for (y, m, d) in [(1792, 9, 21), (1650, 1, 1), (1, 1, 1)] {
            assert_eq!(
                Err(Error::PreEpoch {
                    year: y,
                    month: m,
                    day: d
                }),
                to_republican(gregorian(y, m, d))
            );
        }
    }

    #[test]
    fn out_of_range() {
        let date = RepublicanDate::new(i32::MAX, Month::Vendemiaire, 1).unwrap();
        assert!(matches!(to_standard(date), Err(Error::OutOfRange { .. })));
        let last = to_republican(Date::from_jdn(u32::MAX)).unwrap();
        assert_eq!(Ok(Date::from_jdn(u32::MAX)), to_standard(last));
    }

    #[test]
    fn every_day_round_trips() {
        let end = gregorian(2400, 1, 1);
        let mut date = EPOCH;
        let mut prev = None;
        while date < end {
            let rdate = to_republican(date).unwrap();
            assert_eq!(Ok(date), to_standard(rdate), "{rdate}");
            if let Some(prev) = prev {
                assert!(prev < rdate, "{prev} then {rdate}");
            }
            prev = Some(rdate);
            date = date + 1;
        }
    }
}
