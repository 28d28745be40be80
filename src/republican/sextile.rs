//! Sextile (leap) year rules, and the leap-year counters used to locate year
//! boundaries between the two calendars.
//!
//! The first four sextile years (An III, VII, XI and XV) were fixed by the
//! autumn equinox and follow no arithmetic rule. From An XX onwards the
//! Gregorian rule is applied to the Republican year number itself, so An C,
//! CC and CCC are common years while An CD is sextile.

use crate::date::YearType;

/// Gregorian year in which An I begins.
pub const EPOCH_YEAR: i64 = 1792;

/// Sextile years observed before the arithmetic rule.
pub const IRREGULAR_SEXTILES: [i64; 4] = [3, 7, 11, 15];

/// First year following the arithmetic rule.
pub const FIRST_REGULAR_YEAR: i64 = 20;

/// Determines if Republican `year` is sextile, i.e. has a sixth
/// complementary day.
///
/// # Example
///
/// ```
/// use respublikana::republican::sextile::is_sextile;
///
/// assert!(is_sextile(3));
/// assert!(!is_sextile(4));
/// assert!(!is_sextile(100));
/// assert!(is_sextile(400));
/// ```
pub fn is_sextile(year: i32) -> bool {
    IRREGULAR_SEXTILES.contains(&i64::from(year))
        || i64::from(year) >= FIRST_REGULAR_YEAR && YearType::from_gregorian(year).is_leap()
}

/// Number of Gregorian leap years after 1792 up to and including `year`.
///
/// Years up to 1792 count zero.
///
/// # Example
///
/// ```
/// use respublikana::republican::sextile::gregorian_leap_count;
///
/// assert_eq!(25, gregorian_leap_count(1900)); // 1800 & 1900 not leap
/// assert_eq!(50, gregorian_leap_count(2000));
/// ```
pub fn gregorian_leap_count(year: i64) -> i64 {
    leap_years_since(year, EPOCH_YEAR)
}

/// Number of sextile years from An I up to and including An `year`.
///
/// # Example
///
/// ```
/// use respublikana::republican::sextile::republican_leap_count;
///
/// assert_eq!(4, republican_leap_count(19));
/// assert_eq!(5, republican_leap_count(20));
/// assert_eq!(24, republican_leap_count(100));
/// ```
pub fn republican_leap_count(year: i64) -> i64 {
    let irregular = IRREGULAR_SEXTILES.iter().filter(|&&y| y <= year).count() as i64;
    if year < FIRST_REGULAR_YEAR {
        return irregular;
    }
    irregular + 1 + leap_years_since(year, FIRST_REGULAR_YEAR)
}

/// Leap years in `start + 1..=year`, counting every fourth year from `start`
/// and dropping century years not divisible by 400.
fn leap_years_since(year: i64, start: i64) -> i64 {
    if year <= start {
        return 0;
    }
    (year - start) / 4 - non_leap_centuries(year, start)
}

/// Century years `c` with `start <= c <= year` and `c % 400 != 0`.
fn non_leap_centuries(year: i64, start: i64) -> i64 {
    // numbered in centuries, so multiples of 400 are multiples of 4
    let first = (start + 99) / 100;
    let last = year / 100;
    if last < first {
        return 0;
    }
    (last - first + 1) - (last / 4 - (first - 1) / 4)
}
