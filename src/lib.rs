//! Utilities for converting dates and times between the standard (Gregorian)
//! calendar and the French Republican calendar.
//!
//! The Republican calendar was in use in France from 1793 to 1805 (and
//! briefly again in 1871). This crate extends it indefinitely with the
//! sextile rule proposed by Romme, applying the Gregorian leap-year rule to
//! the Republican year number from An XX on.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use respublikana::{Date, RepublicanDate};
//!
//! let date = Date::from_gregorian(1794, 7, 27).unwrap();
//! let thermidor = RepublicanDate::from_date(date).unwrap();
//!
//! assert_eq!("An 2 Thermidor 9", thermidor.to_string());
//! assert_eq!(Ok(date), thermidor.to_date());
//! ```
//!
//! Decimal time, and the current date-time through an injected clock:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use respublikana::clock::FixedClock;
//! use respublikana::{DecimalTime, RepublicanDateTime};
//!
//! let time = DecimalTime::from_hms(5, 0, 0).unwrap();
//! assert_eq!("12:00:00", time.to_naive_time().to_string());
//!
//! let clock = FixedClock(Utc.with_ymd_and_hms(2020, 11, 30, 12, 0, 0).unwrap());
//! let now = RepublicanDateTime::now(&clock, &Utc).unwrap();
//! assert_eq!("An 229 Frimaire 10 5h00m00s", now.to_string());
//! ```
//!
//! Conversions emit [`tracing`] events at `trace` level; install a
//! subscriber to see them.

pub mod clock;
pub mod date;
pub mod error;
pub mod republican;

pub use date::{Date, YearType};
pub use error::{Component, Error, Result};
pub use republican::{
    DecimalTime, Month, RepublicanDate, RepublicanDateTime, Season, SpecialDay,
};
