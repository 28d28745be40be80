//! Error type shared by every fallible operation of this crate.

use std::fmt;

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or converting Republican dates and times.
///
/// Range errors carry the offending field, the value given and the valid
/// (inclusive) range, so callers can report them without extra context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A Republican date field is outside its valid range.
    #[error("invalid Republican date: {field} {value} not in {min}..={max}")]
    InvalidDate {
        /// Name of the field (`"year"`, `"month"` or `"day"`).
        field: &'static str,
        /// The value that was provided.
        value: i64,
        /// Smallest valid value.
        min: i64,
        /// Largest valid value.
        max: i64,
    },

    /// A decimal time field is outside its valid range.
    #[error("invalid decimal time: {field} {value} not in {min}..={max}")]
    InvalidTime {
        /// Name of the field.
        field: &'static str,
        /// The value that was provided.
        value: i64,
        /// Smallest valid value.
        min: i64,
        /// Largest valid value.
        max: i64,
    },

    /// A standard date precedes 1792-09-22, where the Republican calendar is
    /// undefined.
    #[error("{year:04}-{month:02}-{day:02} precedes the Republican epoch (1792-09-22)")]
    PreEpoch {
        /// Gregorian year.
        year: i32,
        /// Gregorian month.
        month: i32,
        /// Gregorian day.
        day: i32,
    },

    /// A date-time was assembled without its date or its time.
    #[error("missing {0} component")]
    MissingComponent(Component),

    /// A day outside the range of [`Date`](crate::Date) (or of chrono).
    #[error("Julian day number {jdn} is out of the supported range")]
    OutOfRange {
        /// The unrepresentable Julian day number.
        jdn: i64,
    },

    /// Text that does not follow the canonical format.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// The halves of a [`RepublicanDateTime`](crate::RepublicanDateTime).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Component {
    Date,
    Time,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Date => "date",
            Component::Time => "time",
        })
    }
}

impl Error {
    pub(crate) fn invalid_date(field: &'static str, value: impl Into<i64>, min: i64, max: i64) -> Self {
        Error::InvalidDate {
            field,
            value: value.into(),
            min,
            max,
        }
    }

    pub(crate) fn invalid_time(field: &'static str, value: impl Into<i64>, min: i64, max: i64) -> Self {
        Error::InvalidTime {
            field,
            value: value.into(),
            min,
            max,
        }
    }

    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Error::Parse {
            input: input.to_owned(),
            reason,
        }
    }
}
