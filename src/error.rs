//! Module defining the errors which are exposed to the users of the crate

use crate::domain::Calendar;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Method name that is none of `julian`, `orthodox` and `western`
    #[error("unknown Easter method: {input:?}")]
    UnknownMethod { input: String },

    /// Numeric method code outside of 1 (Julian), 2 (Orthodox) and 3 (Western)
    #[error("unknown Easter method code: {0}")]
    UnknownMethodCode(u64),

    /// Year range that cannot be parsed or whose start lies after its end
    #[error("invalid year range {input:?}: {message}")]
    InvalidYearRange { input: String, message: String },

    /// Year, month and day that do not name a day of the given calendar
    #[error("invalid {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        year: i64,
        month: u8,
        day: u8,
        calendar: Calendar,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn year_range_error(input: impl Into<String>, message: impl Into<String>) -> Error {
    Error::InvalidYearRange {
        input: input.into(),
        message: message.into(),
    }
}
