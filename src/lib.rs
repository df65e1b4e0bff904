mod domain;
mod engine;
mod error;
mod input;
mod output;
mod telemetry;

use std::ops::RangeInclusive;

use tracing::debug;

pub use domain::{Calendar, CalendarDate, EasterMethod, Weekday};
pub use engine::{REFERENCE_YEAR_RANGES, easter};
pub use error::Error;
pub use input::{parse_method, parse_methods, parse_year_range};
pub use output::{EasterRecord, write_csv};
pub use telemetry::setup_logging;

/// Computes the Easter date of every year in `years` under `method`.
///
/// Records are produced lazily, one per year in ascending order, so arbitrarily long ranges can be
/// streamed into [`write_csv`] without being collected first.
///
/// # Example
///
/// ```
/// use paschal::{EasterMethod, REFERENCE_YEAR_RANGES, tabulate, write_csv};
///
/// let records = REFERENCE_YEAR_RANGES
///     .into_iter()
///     .flat_map(|years| tabulate(EasterMethod::Orthodox, years));
///
/// let mut table = Vec::new();
/// let rows = write_csv(&mut table, records).unwrap();
/// assert_eq!(rows, 433);
/// ```
pub fn tabulate(
    method: EasterMethod,
    years: RangeInclusive<i32>,
) -> impl Iterator<Item = EasterRecord> {
    debug!(%method, start = *years.start(), end = *years.end(), "tabulating Easter dates");
    years.map(move |year| EasterRecord::new(method, easter(method, year)))
}
