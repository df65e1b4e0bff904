//! Module for the Easter calculator

use std::ops::RangeInclusive;

use crate::domain::{CalendarDate, EasterMethod};

mod logic;


/// The year ranges the calculator is checked against, in the order they are tabulated by default.
pub const REFERENCE_YEAR_RANGES: [RangeInclusive<i32>; 3] = [1200..=1300, 1700..=1850, 1920..=2100];

/// Computes the date of Easter Sunday of `year` under `method`.
///
/// The result is expressed in `method.calendar()`: the Julian calendar for [`EasterMethod::Julian`], the
/// (proleptic) Gregorian calendar for the other two methods. The computation is total over `i32` years.
/// Orthodox results of the far future may fall into a later year, as the Julian calendar drifts further
/// behind the Gregorian one.
///
/// # Example
///
/// ```
/// use paschal::{Calendar, CalendarDate, EasterMethod, easter};
///
/// let western = easter(EasterMethod::Western, 2000);
/// assert_eq!(western, CalendarDate::new(2000, 4, 23, Calendar::Gregorian).unwrap());
///
/// let orthodox = easter(EasterMethod::Orthodox, 2000);
/// assert_eq!(orthodox, easter(EasterMethod::Julian, 2000).julian_to_gregorian());
/// ```
pub fn easter(method: EasterMethod, year: i32) -> CalendarDate {
    let year = i64::from(year);
    let march_28 = CalendarDate::from_parts(year, 3, 28);
    march_28.add_days(logic::days_after_march_28(method, year), method.calendar())
}
