//! Module with the integer arithmetic of the computus: locating Easter Sunday relative to March 28.
//!
//! All three methods share one procedure: take the year's place in the 19-year lunar cycle, derive the
//! paschal full moon, step forward to the following Sunday. They differ only in the lunar and weekday
//! corrections and, for the Orthodox method, in the shift from the Julian to the Gregorian calendar.

use crate::domain::EasterMethod;

/// Julian calendar lag in the years up to 1600.
const REFORM_OFFSET: i64 = 10;

/// Number of days from March 28 to Easter Sunday of `year`, counted in `method.calendar()`.
pub(super) fn days_after_march_28(method: EasterMethod, year: i64) -> i64 {
    let golden = year.rem_euclid(19);
    let (full_moon, weekday) = match method {
        EasterMethod::Julian | EasterMethod::Orthodox => julian_terms(year, golden),
        EasterMethod::Western => gregorian_terms(year, golden),
    };
    let calendar_shift = match method {
        EasterMethod::Orthodox => julian_lag(year),
        EasterMethod::Julian | EasterMethod::Western => 0,
    };

    full_moon - weekday + calendar_shift
}

/// Paschal full moon (in days after March 21) and its weekday term under the Julian rules.
fn julian_terms(year: i64, golden: i64) -> (i64, i64) {
    let full_moon = (19 * golden + 15).rem_euclid(30);
    let weekday = (year + year.div_euclid(4) + full_moon).rem_euclid(7);
    (full_moon, weekday)
}

/// Paschal full moon and weekday term with the Gregorian solar and lunar century corrections.
fn gregorian_terms(year: i64, golden: i64) -> (i64, i64) {
    let century = year.div_euclid(100);
    let solar = century - century.div_euclid(4);
    let lunar = (8 * century + 13).div_euclid(25);
    let epact = (solar - lunar + 19 * golden + 15).rem_euclid(30);

    // an epact of 29 moves the full moon back a day, as does 28 once the golden remainder exceeds 10
    let late = epact / 28;
    let full_moon = epact - late * (1 - late * (29 / (epact + 1)) * ((21 - golden) / 11));

    let weekday = (year + year.div_euclid(4) + full_moon + 2 - solar).rem_euclid(7);
    (full_moon, weekday)
}

/// Days the Julian calendar lags behind the Gregorian one during the spring of `year`.
///
/// The lag grows by one day in every century year not divisible by 400. Before 1600 it is kept at its
/// 1582 value instead of being extrapolated backwards.
pub(super) fn julian_lag(year: i64) -> i64 {
    if year <= 1600 {
        return REFORM_OFFSET;
    }
    let centuries = year.div_euclid(100) - 16;
    REFORM_OFFSET + centuries - centuries.div_euclid(4)
}
