//! Integration tests for the Julian method

use paschal::{Calendar, CalendarDate, EasterMethod, REFERENCE_YEAR_RANGES, Weekday, easter};

use crate::reference;

#[test]
fn matches_reference_table() {
    reference::assert_matches_reference(EasterMethod::Julian);
}

#[test]
fn year_2000() {
    let expected = CalendarDate::new(2000, 4, 17, Calendar::Julian).unwrap();
    assert_eq!(easter(EasterMethod::Julian, 2000), expected);
}

#[test]
fn falls_on_a_julian_sunday() {
    for year in REFERENCE_YEAR_RANGES.into_iter().flatten() {
        let date = easter(EasterMethod::Julian, year);
        assert_eq!(date.weekday(Calendar::Julian), Weekday::Sunday, "{year}");
    }
}

#[test]
fn stays_within_march_22_and_april_25_for_proleptic_years() {
    for year in -1000..=1582 {
        let date = easter(EasterMethod::Julian, year);
        let earliest = CalendarDate::new(i64::from(year), 3, 22, Calendar::Julian).unwrap();
        let latest = CalendarDate::new(i64::from(year), 4, 25, Calendar::Julian).unwrap();
        assert!(earliest <= date && date <= latest, "{year}: {date}");
    }
}

#[test]
fn repeats_after_the_paschal_cycle() {
    // 19 lunar years times 28 solar years
    for year in [-600, 325, 1200, 1900] {
        let date = easter(EasterMethod::Julian, year);
        let later = easter(EasterMethod::Julian, year + 532);
        assert_eq!((date.month(), date.day()), (later.month(), later.day()));
    }
}
