//! Integration tests for the Orthodox method

use paschal::{Calendar, CalendarDate, EasterMethod, Weekday, easter};

use crate::reference;

#[test]
fn matches_reference_table() {
    reference::assert_matches_reference(EasterMethod::Orthodox);
}

#[test]
fn year_2000() {
    let expected = CalendarDate::new(2000, 4, 30, Calendar::Gregorian).unwrap();
    assert_eq!(easter(EasterMethod::Orthodox, 2000), expected);
}

#[test]
fn equals_the_gregorian_equivalent_of_julian_easter() {
    for year in 1583..=4100 {
        let julian = easter(EasterMethod::Julian, year);
        assert_eq!(
            julian.julian_to_gregorian(),
            easter(EasterMethod::Orthodox, year),
            "{year}"
        );
    }
}

#[test]
fn falls_on_a_gregorian_sunday_after_the_reform() {
    for year in 1583..=4100 {
        let date = easter(EasterMethod::Orthodox, year);
        assert_eq!(date.weekday(Calendar::Gregorian), Weekday::Sunday, "{year}");
    }
}

#[test]
fn shifts_julian_easter_by_ten_days_before_1601() {
    for year in (1200..=1300).chain(1583..=1600) {
        let julian = easter(EasterMethod::Julian, year);
        let orthodox = easter(EasterMethod::Orthodox, year);
        assert_eq!(
            orthodox.days_since_epoch(Calendar::Gregorian),
            julian.days_since_epoch(Calendar::Gregorian) + 10,
            "{year}"
        );
    }
}

#[test]
fn never_earlier_than_april_4_in_the_reference_centuries() {
    // March 22 (Julian) plus a lag of at least 13 days
    for year in 1900..=2099 {
        let date = easter(EasterMethod::Orthodox, year);
        let earliest = CalendarDate::new(i64::from(year), 4, 4, Calendar::Gregorian).unwrap();
        assert!(date >= earliest, "{year}: {date}");
    }
}
