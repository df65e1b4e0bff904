//! Property-based tests over the whole `i32` year domain.

use paschal::{Calendar, CalendarDate, EasterMethod, Weekday, easter};
use proptest::prelude::*;

fn any_method() -> impl Strategy<Value = EasterMethod> {
    prop::sample::select(EasterMethod::ALL.to_vec())
}

proptest! {
    #[test]
    fn is_deterministic(method in any_method(), year in any::<i32>()) {
        prop_assert_eq!(easter(method, year), easter(method, year));
    }

    #[test]
    fn is_a_valid_date_of_its_calendar(method in any_method(), year in any::<i32>()) {
        let date = easter(method, year);
        let checked = CalendarDate::new(date.year(), date.month(), date.day(), method.calendar());
        prop_assert!(checked.is_ok(), "{} {}: {}", method, year, date);
    }

    #[test]
    fn julian_and_western_fall_on_sunday(year in any::<i32>()) {
        let julian = easter(EasterMethod::Julian, year);
        let western = easter(EasterMethod::Western, year);
        prop_assert_eq!(julian.weekday(Calendar::Julian), Weekday::Sunday);
        prop_assert_eq!(western.weekday(Calendar::Gregorian), Weekday::Sunday);
    }

    #[test]
    fn julian_and_western_stay_in_their_year(year in any::<i32>()) {
        prop_assert_eq!(easter(EasterMethod::Julian, year).year(), i64::from(year));
        prop_assert_eq!(easter(EasterMethod::Western, year).year(), i64::from(year));
    }

    #[test]
    fn orthodox_is_converted_julian_easter_after_the_reform(year in 1583..=i32::MAX) {
        let orthodox = easter(EasterMethod::Orthodox, year);
        prop_assert_eq!(easter(EasterMethod::Julian, year).julian_to_gregorian(), orthodox);
        prop_assert_eq!(orthodox.weekday(Calendar::Gregorian), Weekday::Sunday);
        prop_assert!(orthodox.year() >= i64::from(year));
    }
}
