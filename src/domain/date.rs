//! Module defining calendar dates together with the day-count arithmetic of the Julian and the proleptic Gregorian calendar.
//!
//! Both calendars are mapped onto a signed count of days relative to 1970-01-01 (Gregorian).
//! Years are numbered astronomically, i.e. year 0 precedes year 1 and is a leap year in both calendars.
//! Internally, years start on March 1 so that the leap day is the last day of a year.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Days from March 1 of year 0 (Gregorian) to 1970-01-01.
const GREGORIAN_EPOCH_SHIFT: i64 = 719_468;
/// Days from March 1 of year 0 (Julian) to 1970-01-01 (Gregorian), which is 1969-12-19 in the Julian calendar.
const JULIAN_EPOCH_SHIFT: i64 = 719_470;

const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097; // 400 years
const DAYS_PER_JULIAN_CYCLE: i64 = 1_461; // 4 years

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    Julian,
    Gregorian,
}

impl Calendar {
    pub fn is_leap_year(self, year: i64) -> bool {
        match self {
            Calendar::Julian => year.rem_euclid(4) == 0,
            Calendar::Gregorian => {
                year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
            }
        }
    }

    /// Number of days of `month` in `year`, `None` if `month` is not in `1..=12`.
    pub fn days_in_month(self, year: i64, month: u8) -> Option<u8> {
        let days = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year(year) => 29,
            2 => 28,
            _ => return None,
        };
        Some(days)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Calendar::Julian => "julian",
            Calendar::Gregorian => "gregorian",
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    fn from_days_since_epoch(days: i64) -> Self {
        // 1970-01-01 was a Thursday
        match (days + 4).rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

/// A day given by year, month (1-12) and day of the month.
///
/// The date itself does not record its calendar: the same triple names different days in the Julian and the
/// Gregorian calendar, so every operation depending on the actual day takes the [`Calendar`] as an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CalendarDate {
    year: i64,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Largest absolute year accepted by [`CalendarDate::new`]. Keeps all day counts within `i64`.
    pub const MAX_ABS_YEAR: i64 = 1 << 40;

    /// Creates a date after checking that it exists in `calendar`.
    pub fn new(year: i64, month: u8, day: u8, calendar: Calendar) -> Result<Self, Error> {
        let invalid = || Error::InvalidDate {
            year,
            month,
            day,
            calendar,
        };
        if year.unsigned_abs() > Self::MAX_ABS_YEAR.unsigned_abs() {
            return Err(invalid());
        }
        match calendar.days_in_month(year, month) {
            Some(last) if (1..=last).contains(&day) => Ok(Self { year, month, day }),
            _ => Err(invalid()),
        }
    }

    /// Constructs a date known to be valid in every calendar (e.g. March 28).
    pub(crate) const fn from_parts(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Signed number of days between 1970-01-01 (Gregorian) and this date read in `calendar`.
    pub fn days_since_epoch(&self, calendar: Calendar) -> i64 {
        let month = i64::from(self.month);
        let year = if month <= 2 { self.year - 1 } else { self.year };
        let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + i64::from(self.day) - 1;

        match calendar {
            Calendar::Gregorian => {
                let cycle = year.div_euclid(400);
                let year_of_cycle = year - cycle * 400;
                let day_of_cycle =
                    year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;
                cycle * DAYS_PER_GREGORIAN_CYCLE + day_of_cycle - GREGORIAN_EPOCH_SHIFT
            }
            Calendar::Julian => {
                let cycle = year.div_euclid(4);
                let year_of_cycle = year - cycle * 4;
                cycle * DAYS_PER_JULIAN_CYCLE + year_of_cycle * 365 + day_of_year
                    - JULIAN_EPOCH_SHIFT
            }
        }
    }

    /// Inverse of [`CalendarDate::days_since_epoch`].
    pub(crate) fn from_days_since_epoch(days: i64, calendar: Calendar) -> Self {
        let (year, day_of_year) = match calendar {
            Calendar::Gregorian => {
                let days = days + GREGORIAN_EPOCH_SHIFT;
                let cycle = days.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
                let day_of_cycle = days - cycle * DAYS_PER_GREGORIAN_CYCLE;
                let year_of_cycle = (day_of_cycle - day_of_cycle / 1_460 + day_of_cycle / 36_524
                    - day_of_cycle / 146_096)
                    / 365;
                let day_of_year =
                    day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);
                (cycle * 400 + year_of_cycle, day_of_year)
            }
            Calendar::Julian => {
                let days = days + JULIAN_EPOCH_SHIFT;
                let cycle = days.div_euclid(DAYS_PER_JULIAN_CYCLE);
                let day_of_cycle = days - cycle * DAYS_PER_JULIAN_CYCLE;
                let year_of_cycle = (day_of_cycle - day_of_cycle / 1_460) / 365;
                (cycle * 4 + year_of_cycle, day_of_cycle - 365 * year_of_cycle)
            }
        };

        // month counted from March = 0
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 3
        } else {
            shifted_month - 9
        };
        let year = if month <= 2 { year + 1 } else { year };

        Self {
            year,
            month: month as u8,
            day: day as u8,
        }
    }

    /// The date `days` days after this one, both read in `calendar`.
    pub(crate) fn add_days(&self, days: i64, calendar: Calendar) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch(calendar) + days, calendar)
    }

    pub fn weekday(&self, calendar: Calendar) -> Weekday {
        Weekday::from_days_since_epoch(self.days_since_epoch(calendar))
    }

    /// Reads this date in the Julian calendar and returns the Gregorian date of the same day.
    pub fn julian_to_gregorian(&self) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch(Calendar::Julian), Calendar::Gregorian)
    }

    /// Converts a Gregorian date into a [`chrono::NaiveDate`], `None` outside of chrono's supported years.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        let year = i32::try_from(self.year).ok()?;
        chrono::NaiveDate::from_ymd_opt(year, self.month.into(), self.day.into())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
