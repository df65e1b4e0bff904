use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    domain::{Calendar, CalendarDate, EasterMethod},
};


/// Public DTO representing one computed Easter date, as written to a CSV table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasterRecord {
    pub method: EasterMethod,
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub calendar: Calendar,
}

impl EasterRecord {
    pub(crate) fn new(method: EasterMethod, date: CalendarDate) -> Self {
        Self {
            method,
            year: date.year(),
            month: date.month(),
            day: date.day(),
            calendar: method.calendar(),
        }
    }

    /// The recorded date, checked against the recorded calendar.
    pub fn date(&self) -> Result<CalendarDate, Error> {
        CalendarDate::new(self.year, self.month, self.day, self.calendar)
    }
}

/// Writes the records as CSV with a header row and returns the number of records written.
pub fn write_csv(
    writer: impl Write,
    records: impl IntoIterator<Item = EasterRecord>,
) -> Result<usize, Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut count = 0;
    for record in records {
        wtr.serialize(record)?;
        count += 1;
    }
    wtr.flush()?;
    Ok(count)
}
