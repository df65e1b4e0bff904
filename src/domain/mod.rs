//! Module for the types defining the Easter domain: the reckoning methods and the calendar dates they produce.

mod date;
mod method;

pub use date::{Calendar, CalendarDate, Weekday};
pub use method::EasterMethod;
