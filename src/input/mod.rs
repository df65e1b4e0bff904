//! Module defining the parsing logic used to convert user-provided arguments into domain types.

use std::ops::RangeInclusive;

use crate::domain::EasterMethod;
use crate::error::{Error, year_range_error};


const METHOD_KW_ALL: &str = "all";
const YEAR_RANGE_SEPARATOR: char = ':';

/// Parses a method given by name (`julian`, `orthodox`, `western`) or numeric code (`1`, `2`, `3`).
///
/// Any unsigned number is treated as a code, so `"256"` fails with [`Error::UnknownMethodCode`].
pub fn parse_method(input: &str) -> Result<EasterMethod, Error> {
    let trimmed = input.trim();
    match trimmed.parse::<u64>() {
        Ok(code) => u8::try_from(code)
            .map_err(|_| Error::UnknownMethodCode(code))
            .and_then(EasterMethod::try_from),
        Err(_) => input.parse(),
    }
}

/// Parses a comma-separated list of methods; `all` selects every method.
/// Duplicates are dropped, keeping the first occurrence.
pub fn parse_methods(input: &str) -> Result<Vec<EasterMethod>, Error> {
    if input.trim().eq_ignore_ascii_case(METHOD_KW_ALL) {
        return Ok(EasterMethod::ALL.to_vec());
    }

    let mut methods = Vec::new();
    for part in input.split(',') {
        let method = parse_method(part)?;
        if !methods.contains(&method) {
            methods.push(method);
        }
    }
    Ok(methods)
}

/// Parses `YEAR` or `START:END` into an inclusive range of years. Years may be negative.
pub fn parse_year_range(input: &str) -> Result<RangeInclusive<i32>, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(year_range_error(input, "no year given"));
    }

    let (start, end) = match trimmed.split_once(YEAR_RANGE_SEPARATOR) {
        Some((start, end)) => (parse_year(input, start)?, parse_year(input, end)?),
        None => {
            let year = parse_year(input, trimmed)?;
            (year, year)
        }
    };

    if start > end {
        return Err(year_range_error(
            input,
            format!("start year {start} is after end year {end}"),
        ));
    }
    Ok(start..=end)
}

fn parse_year(input: &str, part: &str) -> Result<i32, Error> {
    let part = part.trim();
    part.parse()
        .map_err(|e| year_range_error(input, format!("{part:?} is not a year: {e}")))
}
