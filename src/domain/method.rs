//! Module defining the Easter reckoning methods

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{domain::Calendar, error::Error};

/// The rule set used to compute Easter.
///
/// The discriminants are the numeric codes commonly used for the three methods
/// (1 = Julian, 2 = Orthodox, 3 = Western).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasterMethod {
    /// Julian computus, result expressed in the Julian calendar.
    Julian = 1,
    /// Julian computus, result converted to the Gregorian calendar.
    Orthodox = 2,
    /// Gregorian computus, as revised in 1582.
    #[default]
    Western = 3,
}

impl EasterMethod {
    pub const ALL: [EasterMethod; 3] = [
        EasterMethod::Julian,
        EasterMethod::Orthodox,
        EasterMethod::Western,
    ];

    /// The calendar in which the computed date is expressed.
    pub fn calendar(self) -> Calendar {
        match self {
            EasterMethod::Julian => Calendar::Julian,
            EasterMethod::Orthodox | EasterMethod::Western => Calendar::Gregorian,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EasterMethod::Julian => "julian",
            EasterMethod::Orthodox => "orthodox",
            EasterMethod::Western => "western",
        }
    }
}

impl TryFrom<u8> for EasterMethod {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(EasterMethod::Julian),
            2 => Ok(EasterMethod::Orthodox),
            3 => Ok(EasterMethod::Western),
            other => Err(Error::UnknownMethodCode(other.into())),
        }
    }
}

impl FromStr for EasterMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        EasterMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownMethod {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for EasterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
