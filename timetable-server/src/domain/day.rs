//! Teaching days.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unrecognised day name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day: {0:?}")]
pub struct InvalidDay(String);

/// A weekday on which lectures can be scheduled.
///
/// Weekends are not teaching days, so they are not representable.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::Day;
///
/// assert_eq!(Day::parse("MO").unwrap(), Day::Mon);
/// assert_eq!(Day::parse("tue").unwrap(), Day::Tue);
/// assert_eq!(Day::parse("Friday").unwrap(), Day::Fri);
/// assert!(Day::parse("SA").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// All teaching days, Monday first.
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Parse a day from a two-letter, three-letter or full name.
    ///
    /// Case and surrounding whitespace are ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidDay> {
        let normalized = s.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "MO" | "MON" | "MONDAY" => Ok(Day::Mon),
            "TU" | "TUE" | "TUES" | "TUESDAY" => Ok(Day::Tue),
            "WE" | "WED" | "WEDNESDAY" => Ok(Day::Wed),
            "TH" | "THU" | "THUR" | "THURS" | "THURSDAY" => Ok(Day::Thu),
            "FR" | "FRI" | "FRIDAY" => Ok(Day::Fri),
            _ => Err(InvalidDay(s.to_string())),
        }
    }

    /// Three-letter uppercase code, e.g. "MON".
    pub fn code(&self) -> &'static str {
        match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thu => "THU",
            Day::Fri => "FRI",
        }
    }

    /// Full English name, e.g. "Monday".
    pub fn name(&self) -> &'static str {
        match self {
            Day::Mon => "Monday",
            Day::Tue => "Tuesday",
            Day::Wed => "Wednesday",
            Day::Thu => "Thursday",
            Day::Fri => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
