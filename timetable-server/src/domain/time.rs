//! Wall-clock times and hour windows.
//!
//! Course data gives meeting times as "HH:MM" strings with no date or
//! timezone attached. A [`TimeOfDay`] is just that: an hour and a minute,
//! ordered hour-major.

use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute precision.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::TimeOfDay;
///
/// let nine = TimeOfDay::parse_hhmm("09:00").unwrap();
/// let half_past = TimeOfDay::new(9, 30).unwrap();
/// assert!(nine < half_past);
/// assert_eq!(half_past.to_string(), "09:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time from an hour (0-23) and minute (0-59).
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("0900").is_err());
    /// assert!(TimeOfDay::parse_hhmm("9:00").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour, self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse two ASCII digit bytes into a u8.
fn parse_two_digits(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some((d1 * 10 + d2) as u8)
}

/// Error returned when an hour window is empty or runs past midnight.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hour window {start}-{end}: start must be before end and end at most 24")]
pub struct InvalidWindow {
    start: u8,
    end: u8,
}

/// A half-open range of whole hours, `[start_hour, end_hour)`.
///
/// Used both for the preferred teaching day and for the one-hour columns
/// of a rendered timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourWindow {
    start_hour: u8,
    end_hour: u8,
}

impl HourWindow {
    /// Create a window. Requires `start_hour < end_hour <= 24`.
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self, InvalidWindow> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(InvalidWindow {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// The one-hour window starting at `hour`.
    pub fn single_hour(hour: u8) -> Result<Self, InvalidWindow> {
        Self::new(hour, hour.saturating_add(1))
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }
}

impl fmt::Display for HourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00 - {:02}:00", self.start_hour, self.end_hour)
    }
}
