//! Weekly meetings and their time geometry.

use super::{Day, HourWindow, TimeOfDay};

/// One weekly occurrence of a section: a day, a time range and a place.
///
/// The range is half-open, `[start, end)`. Callers must ensure
/// `start < end`; it is not checked here.
///
/// Meetings compare by value over all four fields, so two sections that
/// happen to share an identical meeting collapse to one in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Meeting {
    pub day: Day,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    /// Street address of the room, if it could be resolved.
    pub location: Option<String>,
}

impl Meeting {
    /// Create a meeting with no known location.
    pub fn new(day: Day, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            day,
            start,
            end,
            location: None,
        }
    }

    /// Set the meeting's location.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Whether the two meetings overlap in time on the same day.
    ///
    /// Touching endpoints do not conflict: a 9-10 and a 10-11 meeting can
    /// both be attended.
    pub fn conflicts(&self, other: &Meeting) -> bool {
        self.day == other.day && self.start < other.end && self.end > other.start
    }

    /// Whether one meeting ends exactly when the other starts, same day.
    pub fn adjacent(&self, other: &Meeting) -> bool {
        self.day == other.day && (self.end == other.start || self.start == other.end)
    }

    /// Whether this meeting's hour span covers the whole window.
    ///
    /// This places a meeting into the one-hour columns of a rendered
    /// timetable: a 9:00-11:00 meeting covers both the 9-10 and 10-11
    /// columns.
    pub fn in_window(&self, window: HourWindow) -> bool {
        self.start.hour() <= window.start_hour() && self.end.hour() >= window.end_hour()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn day() -> impl Strategy<Value = Day> {
        prop::sample::select(Day::ALL.to_vec())
    }

    /// Meetings with start < end, on a coarse grid so that touching and
    /// overlapping cases come up often.
    fn meeting() -> impl Strategy<Value = Meeting> {
        (day(), 8u8..20, 0u8..4, 1u8..5).prop_map(|(d, h, quarter, len)| {
            let start = TimeOfDay::new(h, quarter * 15).unwrap();
            let end_mins = h as u32 * 60 + quarter as u32 * 15 + len as u32 * 30;
            let end = TimeOfDay::new((end_mins / 60) as u8, (end_mins % 60) as u8).unwrap();
            Meeting::new(d, start, end)
        })
    }

    proptest! {
        #[test]
        fn conflicts_is_symmetric(a in meeting(), b in meeting()) {
            prop_assert_eq!(a.conflicts(&b), b.conflicts(&a));
        }

        #[test]
        fn adjacent_is_symmetric(a in meeting(), b in meeting()) {
            prop_assert_eq!(a.adjacent(&b), b.adjacent(&a));
        }

        /// Adjacent meetings never conflict
        #[test]
        fn adjacent_implies_no_conflict(a in meeting(), b in meeting()) {
            if a.adjacent(&b) {
                prop_assert!(!a.conflicts(&b));
            }
        }

        /// Every meeting conflicts with itself
        #[test]
        fn self_conflict(a in meeting()) {
            prop_assert!(a.conflicts(&a));
        }
    }
}
