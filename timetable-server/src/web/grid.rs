//! Day-by-hour timetable grid.

use crate::domain::{Day, HourWindow};
use crate::planner::Combination;

/// Cell text for a meeting with no known room.
const UNKNOWN_LOCATION: &str = "NA";

/// A combination laid out as one-hour columns by weekday rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableGrid {
    /// One column per hour from the earliest start to the latest end.
    pub columns: Vec<HourWindow>,

    /// Monday to Friday, each with one cell per column.
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub day: Day,
    pub cells: Vec<String>,
}

impl GridRow {
    /// Full day name for the row header.
    pub fn day_name(&self) -> &'static str {
        self.day.name()
    }
}

impl TimetableGrid {
    /// Lay out a combination. A meeting fills every column its hour span
    /// covers; each cell reads `"<section> (<location>)"`.
    ///
    /// A meeting that starts and ends inside one clock hour (09:10 - 09:50)
    /// covers no column and is left out of the grid. It is still listed
    /// with its section on the timetable page.
    pub fn from_combination(combination: &Combination) -> Self {
        let meetings = combination.meetings();
        let first = meetings.iter().map(|m| m.start.hour()).min();
        let last = meetings.iter().map(|m| m.end.hour()).max();

        let columns: Vec<HourWindow> = match (first, last) {
            (Some(first), Some(last)) => (first..last)
                .filter_map(|hour| HourWindow::single_hour(hour).ok())
                .collect(),
            _ => Vec::new(),
        };

        let rows = Day::ALL
            .iter()
            .map(|&day| {
                let cells = columns
                    .iter()
                    .map(|&window| {
                        let entries: Vec<String> = combination
                            .sections()
                            .flat_map(|(id, meetings)| {
                                meetings
                                    .iter()
                                    .filter(move |m| m.day == day && m.in_window(window))
                                    .map(move |m| {
                                        let location =
                                            m.location.as_deref().unwrap_or(UNKNOWN_LOCATION);
                                        format!("{id} ({location})")
                                    })
                            })
                            .collect();
                        entries.join("; ")
                    })
                    .collect();
                GridRow { day, cells }
            })
            .collect();

        Self { columns, rows }
    }

    /// Column headers, e.g. "09:00 - 10:00".
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(HourWindow::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
