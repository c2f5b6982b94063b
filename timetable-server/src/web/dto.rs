//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalogue::Term;
use crate::domain::{Day, HourWindow, Meeting};
use crate::planner::{ScoreBreakdown, Selection};

/// Query string of `GET /timetable/plan`.
#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    /// Comma-separated course codes that must be taken, e.g. "CSC111,MAT137"
    pub courses: String,

    /// Comma-separated course codes that may be left out
    pub optional: Option<String>,

    /// Term letter, F or S (defaults to F)
    pub term: Option<String>,

    /// Comma-separated days to avoid, e.g. "FR" or "MON,FRI"
    pub exclude: Option<String>,

    /// Preferred first hour (defaults to 9)
    pub start: Option<u8>,

    /// Preferred last hour (defaults to 17)
    pub end: Option<u8>,
}

pub const DEFAULT_START_HOUR: u8 = 9;
pub const DEFAULT_END_HOUR: u8 = 17;

impl PlanQuery {
    pub fn required_courses(&self) -> Vec<String> {
        split_list(&self.courses)
    }

    /// Optional courses, minus any already required.
    pub fn optional_courses(&self) -> Vec<String> {
        let required = self.required_courses();
        self.optional
            .as_deref()
            .map(split_list)
            .unwrap_or_default()
            .into_iter()
            .filter(|course| !required.contains(course))
            .collect()
    }

    pub fn term(&self) -> &str {
        self.term.as_deref().filter(|t| !t.trim().is_empty()).unwrap_or("F")
    }

    pub fn excluded_days(&self) -> Vec<String> {
        self.exclude.as_deref().map(split_list).unwrap_or_default()
    }

    pub fn start_hour(&self) -> u8 {
        self.start.unwrap_or(DEFAULT_START_HOUR)
    }

    pub fn end_hour(&self) -> u8 {
        self.end.unwrap_or(DEFAULT_END_HOUR)
    }
}

/// Split a comma-separated list, uppercasing and dropping blanks and repeats.
fn split_list(list: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in list.split(',') {
        let item = item.trim().to_ascii_uppercase();
        if !item.is_empty() && !items.contains(&item) {
            items.push(item);
        }
    }
    items
}

/// A planned timetable.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// Term planned for
    pub term: Term,

    /// Preferred hours, e.g. "09:00 - 17:00"
    pub window: String,

    /// Days the student asked to avoid
    pub excluded_days: Vec<Day>,

    /// Chosen lecture sections, ordered by id
    pub sections: Vec<SectionResult>,

    pub score: ScoreResult,

    /// Number of conflict-free combinations compared
    pub combinations_scored: usize,
}

/// A chosen lecture section.
#[derive(Debug, Serialize)]
pub struct SectionResult {
    /// Section id, e.g. "CSC111 LEC-0101"
    pub id: String,

    pub meetings: Vec<MeetingResult>,
}

/// One weekly meeting of a section.
#[derive(Debug, Serialize)]
pub struct MeetingResult {
    pub day: Day,

    /// Start time, HH:MM
    pub start: String,

    /// End time, HH:MM
    pub end: String,

    /// Street address, if known
    pub location: Option<String>,
}

/// How the total score was reached.
#[derive(Debug, Serialize)]
pub struct ScoreResult {
    pub total: i64,
    pub travel: i64,
    pub adjacent_pairs: usize,
    pub excluded_days: i64,
    pub outside_window: i64,
}

/// Error body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl MeetingResult {
    pub fn from_meeting(meeting: &Meeting) -> Self {
        Self {
            day: meeting.day,
            start: meeting.start.to_string(),
            end: meeting.end.to_string(),
            location: meeting.location.clone(),
        }
    }
}

impl From<&ScoreBreakdown> for ScoreResult {
    fn from(score: &ScoreBreakdown) -> Self {
        Self {
            total: score.total,
            travel: score.travel,
            adjacent_pairs: score.adjacent_pairs,
            excluded_days: score.excluded_days,
            outside_window: score.outside_window,
        }
    }
}

impl PlanResponse {
    /// Create from the winning selection.
    pub fn from_selection(
        selection: &Selection,
        term: Term,
        window: HourWindow,
        excluded_days: Vec<Day>,
    ) -> Self {
        let sections = selection
            .combination
            .sections()
            .map(|(id, meetings)| SectionResult {
                id: id.to_string(),
                meetings: meetings.iter().map(MeetingResult::from_meeting).collect(),
            })
            .collect();

        Self {
            term,
            window: window.to_string(),
            excluded_days,
            sections,
            score: ScoreResult::from(&selection.score),
            combinations_scored: selection.paths_scored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Section, TimeOfDay};
    use crate::planner::{ChoiceId, Combination};

    fn meeting(day: Day, start: &str, end: &str) -> Meeting {
        Meeting::new(
            day,
            TimeOfDay::parse_hhmm(start).unwrap(),
            TimeOfDay::parse_hhmm(end).unwrap(),
        )
    }

    #[test]
    fn query_defaults() {
        let query = PlanQuery {
            courses: "csc111, mat137,,".into(),
            ..PlanQuery::default()
        };

        assert_eq!(query.required_courses(), vec!["CSC111", "MAT137"]);
        assert!(query.optional_courses().is_empty());
        assert_eq!(query.term(), "F");
        assert!(query.excluded_days().is_empty());
        assert_eq!(query.start_hour(), 9);
        assert_eq!(query.end_hour(), 17);
    }

    #[test]
    fn query_with_everything() {
        let query = PlanQuery {
            courses: "CSC111".into(),
            optional: Some("sta130".into()),
            term: Some("S".into()),
            exclude: Some("mo, fr".into()),
            start: Some(10),
            end: Some(15),
        };

        assert_eq!(query.optional_courses(), vec!["STA130"]);
        assert_eq!(query.term(), "S");
        assert_eq!(query.excluded_days(), vec!["MO", "FR"]);
        assert_eq!(query.start_hour(), 10);
        assert_eq!(query.end_hour(), 15);
    }

    #[test]
    fn repeated_courses_are_listed_once() {
        let query = PlanQuery {
            courses: "CSC111,csc111,MAT137".into(),
            optional: Some("mat137,STA130,sta130".into()),
            ..PlanQuery::default()
        };

        assert_eq!(query.required_courses(), vec!["CSC111", "MAT137"]);
        assert_eq!(query.optional_courses(), vec!["STA130"]);
    }

    #[test]
    fn blank_term_defaults_to_fall() {
        let query = PlanQuery {
            courses: "CSC111".into(),
            term: Some(" ".into()),
            ..PlanQuery::default()
        };
        assert_eq!(query.term(), "F");
    }

    #[test]
    fn response_serialization() {
        let a = Section::new(
            "CSC111 LEC-0101",
            vec![meeting(Day::Mon, "09:00", "10:00").at("40 St George St")],
        );
        let b = Section::new("MAT137 LEC-0101", vec![meeting(Day::Wed, "13:00", "14:00")]);

        let selection = Selection {
            combination: Combination::from_sections([&a, &b]),
            path: vec![ChoiceId::section(&a.id), ChoiceId::section(&b.id)],
            score: ScoreBreakdown {
                total: 100,
                travel: 0,
                adjacent_pairs: 0,
                excluded_days: 0,
                outside_window: 0,
            },
            paths_scored: 1,
        };

        let response = PlanResponse::from_selection(
            &selection,
            Term::Fall,
            HourWindow::new(9, 17).unwrap(),
            vec![Day::Fri],
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["term"], "F");
        assert_eq!(json["window"], "09:00 - 17:00");
        assert_eq!(json["excluded_days"][0], "FRI");
        assert_eq!(json["sections"][0]["id"], "CSC111 LEC-0101");
        assert_eq!(json["sections"][0]["meetings"][0]["day"], "MON");
        assert_eq!(json["sections"][0]["meetings"][0]["start"], "09:00");
        assert_eq!(
            json["sections"][0]["meetings"][0]["location"],
            "40 St George St"
        );
        assert!(json["sections"][1]["meetings"][0]["location"].is_null());
        assert_eq!(json["score"]["total"], 100);
        assert_eq!(json["combinations_scored"], 1);
    }
}
