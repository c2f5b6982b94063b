//! Lecture sections.

use super::Meeting;

/// One offering of a course: an identifier and its weekly meetings.
///
/// Identifiers combine the course code and the block name, e.g.
/// `"CSC111 LEC-0101"`. Two sections with the same id are treated as the
/// same section when building combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub meetings: Vec<Meeting>,
}

impl Section {
    /// Create a section.
    pub fn new(id: impl Into<String>, meetings: Vec<Meeting>) -> Self {
        Self {
            id: id.into(),
            meetings,
        }
    }

    /// Whether any meeting of this section overlaps any meeting of `other`.
    ///
    /// A section with no meetings never conflicts.
    pub fn conflicts(&self, other: &Section) -> bool {
        self.meetings
            .iter()
            .any(|m| other.meetings.iter().any(|o| m.conflicts(o)))
    }

    /// Returns true if the section has no meetings.
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Day, TimeOfDay};

    fn m(day: Day, start: &str, end: &str) -> Meeting {
        Meeting::new(
            day,
            TimeOfDay::parse_hhmm(start).unwrap(),
            TimeOfDay::parse_hhmm(end).unwrap(),
        )
    }

    #[test]
    fn identical_sections_conflict() {
        let a = Section::new(
            "A",
            vec![m(Day::Mon, "01:15", "02:30"), m(Day::Tue, "01:15", "20:30")],
        );
        let b = Section::new(
            "B",
            vec![m(Day::Mon, "01:15", "02:30"), m(Day::Tue, "01:15", "20:30")],
        );
        assert!(a.conflicts(&b));
        assert!(b.conflicts(&a));
    }

    #[test]
    fn any_overlapping_pair_is_enough() {
        let a = Section::new(
            "A",
            vec![m(Day::Mon, "09:00", "10:00"), m(Day::Wed, "09:00", "10:00")],
        );
        let b = Section::new(
            "B",
            vec![m(Day::Tue, "09:00", "10:00"), m(Day::Wed, "09:30", "10:30")],
        );
        assert!(a.conflicts(&b));
    }

    #[test]
    fn disjoint_sections_do_not_conflict() {
        let a = Section::new(
            "A",
            vec![m(Day::Mon, "09:00", "10:00"), m(Day::Wed, "09:00", "10:00")],
        );
        let b = Section::new(
            "B",
            vec![m(Day::Mon, "10:00", "11:00"), m(Day::Fri, "09:00", "10:00")],
        );
        assert!(!a.conflicts(&b));
    }

    #[test]
    fn empty_section_never_conflicts() {
        let empty = Section::new("skip", vec![]);
        let busy = Section::new("A", vec![m(Day::Mon, "09:00", "17:00")]);
        assert!(empty.is_empty());
        assert!(!empty.conflicts(&busy));
        assert!(!busy.conflicts(&empty));
        assert!(!empty.conflicts(&empty));
    }
}
