//! Raw course dataset format.
//!
//! The dataset is one JSON object keyed by offering, e.g.
//! `"CSC111H1-S-20231"`. Each offering has named meeting blocks
//! (`"LEC-0101"`, `"TUT-0201"`, ...) and each block has a schedule of
//! individual weekly meetings. Key order matters: when a course is offered
//! more than once in a term, the last offering in the file wins, so maps
//! are read into ordered vectors rather than hash maps.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use tracing::warn;

use crate::domain::{Day, Meeting, Section, TimeOfDay};

use super::buildings::BuildingTable;

/// The whole dataset, offerings in file order.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(super) struct RawDataset {
    #[serde(deserialize_with = "ordered_map")]
    pub offerings: Vec<(String, RawOffering)>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawOffering {
    #[serde(default, deserialize_with = "ordered_map")]
    pub meetings: Vec<(String, RawBlock)>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawBlock {
    #[serde(default, deserialize_with = "ordered_map")]
    pub schedule: Vec<(String, RawMeeting)>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawMeeting {
    pub meeting_day: Option<String>,
    pub meeting_start_time: Option<String>,
    pub meeting_end_time: Option<String>,
    pub assigned_room1: Option<String>,
    pub assigned_room2: Option<String>,
}

/// Deserialize a JSON object into `(key, value)` pairs in document order.
fn ordered_map<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}

/// Course code and term letter from an offering key.
///
/// Keys look like `"CSC111H1-S-20231"`: the first six characters are the
/// course code and the character at index 9 is the term.
pub(super) fn split_offering_key(key: &str) -> Option<(&str, char)> {
    let code = key.get(..6)?;
    let term = key.get(9..10)?.chars().next()?;
    Some((code, term))
}

impl RawOffering {
    /// Lecture sections of this offering, named `"<code> <block>"`.
    /// Blocks with no scheduled meetings are left out.
    pub fn lecture_sections(&self, code: &str, buildings: &BuildingTable) -> Vec<Section> {
        self.meetings
            .iter()
            .filter(|(block, _)| block.starts_with("LEC"))
            .filter_map(|(block, raw)| {
                let id = format!("{code} {block}");
                let meetings: Vec<Meeting> = raw
                    .schedule
                    .iter()
                    .filter_map(|(_, m)| m.to_meeting(&id, buildings))
                    .collect();
                (!meetings.is_empty()).then(|| Section::new(id, meetings))
            })
            .collect()
    }
}

impl RawMeeting {
    /// Convert to a [`Meeting`], or `None` if it has no usable time or day.
    fn to_meeting(&self, section: &str, buildings: &BuildingTable) -> Option<Meeting> {
        // Unscheduled (e.g. asynchronous) meetings have no start time
        let start = self.meeting_start_time.as_deref()?;
        let end = self.meeting_end_time.as_deref()?;

        let start = parse_time(section, start)?;
        let end = parse_time(section, end)?;

        let day = match self.meeting_day.as_deref().map(Day::parse) {
            Some(Ok(day)) => day,
            Some(Err(e)) => {
                warn!(section, error = %e, "skipping meeting with unknown day");
                return None;
            }
            None => {
                warn!(section, "skipping meeting with no day");
                return None;
            }
        };

        let location = [&self.assigned_room1, &self.assigned_room2]
            .into_iter()
            .flatten()
            .find(|room| !room.trim().is_empty())
            .and_then(|room| buildings.address_for_room(room))
            .map(str::to_string);

        let meeting = Meeting::new(day, start, end);
        Some(match location {
            Some(address) => meeting.at(address),
            None => meeting,
        })
    }
}

fn parse_time(section: &str, text: &str) -> Option<TimeOfDay> {
    match TimeOfDay::parse_hhmm(text) {
        Ok(time) => Some(time),
        Err(e) => {
            warn!(section, time = text, error = %e, "skipping meeting with bad time");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buildings() -> BuildingTable {
        let mut table = BuildingTable::new();
        table.insert("BA", "40 St George St");
        table
    }

    #[test]
    fn offering_key_parts() {
        assert_eq!(split_offering_key("CSC111H1-S-20231"), Some(("CSC111", 'S')));
        assert_eq!(split_offering_key("MAT137Y1-Y-20229"), Some(("MAT137", 'Y')));
        assert_eq!(split_offering_key("CSC111H1"), None);
        assert_eq!(split_offering_key(""), None);
    }

    #[test]
    fn maps_keep_document_order() {
        let json = r#"{"Z": {"meetings": {}}, "A": {"meetings": {}}, "M": {}}"#;
        let raw: RawDataset = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = raw.offerings.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Z", "A", "M"]);
    }

    #[test]
    fn lecture_sections_only() {
        let json = r#"{
            "meetings": {
                "LEC-0101": {"schedule": {
                    "MO-1": {"meetingDay": "MO", "meetingStartTime": "09:00",
                             "meetingEndTime": "10:00", "assignedRoom1": "BA 1160"}
                }},
                "TUT-0101": {"schedule": {
                    "TU-1": {"meetingDay": "TU", "meetingStartTime": "11:00",
                             "meetingEndTime": "12:00"}
                }},
                "LEC-0201": {"schedule": {
                    "WE-1": {"meetingDay": "WE", "meetingStartTime": "14:00",
                             "meetingEndTime": "15:00", "assignedRoom1": null,
                             "assignedRoom2": "MP 102"}
                }}
            }
        }"#;
        let raw: RawOffering = serde_json::from_str(json).unwrap();

        let sections = raw.lecture_sections("CSC111", &buildings());
        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["CSC111 LEC-0101", "CSC111 LEC-0201"]);

        let first = &sections[0].meetings[0];
        assert_eq!(first.day, Day::Mon);
        assert_eq!(first.start, TimeOfDay::new(9, 0).unwrap());
        assert_eq!(first.location.as_deref(), Some("40 St George St"));

        // MP is not in the building table
        assert_eq!(sections[1].meetings[0].location, None);
    }

    #[test]
    fn unusable_meetings_are_skipped() {
        let json = r#"{
            "meetings": {
                "LEC-5101": {"schedule": {
                    "async": {"meetingDay": null, "meetingStartTime": null,
                              "meetingEndTime": null},
                    "weekend": {"meetingDay": "SA", "meetingStartTime": "10:00",
                                "meetingEndTime": "12:00"},
                    "ok": {"meetingDay": "FR", "meetingStartTime": "13:00",
                           "meetingEndTime": "14:00"}
                }},
                "LEC-9101": {"schedule": {
                    "async": {"meetingDay": null, "meetingStartTime": null,
                              "meetingEndTime": null}
                }}
            }
        }"#;
        let raw: RawOffering = serde_json::from_str(json).unwrap();

        let sections = raw.lecture_sections("ECO101", &buildings());
        // LEC-9101 has nothing scheduled
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "ECO101 LEC-5101");
        assert_eq!(sections[0].meetings.len(), 1);
        assert_eq!(sections[0].meetings[0].day, Day::Fri);
    }
}
