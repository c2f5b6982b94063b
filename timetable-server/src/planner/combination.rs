//! Materialized combinations and their scores.
//!
//! Scoring starts from a base and adjusts for:
//! 1. Back-to-back meetings: rewarded when the walk between them is short
//!    (or unknown), penalised by the walk length otherwise
//! 2. Meetings on days the student wants free
//! 3. Meetings starting before or ending after the preferred hours
//!
//! Each adjacent pair is adjusted once. The day and hour penalties apply
//! once per distinct meeting, independent of adjacency.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::domain::{Meeting, Section};
use crate::travel::TravelTimeOracle;

use super::config::{Preferences, ScoringConfig};

/// A chosen set of sections, copied out of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination {
    /// Section id to its distinct meetings.
    sections: BTreeMap<String, BTreeSet<Meeting>>,
}

/// How a score was arrived at. `total` is the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub total: i64,
    /// Net adjustment from back-to-back pairs.
    pub travel: i64,
    /// Number of back-to-back pairs seen.
    pub adjacent_pairs: usize,
    /// Total excluded-day penalty (positive number, subtracted).
    pub excluded_days: i64,
    /// Total outside-window penalty (positive number, subtracted).
    pub outside_window: i64,
}

impl Combination {
    /// Build a combination from sections. Sections sharing an id merge.
    pub fn from_sections<'a>(sections: impl IntoIterator<Item = &'a Section>) -> Self {
        let mut map: BTreeMap<String, BTreeSet<Meeting>> = BTreeMap::new();
        for section in sections {
            map.entry(section.id.clone())
                .or_default()
                .extend(section.meetings.iter().cloned());
        }
        Self { sections: map }
    }

    /// Ids of the chosen sections, sorted.
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Chosen sections with their meetings, sorted by id.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &BTreeSet<Meeting>)> {
        self.sections.iter().map(|(id, m)| (id.as_str(), m))
    }

    /// Every distinct meeting across all sections.
    pub fn meetings(&self) -> BTreeSet<Meeting> {
        self.sections.values().flatten().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Score this combination. Higher is better; may be negative.
    pub async fn score<O: TravelTimeOracle>(
        &self,
        preferences: &Preferences,
        config: &ScoringConfig,
        oracle: &O,
    ) -> i64 {
        self.score_breakdown(preferences, config, oracle).await.total
    }

    /// Score this combination, keeping the contribution of each factor.
    pub async fn score_breakdown<O: TravelTimeOracle>(
        &self,
        preferences: &Preferences,
        config: &ScoringConfig,
        oracle: &O,
    ) -> ScoreBreakdown {
        let meetings = self.meetings();
        let meetings: Vec<&Meeting> = meetings.iter().collect();
        let mut breakdown = ScoreBreakdown::default();

        for (i, a) in meetings.iter().enumerate() {
            for b in &meetings[i + 1..] {
                if a.adjacent(b) {
                    breakdown.adjacent_pairs += 1;
                    breakdown.travel += travel_adjustment(a, b, config, oracle).await;
                }
            }
        }

        let window = preferences.window;
        for meeting in &meetings {
            if preferences.excluded_days.contains(&meeting.day) {
                breakdown.excluded_days += config.excluded_day_penalty;
            }

            let start = meeting.start.hour();
            if start < window.start_hour() {
                breakdown.outside_window +=
                    config.outside_window_hour_penalty * i64::from(window.start_hour() - start);
            }

            let end = meeting.end.hour();
            if end > window.end_hour() {
                breakdown.outside_window +=
                    config.outside_window_hour_penalty * i64::from(end - window.end_hour());
            }
        }

        breakdown.total = config.base + breakdown.travel
            - breakdown.excluded_days
            - breakdown.outside_window;
        breakdown
    }
}

/// Score adjustment for one back-to-back pair.
async fn travel_adjustment<O: TravelTimeOracle>(
    a: &Meeting,
    b: &Meeting,
    config: &ScoringConfig,
    oracle: &O,
) -> i64 {
    let (Some(from), Some(to)) = (a.location.as_deref(), b.location.as_deref()) else {
        return config.unknown_location_bonus;
    };

    let minutes = oracle.travel_minutes(from, to).await;
    trace!(from, to, minutes, "back-to-back walk");

    if minutes > config.comfortable_walk_mins {
        -i64::from(minutes)
    } else {
        config.short_walk_bonus
    }
}
