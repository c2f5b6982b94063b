//! Planner configuration and user preferences.

use std::collections::BTreeSet;

use crate::domain::{Day, HourWindow};

/// Weights of the timetable scoring model.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Score every combination starts from.
    pub base: i64,

    /// Added for a back-to-back pair when either room is unknown.
    pub unknown_location_bonus: i64,

    /// Added for a back-to-back pair that is a short walk apart.
    pub short_walk_bonus: i64,

    /// Longest walk (minutes) still counted as short.
    /// Longer walks subtract their length in minutes.
    pub comfortable_walk_mins: u32,

    /// Subtracted per meeting on an excluded day.
    pub excluded_day_penalty: i64,

    /// Subtracted per hour a meeting starts before or ends after the
    /// preferred window.
    pub outside_window_hour_penalty: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base: 100,
            unknown_location_bonus: 10,
            short_walk_bonus: 20,
            comfortable_walk_mins: 10,
            excluded_day_penalty: 20,
            outside_window_hour_penalty: 7,
        }
    }
}

/// Configuration for a planning run.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Scoring weights.
    pub scoring: ScoringConfig,

    /// Maximum number of courses (required plus optional) in one request.
    /// The search is exponential in this, so requests above it are refused.
    pub max_courses: usize,
}

impl PlanConfig {
    /// Create a new configuration.
    pub fn new(scoring: ScoringConfig, max_courses: usize) -> Self {
        Self {
            scoring,
            max_courses,
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            max_courses: 7,
        }
    }
}

/// What the student wants from a timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Days the student would rather not be on campus.
    pub excluded_days: BTreeSet<Day>,

    /// Hours the student is happy to be in lectures.
    pub window: HourWindow,
}

impl Preferences {
    /// Preferences with no excluded days.
    pub fn new(window: HourWindow) -> Self {
        Self {
            excluded_days: BTreeSet::new(),
            window,
        }
    }

    /// Add excluded days.
    pub fn excluding(mut self, days: impl IntoIterator<Item = Day>) -> Self {
        self.excluded_days.extend(days);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scoring() {
        let config = ScoringConfig::default();

        assert_eq!(config.base, 100);
        assert_eq!(config.unknown_location_bonus, 10);
        assert_eq!(config.short_walk_bonus, 20);
        assert_eq!(config.comfortable_walk_mins, 10);
        assert_eq!(config.excluded_day_penalty, 20);
        assert_eq!(config.outside_window_hour_penalty, 7);
    }

    #[test]
    fn default_plan_config() {
        let config = PlanConfig::default();
        assert_eq!(config.max_courses, 7);
        assert_eq!(config.scoring.base, 100);
    }

    #[test]
    fn custom_plan_config() {
        let scoring = ScoringConfig {
            base: 50,
            ..ScoringConfig::default()
        };
        let config = PlanConfig::new(scoring, 3);
        assert_eq!(config.max_courses, 3);
        assert_eq!(config.scoring.base, 50);
    }

    #[test]
    fn preferences_builder() {
        let prefs = Preferences::new(HourWindow::new(9, 17).unwrap())
            .excluding([Day::Fri, Day::Mon, Day::Fri]);

        assert_eq!(prefs.window.start_hour(), 9);
        assert_eq!(
            prefs.excluded_days.iter().copied().collect::<Vec<_>>(),
            vec![Day::Mon, Day::Fri]
        );
    }
}
