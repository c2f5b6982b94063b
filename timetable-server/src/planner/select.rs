//! Picking the best combination.

use tracing::{debug, info};

use crate::domain::Section;
use crate::travel::TravelTimeOracle;

use super::combination::{Combination, ScoreBreakdown};
use super::config::{PlanConfig, Preferences};
use super::tree::{CombinationTree, Path, TreeError};

/// Error from selecting a combination.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// No conflict-free combination covers every course
    #[error("no valid schedule: no conflict-free combination of {courses} courses")]
    NoValidSchedule { courses: usize },

    /// Too many courses to search
    #[error("too many courses: {requested} requested, at most {max} allowed")]
    TooManyCourses { requested: usize, max: usize },

    /// A path from the tree could not be walked
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// One planning request: courses in a fixed order, each with its candidates.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Courses that must appear in the timetable.
    pub required: Vec<Vec<Section>>,

    /// Courses the timetable may leave out.
    pub optional: Vec<Vec<Section>>,

    pub preferences: Preferences,
}

impl PlanRequest {
    /// Create a request with only required courses.
    pub fn new(required: Vec<Vec<Section>>, preferences: Preferences) -> Self {
        Self {
            required,
            optional: Vec::new(),
            preferences,
        }
    }

    /// Add courses that may be skipped.
    pub fn with_optional(mut self, optional: Vec<Vec<Section>>) -> Self {
        self.optional = optional;
        self
    }

    /// Total number of courses, required and optional.
    pub fn course_count(&self) -> usize {
        self.required.len() + self.optional.len()
    }
}

/// The winning combination.
#[derive(Debug, Clone)]
pub struct Selection {
    pub combination: Combination,
    pub path: Path,
    pub score: ScoreBreakdown,
    /// How many complete combinations were scored.
    pub paths_scored: usize,
}

/// Scores complete combinations and keeps the best.
pub struct Selector<'a, O: TravelTimeOracle> {
    oracle: &'a O,
    config: &'a PlanConfig,
}

impl<'a, O: TravelTimeOracle> Selector<'a, O> {
    /// Create a new selector.
    pub fn new(oracle: &'a O, config: &'a PlanConfig) -> Self {
        Self { oracle, config }
    }

    /// Best combination among the tree's paths of `course_count` choices.
    ///
    /// Paths are scored in enumeration order and an equal score never
    /// replaces the current best, so ties go to the earliest path.
    pub async fn best(
        &self,
        tree: &CombinationTree,
        course_count: usize,
        preferences: &Preferences,
    ) -> Result<Selection, SelectError> {
        let paths = tree.valid_paths(course_count);
        debug!(course_count, paths = paths.len(), "scoring combinations");

        let mut best: Option<Selection> = None;
        let paths_scored = paths.len();

        for path in paths {
            let combination = tree.materialize(&path)?;
            let score = combination
                .score_breakdown(preferences, &self.config.scoring, self.oracle)
                .await;

            let improves = best
                .as_ref()
                .is_none_or(|current| score.total > current.score.total);
            if improves {
                best = Some(Selection {
                    combination,
                    path,
                    score,
                    paths_scored,
                });
            }
        }

        best.ok_or(SelectError::NoValidSchedule {
            courses: course_count,
        })
    }

    /// Build the tree for a request and pick its best combination.
    ///
    /// Required courses are folded in first, in order, then optional ones.
    pub async fn plan(&self, request: &PlanRequest) -> Result<Selection, SelectError> {
        let course_count = request.course_count();
        if course_count > self.config.max_courses {
            return Err(SelectError::TooManyCourses {
                requested: course_count,
                max: self.config.max_courses,
            });
        }

        let mut tree = CombinationTree::new();
        for candidates in &request.required {
            tree.add_course(candidates);
        }
        for candidates in &request.optional {
            tree.add_optional_course(candidates);
        }

        let selection = self.best(&tree, course_count, &request.preferences).await?;
        info!(
            courses = course_count,
            nodes = tree.node_count(),
            combinations = selection.paths_scored,
            score = selection.score.total,
            "timetable planned"
        );
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Day, HourWindow, Meeting, TimeOfDay};
    use crate::planner::ChoiceId;
    use crate::travel::{FallbackOracle, TravelTable};

    fn m(day: Day, start: &str, end: &str) -> Meeting {
        Meeting::new(
            day,
            TimeOfDay::parse_hhmm(start).unwrap(),
            TimeOfDay::parse_hhmm(end).unwrap(),
        )
    }

    fn prefs() -> Preferences {
        Preferences::new(HourWindow::new(9, 17).unwrap())
    }

    fn oracle() -> FallbackOracle<TravelTable> {
        FallbackOracle::new(TravelTable::new().with("Bahen", "Sidney Smith", 5))
    }

    #[tokio::test]
    async fn two_course_scenario() {
        let config = PlanConfig::default();
        let oracle = oracle();
        let selector = Selector::new(&oracle, &config);

        let mut tree = CombinationTree::new();
        tree.add_course(&[Section::new("CSC111 LEC-0101", vec![m(Day::Mon, "09:00", "10:00")])]);
        tree.add_course(&[Section::new("MAT137 LEC-0101", vec![m(Day::Mon, "11:00", "12:00")])]);

        let selection = selector.best(&tree, 2, &prefs()).await.unwrap();

        assert_eq!(selection.score.total, 100);
        assert_eq!(
            selection.combination.section_ids(),
            vec!["CSC111 LEC-0101", "MAT137 LEC-0101"]
        );
        assert_eq!(selection.paths_scored, 1);
    }

    #[tokio::test]
    async fn picks_highest_score() {
        let config = PlanConfig::default();
        let oracle = oracle();
        let selector = Selector::new(&oracle, &config);

        let mut tree = CombinationTree::new();
        tree.add_course(&[Section::new(
            "A",
            vec![m(Day::Mon, "09:00", "10:00").at("Bahen")],
        )]);
        tree.add_course(&[
            // Early, no adjacency: 100 - 14
            Section::new("B-early", vec![m(Day::Tue, "07:00", "08:00")]),
            // Back-to-back with a short walk: 100 + 20
            Section::new("B-next", vec![m(Day::Mon, "10:00", "11:00").at("Sidney Smith")]),
        ]);

        let selection = selector.best(&tree, 2, &prefs()).await.unwrap();

        assert_eq!(selection.score.total, 120);
        assert_eq!(
            selection.path,
            vec![ChoiceId::section("A"), ChoiceId::section("B-next")]
        );
        assert_eq!(selection.paths_scored, 2);
    }

    #[tokio::test]
    async fn ties_go_to_first_enumerated() {
        let config = PlanConfig::default();
        let oracle = oracle();
        let selector = Selector::new(&oracle, &config);

        let mut tree = CombinationTree::new();
        tree.add_course(&[
            Section::new("A1", vec![m(Day::Mon, "09:00", "10:00")]),
            Section::new("A2", vec![m(Day::Tue, "09:00", "10:00")]),
            Section::new("A3", vec![m(Day::Wed, "09:00", "10:00")]),
        ]);

        let selection = selector.best(&tree, 1, &prefs()).await.unwrap();

        assert_eq!(selection.score.total, 100);
        assert_eq!(selection.path, vec![ChoiceId::section("A1")]);
    }

    #[tokio::test]
    async fn no_complete_path_is_no_valid_schedule() {
        let config = PlanConfig::default();
        let oracle = oracle();
        let selector = Selector::new(&oracle, &config);

        let mut tree = CombinationTree::new();
        tree.add_course(&[Section::new("A", vec![m(Day::Mon, "09:00", "10:00")])]);
        tree.add_course(&[Section::new("B", vec![m(Day::Mon, "09:30", "10:30")])]);

        let err = selector.best(&tree, 2, &prefs()).await.unwrap_err();
        assert_eq!(err, SelectError::NoValidSchedule { courses: 2 });

        // Asking deeper than the tree goes is the same condition
        let err = selector.best(&tree, 5, &prefs()).await.unwrap_err();
        assert_eq!(err, SelectError::NoValidSchedule { courses: 5 });
    }

    #[tokio::test]
    async fn plan_builds_tree_in_order() {
        let config = PlanConfig::default();
        let oracle = oracle();
        let selector = Selector::new(&oracle, &config);

        let request = PlanRequest::new(
            vec![
                vec![
                    Section::new("A1", vec![m(Day::Fri, "09:00", "10:00")]),
                    Section::new("A2", vec![m(Day::Mon, "09:00", "10:00")]),
                ],
                vec![Section::new("B1", vec![m(Day::Tue, "12:00", "13:00")])],
            ],
            prefs().excluding([Day::Fri]),
        );

        let selection = selector.plan(&request).await.unwrap();

        assert_eq!(selection.combination.section_ids(), vec!["A2", "B1"]);
        assert_eq!(selection.score.total, 100);
    }

    #[tokio::test]
    async fn plan_with_optional_course_may_skip_it() {
        let config = PlanConfig::default();
        let oracle = oracle();
        let selector = Selector::new(&oracle, &config);

        let request = PlanRequest::new(
            vec![vec![Section::new("A", vec![m(Day::Mon, "09:00", "10:00")])]],
            prefs(),
        )
        .with_optional(vec![vec![Section::new(
            "LATE",
            vec![m(Day::Thu, "19:00", "21:00")],
        )]]);

        let selection = selector.plan(&request).await.unwrap();

        // Taking LATE costs 28 points, so skipping wins
        assert_eq!(selection.path, vec![ChoiceId::section("A"), ChoiceId::Skip]);
        assert_eq!(selection.combination.section_ids(), vec!["A"]);
        assert_eq!(selection.paths_scored, 2);
    }

    #[tokio::test]
    async fn plan_refuses_too_many_courses() {
        let config = PlanConfig {
            max_courses: 1,
            ..PlanConfig::default()
        };
        let oracle = oracle();
        let selector = Selector::new(&oracle, &config);

        let request = PlanRequest::new(vec![vec![], vec![]], prefs());
        let err = selector.plan(&request).await.unwrap_err();

        assert_eq!(
            err,
            SelectError::TooManyCourses {
                requested: 2,
                max: 1
            }
        );
        assert_eq!(
            err.to_string(),
            "too many courses: 2 requested, at most 1 allowed"
        );
    }
}
