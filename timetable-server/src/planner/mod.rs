//! Timetable planner.
//!
//! This module implements the core planning algorithm that answers:
//! "Given these courses and my preferences, which sections should I take?"
//!
//! Candidate sections are folded into a [`CombinationTree`] one course at a
//! time, pruning any section that clashes with one already chosen. Every
//! complete path through the tree is then scored and the best one wins.

mod combination;
mod config;
mod select;
mod tree;

pub use combination::{Combination, ScoreBreakdown};
pub use config::{PlanConfig, Preferences, ScoringConfig};
pub use select::{PlanRequest, SelectError, Selection, Selector};
pub use tree::{Choice, ChoiceId, CombinationTree, Path, TreeError};
