//! Askama templates for the web frontend.

use askama::Template;

use super::dto::{PlanResponse, SectionResult};
use super::grid::TimetableGrid;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the planning form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

/// Planned timetable page.
#[derive(Template)]
#[template(path = "timetable.html")]
pub struct TimetableTemplate {
    pub plan: PlanView,
    pub grid: TimetableGrid,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Summary of a plan for display.
#[derive(Debug, Clone)]
pub struct PlanView {
    pub term: String,
    pub window: String,
    pub excluded_days: String,
    pub score: i64,
    pub combinations_scored: usize,
    pub sections: Vec<SectionView>,
}

/// Chosen section, one line per meeting.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub id: String,
    pub meetings: Vec<String>,
}

impl PlanView {
    /// Create from an API response.
    pub fn from_response(response: &PlanResponse) -> Self {
        let excluded_days = if response.excluded_days.is_empty() {
            "none".to_string()
        } else {
            response
                .excluded_days
                .iter()
                .map(|d| d.name())
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            term: response.term.to_string(),
            window: response.window.clone(),
            excluded_days,
            score: response.score.total,
            combinations_scored: response.combinations_scored,
            sections: response.sections.iter().map(SectionView::from_result).collect(),
        }
    }
}

impl SectionView {
    fn from_result(section: &SectionResult) -> Self {
        let meetings = section
            .meetings
            .iter()
            .map(|m| {
                format!(
                    "{} {}-{} at {}",
                    m.day.name(),
                    m.start,
                    m.end,
                    m.location.as_deref().unwrap_or("an unknown location")
                )
            })
            .collect();

        Self {
            id: section.id.clone(),
            meetings,
        }
    }
}
