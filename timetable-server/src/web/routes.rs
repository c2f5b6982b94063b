//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tracing::{debug, error, warn};

use crate::catalogue::{CatalogueError, Term};
use crate::domain::{Day, HourWindow, Section};
use crate::planner::{Combination, PlanRequest, Preferences, SelectError, Selector};

use super::dto::*;
use super::grid::TimetableGrid;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/timetable/plan", get(plan_timetable))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the planning form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan a timetable for the requested courses.
async fn plan_timetable(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<PlanQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let html = accepts_html(&headers);

    let planned = match query {
        Ok(Query(query)) => plan(&state, &query).await,
        Err(rejection) => Err(AppError::from(rejection)),
    };
    let (combination, response) = match planned {
        Ok(planned) => planned,
        Err(e) if html => return Ok(e.into_html_response()),
        Err(e) => return Err(e),
    };

    // Return HTML or JSON based on Accept header
    if html {
        let template = TimetableTemplate {
            plan: PlanView::from_response(&response),
            grid: TimetableGrid::from_combination(&combination),
        };
        let page = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(page).into_response())
    } else {
        Ok(Json(response).into_response())
    }
}

/// Validate the query, look up candidates and run the planner.
async fn plan(
    state: &AppState,
    query: &PlanQuery,
) -> Result<(Combination, PlanResponse), AppError> {
    let term = Term::parse(query.term())?;

    let window = HourWindow::new(query.start_hour(), query.end_hour()).map_err(|e| {
        AppError::BadRequest {
            message: e.to_string(),
        }
    })?;

    let excluded = query
        .excluded_days()
        .iter()
        .map(|d| Day::parse(d))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let required = query.required_courses();
    if required.is_empty() {
        return Err(AppError::BadRequest {
            message: "at least one course is required".to_string(),
        });
    }

    let candidates = |codes: &[String]| -> Result<Vec<Vec<Section>>, CatalogueError> {
        codes
            .iter()
            .map(|code| state.catalogue.candidates(code, term))
            .collect()
    };

    let preferences = Preferences::new(window).excluding(excluded);
    let request = PlanRequest::new(candidates(&required)?, preferences)
        .with_optional(candidates(&query.optional_courses())?);

    let selector = Selector::new(state.oracle.as_ref(), &state.config);
    let selection = selector.plan(&request).await?;
    debug!(
        cached_walks = state.oracle.cache_entry_count(),
        "walking-time cache after planning"
    );

    let response = PlanResponse::from_selection(
        &selection,
        term,
        window,
        request.preferences.excluded_days.iter().copied().collect(),
    );
    Ok((selection.combination, response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<CatalogueError> for AppError {
    fn from(e: CatalogueError) -> Self {
        match e {
            CatalogueError::CourseNotOffered { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            CatalogueError::InvalidTerm(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<SelectError> for AppError {
    fn from(e: SelectError) -> Self {
        match e {
            SelectError::NoValidSchedule { .. } => AppError::Unprocessable {
                message: e.to_string(),
            },
            SelectError::TooManyCourses { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            SelectError::Tree(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.as_str()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.as_str()),
            AppError::Unprocessable { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.as_str())
            }
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.as_str())
            }
        }
    }

    fn log(&self) {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(%status, reason = message, "request failed");
        } else {
            warn!(%status, reason = message, "request rejected");
        }
    }

    /// Render as an error page for browsers.
    fn into_html_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();

        let page = ErrorTemplate {
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.to_string(),
        }
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e));

        (status, Html(page)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}
