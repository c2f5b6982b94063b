//! Web layer for the timetable planner.
//!
//! Serves the planning form and plans timetables as HTML or JSON.

mod dto;
mod grid;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use grid::{GridRow, TimetableGrid};
pub use routes::{AppError, create_router};
pub use state::{AppState, ServerOracle};
