//! Application state for the web layer.

use std::sync::Arc;

use crate::catalogue::Catalogue;
use crate::planner::PlanConfig;
use crate::travel::{CachedOracle, WalkingTimes};

/// Walking-time oracle used by the server: Google Maps or a local table, behind a cache.
pub type ServerOracle = CachedOracle<WalkingTimes>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Lecture sections by course and term
    pub catalogue: Arc<Catalogue>,

    /// Cached walking-time lookups
    pub oracle: Arc<ServerOracle>,

    /// Planner configuration
    pub config: Arc<PlanConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalogue: Catalogue, oracle: ServerOracle, config: PlanConfig) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            oracle: Arc::new(oracle),
            config: Arc::new(config),
        }
    }
}
