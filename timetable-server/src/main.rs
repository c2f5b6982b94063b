use timetable_server::catalogue::Catalogue;
use timetable_server::config::ServerConfig;
use timetable_server::planner::PlanConfig;
use timetable_server::travel::{CacheConfig, CachedOracle, WalkingTimes};
use timetable_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("timetable_server=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Load the catalogue (fail fast if unavailable)
    let catalogue = Catalogue::load(&config.dataset_path, &config.buildings_path)
        .expect("Failed to load course catalogue");

    // Walking times: Google Maps when a key is set, behind a cache
    let source = WalkingTimes::from_api_key(config.google_api_key.clone())
        .expect("Failed to create Google Maps client");
    let oracle = CachedOracle::new(source, &CacheConfig::default());

    let state = AppState::new(catalogue, oracle, PlanConfig::default());
    let app = create_router(state);

    let addr = config.addr;
    info!("Timetable planner listening on http://{addr}");
    info!("  GET  /health          - Health check");
    info!("  GET  /                - Planning form");
    info!("  GET  /timetable/plan  - Plan a timetable");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
