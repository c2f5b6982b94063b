//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATASET: &str = "all_data.json";
pub const DEFAULT_BUILDINGS: &str = "building_names_and_addresses.csv";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error reading server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {value:?} ({message})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub message: String,
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Google Maps API key. Without one every walk uses the fallback time.
    pub google_api_key: Option<String>,

    /// Course dataset JSON
    pub dataset_path: PathBuf,

    /// Building code CSV
    pub buildings_path: PathBuf,

    /// Address to listen on
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `GOOGLE_MAPS_API_KEY`
    /// - `TIMETABLE_DATASET` (default `all_data.json`)
    /// - `TIMETABLE_BUILDINGS` (default `building_names_and_addresses.csv`)
    /// - `TIMETABLE_ADDR` (default `127.0.0.1:3000`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let addr_text = get("TIMETABLE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_text.parse().map_err(|e: std::net::AddrParseError| ConfigError {
            var: "TIMETABLE_ADDR",
            value: addr_text.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            google_api_key: get("GOOGLE_MAPS_API_KEY"),
            dataset_path: get("TIMETABLE_DATASET")
                .unwrap_or_else(|| DEFAULT_DATASET.to_string())
                .into(),
            buildings_path: get("TIMETABLE_BUILDINGS")
                .unwrap_or_else(|| DEFAULT_BUILDINGS.to_string())
                .into(),
            addr,
        })
    }
}
