//! Google Maps Directions API client.
//!
//! Asks for a walking route departing now and reads the first leg's
//! duration.

use serde::Deserialize;

use super::error::TravelError;
use super::oracle::TravelTimeSource;

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GoogleMapsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    legs: Vec<RouteLeg>,
}

#[derive(Debug, Deserialize)]
struct RouteLeg {
    duration: TextValue,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    /// Seconds
    value: u64,
}

/// Client for the Google Maps Directions API.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleMapsClient {
    /// Create a new directions client.
    pub fn new(config: GoogleMapsConfig) -> Result<Self, TravelError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch the walking time between two addresses, departing now.
    pub async fn walking_minutes(&self, from: &str, to: &str) -> Result<u32, TravelError> {
        let departure = chrono::Utc::now().timestamp().to_string();

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", from),
                ("destination", to),
                ("mode", "walking"),
                ("departure_time", departure.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TravelError::Api {
                status: status.as_u16().to_string(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_directions(&body, from, to)
    }
}

impl TravelTimeSource for GoogleMapsClient {
    async fn fetch_minutes(&self, from: &str, to: &str) -> Result<u32, TravelError> {
        self.walking_minutes(from, to).await
    }
}

/// Extract whole walking minutes from a directions response body.
fn parse_directions(body: &str, from: &str, to: &str) -> Result<u32, TravelError> {
    let response: DirectionsResponse =
        serde_json::from_str(body).map_err(|e| TravelError::Json {
            message: e.to_string(),
        })?;

    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => {
            return Err(TravelError::NoRoute {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        _ => {
            return Err(TravelError::Api {
                status: response.status,
                message: response.error_message.unwrap_or_default(),
            });
        }
    }

    let seconds = response
        .routes
        .first()
        .and_then(|route| route.legs.first())
        .map(|leg| leg.duration.value)
        .ok_or_else(|| TravelError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })?;

    u32::try_from(seconds / 60).map_err(|_| TravelError::Json {
        message: format!("walking duration of {seconds} seconds is out of range"),
    })
}
