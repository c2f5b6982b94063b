//! Choice of walking-time source for the server.

use tracing::warn;

use super::error::TravelError;
use super::google::{GoogleMapsClient, GoogleMapsConfig};
use super::oracle::TravelTimeSource;
use super::table::TravelTable;

/// Where the server gets walking times from.
///
/// Without an API key there is no point asking the directions service, so
/// lookups are answered from a local table instead. Unknown pairs fail
/// locally and the oracle falls back.
pub enum WalkingTimes {
    Google(GoogleMapsClient),
    Table(TravelTable),
}

impl WalkingTimes {
    /// Pick a source for the configured API key.
    pub fn from_api_key(api_key: Option<String>) -> Result<Self, TravelError> {
        match api_key {
            Some(key) => Ok(Self::Google(GoogleMapsClient::new(GoogleMapsConfig::new(key))?)),
            None => {
                warn!("GOOGLE_MAPS_API_KEY not set; every walk will use the fallback time");
                Ok(Self::offline(TravelTable::new()))
            }
        }
    }

    /// Answer lookups from a fixed table only.
    pub fn offline(table: TravelTable) -> Self {
        Self::Table(table)
    }

    /// Whether lookups may reach the directions service.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Google(_))
    }
}

impl TravelTimeSource for WalkingTimes {
    async fn fetch_minutes(&self, from: &str, to: &str) -> Result<u32, TravelError> {
        match self {
            Self::Google(client) => client.fetch_minutes(from, to).await,
            Self::Table(table) => table.fetch_minutes(from, to).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::travel::{CacheConfig, CachedOracle, FALLBACK_MINUTES, TravelTimeOracle};

    const BAHEN: &str = "40 St George St, Toronto";
    const SIDNEY_SMITH: &str = "100 St George St, Toronto";

    #[test]
    fn key_selects_directions_service() {
        let source = WalkingTimes::from_api_key(Some("secret".into())).unwrap();
        assert!(source.is_remote());
    }

    #[tokio::test]
    async fn no_key_stays_local() {
        let source = WalkingTimes::from_api_key(None).unwrap();
        assert!(!source.is_remote());
        assert!(matches!(&source, WalkingTimes::Table(table) if table.is_empty()));

        let oracle = CachedOracle::new(source, &CacheConfig::default());
        for _ in 0..5 {
            assert_eq!(
                oracle.travel_minutes(BAHEN, SIDNEY_SMITH).await,
                FALLBACK_MINUTES
            );
        }
        assert_eq!(oracle.travel_minutes(BAHEN, BAHEN).await, 0);
        assert!(!oracle.source().is_remote());
    }

    #[tokio::test]
    async fn offline_table_answers_known_walks() {
        let source = WalkingTimes::offline(TravelTable::new().with(BAHEN, SIDNEY_SMITH, 4));
        assert_eq!(source.fetch_minutes(SIDNEY_SMITH, BAHEN).await.unwrap(), 4);
        assert!(matches!(
            source.fetch_minutes(BAHEN, "Robarts").await,
            Err(TravelError::NoRoute { .. })
        ));
    }
}
