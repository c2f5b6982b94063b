//! Travel-time traits.
//!
//! Two layers: a fallible [`TravelTimeSource`] that talks to whatever
//! knows walking times, and an infallible [`TravelTimeOracle`] that the
//! scorer consumes. Failures are logged and replaced by
//! [`FALLBACK_MINUTES`] when going from one to the other.

use std::future::Future;

use tracing::warn;

use super::error::TravelError;

/// Minutes assumed when a walking time cannot be determined.
pub const FALLBACK_MINUTES: u32 = 10;

/// A fallible source of walking times, in whole minutes.
pub trait TravelTimeSource {
    fn fetch_minutes(
        &self,
        from: &str,
        to: &str,
    ) -> impl Future<Output = Result<u32, TravelError>> + Send;
}

/// Walking time between two addresses, in whole minutes.
///
/// Never fails: an unknown location or provider error yields
/// [`FALLBACK_MINUTES`].
pub trait TravelTimeOracle {
    fn travel_minutes(&self, from: &str, to: &str) -> impl Future<Output = u32> + Send;
}

/// Oracle that asks its source every time, with no memoization.
#[derive(Debug, Clone)]
pub struct FallbackOracle<S> {
    source: S,
}

impl<S> FallbackOracle<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: TravelTimeSource + Sync> TravelTimeOracle for FallbackOracle<S> {
    async fn travel_minutes(&self, from: &str, to: &str) -> u32 {
        match self.source.fetch_minutes(from, to).await {
            Ok(minutes) => minutes,
            Err(e) => {
                warn!(from, to, error = %e, "travel lookup failed, using fallback");
                FALLBACK_MINUTES
            }
        }
    }
}
