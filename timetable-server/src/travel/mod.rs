//! Walking times between lecture buildings.
//!
//! The scorer rewards back-to-back lectures that are a short walk apart and
//! penalises long walks. Walking times come from a directions service,
//! memoized across requests, and never fail from the scorer's point of
//! view.

mod cache;
mod error;
mod google;
mod oracle;
mod source;
mod table;

pub use cache::{CacheConfig, CachedOracle};
pub use error::TravelError;
pub use google::{GoogleMapsClient, GoogleMapsConfig};
pub use oracle::{FALLBACK_MINUTES, FallbackOracle, TravelTimeOracle, TravelTimeSource};
pub use source::WalkingTimes;
pub use table::TravelTable;
