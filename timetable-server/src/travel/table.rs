//! Static walking-time table.
//!
//! A fixed set of known walks between addresses. Useful offline, when no
//! directions API key is configured, and in tests.

use std::collections::HashMap;

use super::error::TravelError;
use super::oracle::TravelTimeSource;

/// A collection of known walking times between addresses.
///
/// Walks are symmetric: A to B takes as long as B to A.
#[derive(Debug, Clone, Default)]
pub struct TravelTable {
    /// Map from (from, to) to walk duration in minutes.
    /// Stored in both directions for O(1) lookup.
    walks: HashMap<(String, String), u32>,
}

impl TravelTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a walk between two addresses.
    ///
    /// The walk is stored symmetrically.
    pub fn add(&mut self, from: &str, to: &str, minutes: u32) {
        self.walks
            .insert((from.to_string(), to.to_string()), minutes);
        self.walks
            .insert((to.to_string(), from.to_string()), minutes);
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, from: &str, to: &str, minutes: u32) -> Self {
        self.add(from, to, minutes);
        self
    }

    /// Walking minutes between two addresses, if known.
    ///
    /// An address is always zero minutes from itself.
    pub fn get(&self, from: &str, to: &str) -> Option<u32> {
        if from == to {
            return Some(0);
        }
        self.walks
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }

    /// Returns the number of known walks (counting A→B and B→A as one).
    pub fn len(&self) -> usize {
        self.walks.len() / 2
    }

    /// Returns true if no walks are known.
    pub fn is_empty(&self) -> bool {
        self.walks.is_empty()
    }
}

impl TravelTimeSource for TravelTable {
    async fn fetch_minutes(&self, from: &str, to: &str) -> Result<u32, TravelError> {
        self.get(from, to).ok_or_else(|| TravelError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
