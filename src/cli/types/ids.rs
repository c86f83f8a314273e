//! ID types for league records.

use crate::error::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season IDs.
///
/// Season rows are keyed by opaque string IDs (UUIDs in practice). Wrapping
/// them keeps season IDs from being mixed up with team or player IDs.
///
/// # Examples
///
/// ```rust
/// use dynasty_ffl::SeasonId;
///
/// let season_id = SeasonId::new("8c1f6f0e");
/// assert_eq!(season_id.as_str(), "8c1f6f0e");
/// assert_eq!(season_id.to_string(), "8c1f6f0e");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonId(pub String);

impl SeasonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

impl From<&str> for SeasonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
