//! ID types for NHL teams and players.

use crate::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NHL team IDs.
///
/// Keeps team IDs from being mixed up with player IDs or other numeric
/// values. The API and the database both carry them as 32-bit integers.
///
/// # Examples
///
/// ```rust
/// use nhl_etl::TeamId;
///
/// let team_id = TeamId::new(22);
/// assert_eq!(team_id.as_i32(), 22);
/// assert_eq!(team_id.to_string(), "22");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i32);

impl TeamId {
    /// Create a new TeamId from an i32 value.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = EtlError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| EtlError::invalid("team id", s))
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i32);

impl PlayerId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = EtlError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| EtlError::invalid("player id", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_from_str() {
        let id: TeamId = "22".parse().unwrap();
        assert_eq!(id, TeamId::new(22));
        assert!("edm".parse::<TeamId>().is_err());
    }

    #[test]
    fn test_player_id_serde_is_transparent() {
        let id: PlayerId = serde_json::from_str("8478402").unwrap();
        assert_eq!(id.as_i32(), 8478402);
        assert_eq!(serde_json::to_string(&id).unwrap(), "8478402");
    }

    #[test]
    fn test_ids_order_numerically() {
        let mut ids = vec![PlayerId::new(30), PlayerId::new(4), PlayerId::new(17)];
        ids.sort();
        assert_eq!(ids, vec![PlayerId::new(4), PlayerId::new(17), PlayerId::new(30)]);
    }
}
