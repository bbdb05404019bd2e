//! Pipeline phase selection.

use crate::error::EtlError;
use std::fmt;
use std::str::FromStr;

/// Which part of the extract-and-load pipeline to run.
///
/// `All` runs teams, then players, then stats. The single-phase variants
/// exist so one table can be refreshed on its own; they still rely on the
/// parent tables being populated by an earlier run.
///
/// # Examples
///
/// ```rust
/// use nhl_etl::Phase;
///
/// let phase: Phase = "players".parse().unwrap();
/// assert_eq!(phase, Phase::Players);
/// assert!(Phase::All.includes(Phase::Stats));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    All,
    Teams,
    Players,
    Stats,
}

impl Phase {
    /// Whether running `self` runs the single phase `other`.
    pub fn includes(&self, other: Phase) -> bool {
        *self == Phase::All || *self == other
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::All => "all",
            Phase::Teams => "teams",
            Phase::Players => "players",
            Phase::Stats => "stats",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Phase {
    type Err = EtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Phase::All),
            "teams" | "team" => Ok(Phase::Teams),
            "players" | "player" => Ok(Phase::Players),
            "stats" | "stat" => Ok(Phase::Stats),
            _ => Err(EtlError::invalid("phase", s)),
        }
    }
}
