//! Season identifiers as the NHL API spells them.

use crate::error::{EtlError, Result};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// An NHL season in the API's eight digit form, e.g. `20222023`.
///
/// The two halves must be consecutive years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Season {
    start_year: u16,
}

impl Season {
    /// Build the season that starts in `start_year`.
    pub fn new(start_year: u16) -> Self {
        Self { start_year }
    }

    pub fn start_year(&self) -> u16 {
        self.start_year
    }

    pub fn end_year(&self) -> u16 {
        self.start_year + 1
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:04}", self.start_year, self.end_year())
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.to_string()
    }
}

impl FromStr for Season {
    type Err = EtlError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || EtlError::invalid("season", s);

        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let start: u16 = s[..4].parse().map_err(|_| invalid())?;
        let end: u16 = s[4..].parse().map_err(|_| invalid())?;
        if start.checked_add(1) != Some(end) {
            return Err(invalid());
        }
        Ok(Self::new(start))
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_season() {
        let season: Season = "20222023".parse().unwrap();
        assert_eq!(season.start_year(), 2022);
        assert_eq!(season.end_year(), 2023);
        assert_eq!(season.to_string(), "20222023");
    }

    #[test]
    fn test_parse_season_rejects_non_consecutive_years() {
        assert!("20222024".parse::<Season>().is_err());
        assert!("2022".parse::<Season>().is_err());
        assert!("2022-023".parse::<Season>().is_err());
    }

    #[test]
    fn test_season_serde_uses_api_string() {
        let season: Season = serde_json::from_str("\"19992000\"").unwrap();
        assert_eq!(season, Season::new(1999));
        assert_eq!(serde_json::to_string(&season).unwrap(), "\"19992000\"");
    }
}
