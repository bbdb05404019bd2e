//! Data models for the storage layer
//!
//! One struct per table; field names match the column names.

use crate::cli::types::{PlayerId, Season, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Team information stored in the team table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub arena_name: String,
    pub arena_city: String,
    pub abbr: String,
    pub location: String,
    pub initial_year: String,
    pub division_name: String,
    pub conference_name: String,
    pub active: bool,
}

/// Player biography stored in the player table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub first_name: String,
    pub last_name: String,
    pub number: Option<i32>,
    pub birth_date: NaiveDate,
    pub birth_city: String,
    pub birth_country: String,
    pub nationality: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub handedness: String,
    pub captain: Option<bool>,
    pub alternate_captain: Option<bool>,
    pub position: String,
    pub active: bool,
    pub rookie: bool,
}

/// One year-by-year split for a player.
///
/// A player traded mid-season or playing in several leagues has more than
/// one split per season; `sequence` tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub player_id: PlayerId,
    pub season: Season,
    pub sequence: i32,
    pub league_name: String,
    /// Not a foreign key: junior and international teams show up here.
    pub team_id: Option<TeamId>,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    pub pim: Option<i32>,
    pub shots: Option<i32>,
    pub games: Option<i32>,
    pub pp_goals: Option<i32>,
    pub pp_points: Option<i32>,
    pub pp_toi_seconds: Option<i32>,
    pub gwg: Option<i32>,
    pub ot_goals: Option<i32>,
    pub sh_goals: Option<i32>,
    pub sh_points: Option<i32>,
    pub sh_toi_seconds: Option<i32>,
    pub plus_minus: Option<i32>,
    pub shifts: Option<i32>,
    pub blocked: Option<i32>,
}

/// Stable key for a stats row.
pub type SeasonStatsKey = (PlayerId, Season, i32);

impl SeasonStats {
    pub fn key(&self) -> SeasonStatsKey {
        (self.player_id, self.season, self.sequence)
    }
}
