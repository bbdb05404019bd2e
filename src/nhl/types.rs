//! Raw response shapes of the NHL stats API.
//!
//! These mirror the provider's JSON and nothing else. Required fields are
//! plain types so a missing key fails deserialization; fields the API omits
//! for some players are `Option`. Conversion into table rows lives in
//! [`super::convert`].

use crate::cli::types::Season;
use chrono::NaiveDate;
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;


/// `primaryNumber` comes back as a string ("97") but older payloads use a
/// bare number.
fn de_opt_i32_from_str_or_num<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("number out of range: {n}"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("not an integer: {s:?}"))),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// `{ "name": ... }` objects: division, conference, league.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Venue {
    pub name: String,
    pub city: String,
}

/// Envelope for `GET /teams`
#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<ApiTeam>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiTeam {
    pub id: i32,
    pub name: String,
    pub venue: Venue,
    pub abbreviation: String,
    #[serde(rename = "locationName")]
    pub location_name: String,
    #[serde(rename = "firstYearOfPlay")]
    pub first_year_of_play: String,
    pub division: Named,
    pub conference: Named,
    pub active: bool,
}

/// Envelope for `GET /teams/{id}/roster`
#[derive(Debug, Deserialize)]
pub struct RosterResponse {
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterEntry {
    pub person: PersonRef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersonRef {
    pub id: i32,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
}

/// Envelope for `GET /people/{id}`
#[derive(Debug, Deserialize)]
pub struct PeopleResponse {
    pub people: Vec<ApiPerson>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PositionRef {
    pub code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiPerson {
    pub id: i32,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(
        rename = "primaryNumber",
        deserialize_with = "de_opt_i32_from_str_or_num",
        default
    )]
    pub primary_number: Option<i32>,
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
    #[serde(rename = "birthCity")]
    pub birth_city: String,
    #[serde(rename = "birthCountry")]
    pub birth_country: String,
    pub nationality: String,
    /// Feet and inches, e.g. `6' 2"`
    pub height: String,
    /// Pounds
    pub weight: f64,
    #[serde(rename = "shootsCatches")]
    pub shoots_catches: String,
    #[serde(rename = "primaryPosition")]
    pub primary_position: PositionRef,
    pub rookie: bool,
    pub active: bool,
    #[serde(default)]
    pub captain: Option<bool>,
    #[serde(rename = "alternateCaptain", default)]
    pub alternate_captain: Option<bool>,
}

/// Envelope for `GET /people/{id}/stats?stats=yearByYear`
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatGroup {
    pub splits: Vec<Split>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Split {
    pub season: Season,
    #[serde(rename = "sequenceNumber", default)]
    pub sequence_number: Option<i32>,
    pub league: Named,
    #[serde(default)]
    pub team: Option<TeamRef>,
    pub stat: SplitStat,
}

/// Per-split counters. Which ones appear depends on league and era.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitStat {
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    pub pim: Option<i32>,
    pub shots: Option<i32>,
    pub games: Option<i32>,
    pub power_play_goals: Option<i32>,
    pub power_play_points: Option<i32>,
    /// `MM:SS`
    pub power_play_time_on_ice: Option<String>,
    pub game_winning_goals: Option<i32>,
    pub over_time_goals: Option<i32>,
    pub short_handed_goals: Option<i32>,
    pub short_handed_points: Option<i32>,
    /// `MM:SS`
    pub short_handed_time_on_ice: Option<String>,
    pub plus_minus: Option<i32>,
    pub shifts: Option<i32>,
    pub blocked: Option<i32>,
}
