//! Raw API shapes → table rows.
//!
//! Unit conversions follow the conventions the tables have always used:
//! imperial height and weight become centimetres and kilograms, and
//! `MM:SS` time-on-ice becomes whole seconds.

use super::types::{ApiPerson, ApiTeam, Split};
use crate::cli::types::{PlayerId, Season, TeamId};
use crate::error::{EtlError, Result};
use crate::storage::{Player, SeasonStats, Team};
use std::collections::{HashMap, HashSet};


const CM_PER_FOOT: f64 = 30.48;
const CM_PER_INCH: f64 = 2.54;
const KG_PER_LB: f64 = 0.453;

/// Parse `6' 2"` into centimetres.
pub fn height_to_cm(height: &str) -> Result<f64> {
    let invalid = || EtlError::invalid("height", height);

    let (feet, inches) = height.split_once('\'').ok_or_else(invalid)?;
    let feet: u32 = feet.trim().parse().map_err(|_| invalid())?;
    let inches: u32 = inches
        .trim()
        .trim_end_matches('"')
        .trim()
        .parse()
        .map_err(|_| invalid())?;

    Ok(f64::from(feet) * CM_PER_FOOT + f64::from(inches) * CM_PER_INCH)
}

/// Pounds to kilograms, rounded to two decimals.
pub fn weight_to_kg(pounds: f64) -> f64 {
    (pounds * KG_PER_LB * 100.0).round() / 100.0
}

/// Parse `MM:SS` into seconds. Minutes are not capped at 59.
pub fn time_on_ice_to_seconds(toi: &str) -> Result<i32> {
    let invalid = || EtlError::invalid("time on ice", toi);

    let (minutes, seconds) = toi.trim().split_once(':').ok_or_else(invalid)?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    let seconds: i32 = seconds.parse().map_err(|_| invalid())?;
    if minutes < 0 || !(0..60).contains(&seconds) {
        return Err(invalid());
    }
    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(invalid)
}

pub fn team_from_api(team: ApiTeam) -> Team {
    Team {
        team_id: TeamId::new(team.id),
        name: team.name,
        arena_name: team.venue.name,
        arena_city: team.venue.city,
        abbr: team.abbreviation,
        location: team.location_name,
        initial_year: team.first_year_of_play,
        division_name: team.division.name,
        conference_name: team.conference.name,
        active: team.active,
    }
}

/// Build the player row for someone found on `team_id`'s roster.
pub fn player_from_api(person: ApiPerson, team_id: TeamId) -> Result<Player> {
    Ok(Player {
        player_id: PlayerId::new(person.id),
        team_id,
        height_cm: height_to_cm(&person.height)?,
        weight_kg: weight_to_kg(person.weight),
        first_name: person.first_name,
        last_name: person.last_name,
        number: person.primary_number,
        birth_date: person.birth_date,
        birth_city: person.birth_city,
        birth_country: person.birth_country,
        nationality: person.nationality,
        handedness: person.shoots_catches,
        captain: person.captain,
        alternate_captain: person.alternate_captain,
        position: person.primary_position.code,
        active: person.active,
        rookie: person.rookie,
    })
}

/// Convert year-by-year splits into stats rows.
///
/// Splits without a `sequenceNumber` are numbered after the highest sequence
/// already present in their season, so every row keeps its own
/// `(player, season, sequence)` key. Two splits claiming the same
/// `sequenceNumber` in one season are rejected.
pub fn stats_from_splits(player_id: PlayerId, splits: Vec<Split>) -> Result<Vec<SeasonStats>> {
    let mut last: HashMap<Season, i32> = HashMap::new();
    for split in &splits {
        if let Some(sequence) = split.sequence_number {
            let top = last.entry(split.season).or_insert(0);
            *top = (*top).max(sequence);
        }
    }
    let mut used: HashSet<(Season, i32)> = HashSet::new();

    splits
        .into_iter()
        .map(|split| -> Result<SeasonStats> {
            let sequence = match split.sequence_number {
                Some(sequence) => sequence,
                None => {
                    let top = last.entry(split.season).or_insert(0);
                    *top += 1;
                    *top
                }
            };
            if !used.insert((split.season, sequence)) {
                return Err(EtlError::shape(
                    format!("/people/{player_id}/stats"),
                    format!(
                        "season {} has more than one split with sequence {sequence}",
                        split.season
                    ),
                ));
            }
            let stat = split.stat;

            Ok(SeasonStats {
                player_id,
                season: split.season,
                sequence,
                league_name: split.league.name,
                team_id: split.team.and_then(|t| t.id).map(TeamId::new),
                goals: stat.goals,
                assists: stat.assists,
                pim: stat.pim,
                shots: stat.shots,
                games: stat.games,
                pp_goals: stat.power_play_goals,
                pp_points: stat.power_play_points,
                pp_toi_seconds: stat
                    .power_play_time_on_ice
                    .as_deref()
                    .map(time_on_ice_to_seconds)
                    .transpose()?,
                gwg: stat.game_winning_goals,
                ot_goals: stat.over_time_goals,
                sh_goals: stat.short_handed_goals,
                sh_points: stat.short_handed_points,
                sh_toi_seconds: stat
                    .short_handed_time_on_ice
                    .as_deref()
                    .map(time_on_ice_to_seconds)
                    .transpose()?,
                plus_minus: stat.plus_minus,
                shifts: stat.shifts,
                blocked: stat.blocked,
            })
        })
        .collect()
}
