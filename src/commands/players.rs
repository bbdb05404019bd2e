//! Player phase: each team's roster → player table

use crate::{
    nhl::NhlClient,
    storage::{Store, Team},
    Result,
};
use tracing::{debug, info};

/// Fetch the roster of every team, then each rostered player's biography.
///
/// One batch per team: a team's players are committed together once all of
/// them have been fetched. Any failure stops the phase; teams committed
/// before it stay committed.
pub async fn load_players<S>(client: &NhlClient, store: &mut S, teams: &[Team]) -> Result<usize>
where
    S: Store + ?Sized,
{
    info!(teams = teams.len(), "Getting NHL player data...");
    let mut total = 0;

    for team in teams {
        let roster = client.fetch_roster(team.team_id).await?;
        debug!(team = %team.abbr, players = roster.len(), "Fetched roster");

        let mut players = Vec::with_capacity(roster.len());
        for player_id in roster {
            players.push(client.fetch_player(player_id, team.team_id).await?);
        }

        total += store.upsert_players(&players).await?;
    }

    info!(rows = total, "Players loaded");
    Ok(total)
}
