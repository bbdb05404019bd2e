//! Stats phase: year-by-year splits for every stored player → stats table

use crate::{nhl::NhlClient, storage::Store, Result};
use tracing::{debug, info};

/// Load year-by-year stats for the players already in the player table.
///
/// Player ids are read back from the store rather than taken from the
/// player phase, so every stats row points at a stored player. One batch
/// per player.
pub async fn load_stats<S>(client: &NhlClient, store: &mut S) -> Result<usize>
where
    S: Store + ?Sized,
{
    let player_ids = store.player_ids().await?;
    info!(players = player_ids.len(), "Getting NHL stats data...");
    let mut total = 0;

    for player_id in player_ids {
        let rows = client.fetch_player_stats(player_id).await?;
        debug!(player = %player_id, splits = rows.len(), "Fetched stats");
        total += store.upsert_season_stats(&rows).await?;
    }

    info!(rows = total, "Stats loaded");
    Ok(total)
}
