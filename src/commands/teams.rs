//! Team phase: `GET /teams` → team table

use crate::{
    nhl::NhlClient,
    storage::{Store, Team},
    Result,
};
use tracing::info;

/// Fetch every team and upsert them in one batch.
///
/// Returns the teams so the player phase can walk their rosters without a
/// second request.
pub async fn load_teams<S>(client: &NhlClient, store: &mut S) -> Result<Vec<Team>>
where
    S: Store + ?Sized,
{
    info!("Getting NHL team data...");
    let teams = client.fetch_teams().await?;

    let written = store.upsert_teams(&teams).await?;
    info!(rows = written, "Teams loaded");

    Ok(teams)
}
