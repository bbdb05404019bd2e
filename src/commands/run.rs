//! Full pipeline: teams, then players, then stats.

use super::{players::load_players, stats::load_stats, teams::load_teams};
use crate::{
    cli::types::Phase,
    config::Config,
    nhl::NhlClient,
    storage::{PgStore, Store},
    Result,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Parameters for a run
#[derive(Debug, Clone, Default)]
pub struct RunParams {
    pub config_path: Option<PathBuf>,
    pub phase: Phase,
}

/// Rows written per table during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub teams: usize,
    pub players: usize,
    pub stats: usize,
}

/// Run the selected phases in order against `store`.
///
/// There is no transaction spanning phases. If stats fail, the teams and
/// players written earlier in the run remain.
pub async fn run_pipeline<S>(client: &NhlClient, store: &mut S, phase: Phase) -> Result<RunSummary>
where
    S: Store + ?Sized,
{
    let mut summary = RunSummary::default();
    store.ensure_schema().await?;

    let mut teams = None;
    if phase.includes(Phase::Teams) {
        let loaded = load_teams(client, &mut *store).await?;
        summary.teams = loaded.len();
        teams = Some(loaded);
    }

    if phase.includes(Phase::Players) {
        let teams = match teams {
            Some(teams) => teams,
            // Players-only run: rosters still come from the live team list.
            None => client.fetch_teams().await?,
        };
        summary.players = load_players(client, &mut *store, &teams).await?;
    }

    if phase.includes(Phase::Stats) {
        summary.stats = load_stats(client, &mut *store).await?;
    }

    Ok(summary)
}

/// Handle a scheduled run: load config, connect, run the pipeline.
pub async fn handle_run(params: RunParams) -> Result<RunSummary> {
    let started = Instant::now();
    let config = Config::load(params.config_path.as_deref())?;
    info!(phase = %params.phase, api = %config.api.base_url, "Starting NHL load");

    let client = NhlClient::new(&config.api)?;
    let mut store = PgStore::connect(&config.database, config.tables.clone()).await?;

    let summary = run_pipeline(&client, &mut store, params.phase).await?;
    store.close().await?;

    info!(
        teams = summary.teams,
        players = summary.players,
        stats = summary.stats,
        elapsed_ms = started.elapsed().as_millis(),
        "NHL load complete"
    );
    Ok(summary)
}
