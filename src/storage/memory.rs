//! In-memory [`Store`] for tests and dry runs.
//!
//! Applies the same primary keys and foreign keys as the PostgreSQL schema,
//! and validates a whole batch before writing any of it, so a rejected batch
//! leaves nothing behind.

use super::{models::*, Store};
use crate::cli::types::{PlayerId, TeamId};
use crate::error::{EtlError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    schema_ready: bool,
    teams: BTreeMap<TeamId, Team>,
    players: BTreeMap<PlayerId, Player>,
    stats: BTreeMap<SeasonStatsKey, SeasonStats>,
    committed_batches: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_ready(&self) -> bool {
        self.schema_ready
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn season_stats(&self) -> impl Iterator<Item = &SeasonStats> {
        self.stats.values()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn stats_count(&self) -> usize {
        self.stats.len()
    }

    /// Number of upsert batches that were committed.
    pub fn committed_batches(&self) -> usize {
        self.committed_batches
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ensure_schema(&mut self) -> Result<()> {
        self.schema_ready = true;
        Ok(())
    }

    async fn upsert_teams(&mut self, teams: &[Team]) -> Result<usize> {
        for team in teams {
            self.teams.insert(team.team_id, team.clone());
        }
        self.committed_batches += 1;
        Ok(teams.len())
    }

    async fn upsert_players(&mut self, players: &[Player]) -> Result<usize> {
        if let Some(orphan) = players
            .iter()
            .find(|p| !self.teams.contains_key(&p.team_id))
        {
            return Err(EtlError::MissingForeignKey {
                entity: "player",
                id: orphan.player_id.to_string(),
                parent: "team",
                parent_id: orphan.team_id.to_string(),
            });
        }

        for player in players {
            self.players.insert(player.player_id, player.clone());
        }
        self.committed_batches += 1;
        Ok(players.len())
    }

    async fn upsert_season_stats(&mut self, stats: &[SeasonStats]) -> Result<usize> {
        if let Some(orphan) = stats
            .iter()
            .find(|s| !self.players.contains_key(&s.player_id))
        {
            return Err(EtlError::MissingForeignKey {
                entity: "stats",
                id: format!("{}/{}/{}", orphan.player_id, orphan.season, orphan.sequence),
                parent: "player",
                parent_id: orphan.player_id.to_string(),
            });
        }

        for row in stats {
            self.stats.insert(row.key(), row.clone());
        }
        self.committed_batches += 1;
        Ok(stats.len())
    }

    async fn player_ids(&mut self) -> Result<Vec<PlayerId>> {
        Ok(self.players.keys().copied().collect())
    }
}
