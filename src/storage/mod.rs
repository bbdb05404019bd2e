//! Storage layer for the NHL extract-and-load job
//!
//! The loader only talks to the [`Store`] trait:
//! - `models`: Row structs for the three tables
//! - `schema`: PostgreSQL connection and table DDL
//! - `queries`: PostgreSQL upserts and lookups
//! - `memory`: In-memory store with the same key and foreign-key rules

pub mod memory;
pub mod models;
pub mod queries;
pub mod schema;


use crate::cli::types::PlayerId;
use crate::error::Result;
use async_trait::async_trait;

// Re-export the main types and database struct for easy access
pub use memory::MemoryStore;
pub use models::*;
pub use schema::PgStore;

/// Destination for loaded rows.
///
/// Each upsert call is one batch: it either writes every row or none of
/// them. Rows are keyed as follows and re-upserting a key overwrites it:
/// team by `team_id`, player by `player_id`, stats by
/// `(player_id, season, sequence)`.
#[async_trait]
pub trait Store {
    /// Create the tables if they do not exist yet.
    async fn ensure_schema(&mut self) -> Result<()>;

    async fn upsert_teams(&mut self, teams: &[Team]) -> Result<usize>;

    /// Fails if any player's team is not in the team table.
    async fn upsert_players(&mut self, players: &[Player]) -> Result<usize>;

    /// Fails if any row's player is not in the player table.
    async fn upsert_season_stats(&mut self, stats: &[SeasonStats]) -> Result<usize>;

    /// Distinct player ids currently stored, ascending.
    async fn player_ids(&mut self) -> Result<Vec<PlayerId>>;
}
