//! NHL Stats Extract-and-Load Library
//!
//! Pulls teams, rostered players and year-by-year player statistics from the
//! public NHL stats API and upserts them into three PostgreSQL tables.
//!
//! ## Pipeline
//!
//! The run is strictly linear, one request at a time:
//!
//! 1. **Teams**: `GET /teams` → `team`
//! 2. **Players**: `GET /teams/{id}/roster`, then `GET /people/{id}` per
//!    rostered player → `player`
//! 3. **Stats**: for every id in `player`, `GET /people/{id}/stats?stats=yearByYear` → `stats`
//!
//! Any error stops the run. Batches committed before the error stay in the
//! database.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_etl::{commands::{handle_run, RunParams}, Phase};
//!
//! # async fn example() -> nhl_etl::Result<()> {
//! let summary = handle_run(RunParams {
//!     config_path: None,
//!     phase: Phase::All,
//! })
//! .await?;
//! println!("{} stats rows", summary.stats);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Connection settings can come from the environment instead of a config file:
//! ```bash
//! export NHL_DB_HOST=localhost NHL_DB_NAME=nhl NHL_DB_USER=etl NHL_DB_PASSWORD=secret
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod nhl;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Phase, PlayerId, Season, TeamId};
pub use config::Config;
pub use error::{EtlError, Result};
pub use nhl::NhlClient;
pub use storage::{MemoryStore, PgStore, Player, SeasonStats, Store, Team};
