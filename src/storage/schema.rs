//! Database schema and connection management

use crate::config::{DatabaseConfig, TableNames};
use crate::error::Result;
use sqlx::{Connection, PgConnection};
use tracing::info;

/// Single PostgreSQL connection used for the whole run
pub struct PgStore {
    pub(crate) conn: PgConnection,
    pub(crate) tables: TableNames,
}

impl PgStore {
    /// Open one connection. Failure here aborts the run.
    pub async fn connect(config: &DatabaseConfig, tables: TableNames) -> Result<Self> {
        tables.validate()?;
        info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            "Connecting to PostgreSQL"
        );
        let conn = PgConnection::connect_with(&config.connect_options()).await?;
        Ok(Self { conn, tables })
    }

    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}

pub(crate) fn create_team_table_sql(team: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {team} (
            team_id         INTEGER PRIMARY KEY,
            name            VARCHAR(50) NOT NULL,
            arena_name      VARCHAR(50) NOT NULL,
            arena_city      VARCHAR(50) NOT NULL,
            abbr            VARCHAR(3) NOT NULL,
            location        VARCHAR(50) NOT NULL,
            initial_year    VARCHAR(4) NOT NULL,
            division_name   VARCHAR(50) NOT NULL,
            conference_name VARCHAR(50) NOT NULL,
            active          BOOLEAN NOT NULL
        )"
    )
}

pub(crate) fn create_player_table_sql(player: &str, team: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {player} (
            player_id         INTEGER PRIMARY KEY,
            team_id           INTEGER NOT NULL REFERENCES {team}(team_id),
            first_name        VARCHAR(50) NOT NULL,
            last_name         VARCHAR(50) NOT NULL,
            number            INTEGER,
            birth_date        DATE NOT NULL,
            birth_city        VARCHAR(50) NOT NULL,
            birth_country     VARCHAR(50) NOT NULL,
            nationality       VARCHAR(50) NOT NULL,
            height_cm         DOUBLE PRECISION NOT NULL,
            weight_kg         DOUBLE PRECISION NOT NULL,
            handedness        VARCHAR(10) NOT NULL,
            captain           BOOLEAN,
            alternate_captain BOOLEAN,
            position          VARCHAR(10) NOT NULL,
            active            BOOLEAN NOT NULL,
            rookie            BOOLEAN NOT NULL
        )"
    )
}

pub(crate) fn create_stats_table_sql(stats: &str, player: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {stats} (
            player_id       INTEGER NOT NULL REFERENCES {player}(player_id),
            season          VARCHAR(8) NOT NULL,
            sequence        INTEGER NOT NULL,
            league_name     VARCHAR(50) NOT NULL,
            team_id         INTEGER,
            goals           INTEGER,
            assists         INTEGER,
            pim             INTEGER,
            shots           INTEGER,
            games           INTEGER,
            pp_goals        INTEGER,
            pp_points       INTEGER,
            pp_toi_seconds  INTEGER,
            gwg             INTEGER,
            ot_goals        INTEGER,
            sh_goals        INTEGER,
            sh_points       INTEGER,
            sh_toi_seconds  INTEGER,
            plus_minus      INTEGER,
            shifts          INTEGER,
            blocked         INTEGER,
            PRIMARY KEY (player_id, season, sequence)
        )"
    )
}

/// DDL in dependency order: parents before children.
pub(crate) fn schema_statements(tables: &TableNames) -> [String; 3] {
    [
        create_team_table_sql(&tables.team),
        create_player_table_sql(&tables.player, &tables.team),
        create_stats_table_sql(&tables.stats, &tables.player),
    ]
}
