//! PostgreSQL upserts and lookups

use super::{models::*, schema::schema_statements, schema::PgStore, Store};
use crate::cli::types::PlayerId;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::Connection;
use tracing::debug;

pub(crate) fn upsert_team_sql(team: &str) -> String {
    format!(
        "INSERT INTO {team}
            (team_id, name, arena_name, arena_city, abbr, location,
             initial_year, division_name, conference_name, active)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         ON CONFLICT (team_id) DO UPDATE SET
            name = EXCLUDED.name,
            arena_name = EXCLUDED.arena_name,
            arena_city = EXCLUDED.arena_city,
            abbr = EXCLUDED.abbr,
            location = EXCLUDED.location,
            initial_year = EXCLUDED.initial_year,
            division_name = EXCLUDED.division_name,
            conference_name = EXCLUDED.conference_name,
            active = EXCLUDED.active"
    )
}

pub(crate) fn upsert_player_sql(player: &str) -> String {
    format!(
        "INSERT INTO {player}
            (player_id, team_id, first_name, last_name, number, birth_date,
             birth_city, birth_country, nationality, height_cm, weight_kg,
             handedness, captain, alternate_captain, position, active, rookie)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
         ON CONFLICT (player_id) DO UPDATE SET
            team_id = EXCLUDED.team_id,
            first_name = EXCLUDED.first_name,
            last_name = EXCLUDED.last_name,
            number = EXCLUDED.number,
            birth_date = EXCLUDED.birth_date,
            birth_city = EXCLUDED.birth_city,
            birth_country = EXCLUDED.birth_country,
            nationality = EXCLUDED.nationality,
            height_cm = EXCLUDED.height_cm,
            weight_kg = EXCLUDED.weight_kg,
            handedness = EXCLUDED.handedness,
            captain = EXCLUDED.captain,
            alternate_captain = EXCLUDED.alternate_captain,
            position = EXCLUDED.position,
            active = EXCLUDED.active,
            rookie = EXCLUDED.rookie"
    )
}

pub(crate) fn upsert_stats_sql(stats: &str) -> String {
    format!(
        "INSERT INTO {stats}
            (player_id, season, sequence, league_name, team_id, goals, assists,
             pim, shots, games, pp_goals, pp_points, pp_toi_seconds, gwg,
             ot_goals, sh_goals, sh_points, sh_toi_seconds, plus_minus,
             shifts, blocked)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                 $15, $16, $17, $18, $19, $20, $21)
         ON CONFLICT (player_id, season, sequence) DO UPDATE SET
            league_name = EXCLUDED.league_name,
            team_id = EXCLUDED.team_id,
            goals = EXCLUDED.goals,
            assists = EXCLUDED.assists,
            pim = EXCLUDED.pim,
            shots = EXCLUDED.shots,
            games = EXCLUDED.games,
            pp_goals = EXCLUDED.pp_goals,
            pp_points = EXCLUDED.pp_points,
            pp_toi_seconds = EXCLUDED.pp_toi_seconds,
            gwg = EXCLUDED.gwg,
            ot_goals = EXCLUDED.ot_goals,
            sh_goals = EXCLUDED.sh_goals,
            sh_points = EXCLUDED.sh_points,
            sh_toi_seconds = EXCLUDED.sh_toi_seconds,
            plus_minus = EXCLUDED.plus_minus,
            shifts = EXCLUDED.shifts,
            blocked = EXCLUDED.blocked"
    )
}

#[async_trait]
impl Store for PgStore {
    async fn ensure_schema(&mut self) -> Result<()> {
        for ddl in schema_statements(&self.tables) {
            sqlx::query(&ddl).execute(&mut self.conn).await?;
        }
        debug!(tables = ?self.tables, "Schema ready");
        Ok(())
    }

    async fn upsert_teams(&mut self, teams: &[Team]) -> Result<usize> {
        let sql = upsert_team_sql(&self.tables.team);
        let mut tx = self.conn.begin().await?;
        let mut written = 0u64;

        for team in teams {
            written += sqlx::query(&sql)
                .bind(team.team_id.as_i32())
                .bind(&team.name)
                .bind(&team.arena_name)
                .bind(&team.arena_city)
                .bind(&team.abbr)
                .bind(&team.location)
                .bind(&team.initial_year)
                .bind(&team.division_name)
                .bind(&team.conference_name)
                .bind(team.active)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;
        Ok(written as usize)
    }

    async fn upsert_players(&mut self, players: &[Player]) -> Result<usize> {
        let sql = upsert_player_sql(&self.tables.player);
        let mut tx = self.conn.begin().await?;
        let mut written = 0u64;

        for player in players {
            written += sqlx::query(&sql)
                .bind(player.player_id.as_i32())
                .bind(player.team_id.as_i32())
                .bind(&player.first_name)
                .bind(&player.last_name)
                .bind(player.number)
                .bind(player.birth_date)
                .bind(&player.birth_city)
                .bind(&player.birth_country)
                .bind(&player.nationality)
                .bind(player.height_cm)
                .bind(player.weight_kg)
                .bind(&player.handedness)
                .bind(player.captain)
                .bind(player.alternate_captain)
                .bind(&player.position)
                .bind(player.active)
                .bind(player.rookie)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;
        Ok(written as usize)
    }

    async fn upsert_season_stats(&mut self, stats: &[SeasonStats]) -> Result<usize> {
        let sql = upsert_stats_sql(&self.tables.stats);
        let mut tx = self.conn.begin().await?;
        let mut written = 0u64;

        for row in stats {
            written += sqlx::query(&sql)
                .bind(row.player_id.as_i32())
                .bind(row.season.to_string())
                .bind(row.sequence)
                .bind(&row.league_name)
                .bind(row.team_id.map(|t| t.as_i32()))
                .bind(row.goals)
                .bind(row.assists)
                .bind(row.pim)
                .bind(row.shots)
                .bind(row.games)
                .bind(row.pp_goals)
                .bind(row.pp_points)
                .bind(row.pp_toi_seconds)
                .bind(row.gwg)
                .bind(row.ot_goals)
                .bind(row.sh_goals)
                .bind(row.sh_points)
                .bind(row.sh_toi_seconds)
                .bind(row.plus_minus)
                .bind(row.shifts)
                .bind(row.blocked)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;
        Ok(written as usize)
    }

    async fn player_ids(&mut self) -> Result<Vec<PlayerId>> {
        let sql = format!(
            "SELECT DISTINCT player_id FROM {} ORDER BY player_id",
            self.tables.player
        );
        let ids: Vec<i32> = sqlx::query_scalar(&sql).fetch_all(&mut self.conn).await?;
        Ok(ids.into_iter().map(PlayerId::new).collect())
    }
}
