//! HTTP client for the NHL stats API.

use super::convert::{player_from_api, stats_from_splits, team_from_api};
use super::types::{PeopleResponse, RosterResponse, StatsResponse, TeamsResponse};
use crate::cli::types::{PlayerId, TeamId};
use crate::config::ApiConfig;
use crate::error::{EtlError, Result};
use crate::storage::{Player, SeasonStats, Team};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;


/// Thin wrapper over `reqwest` that knows the API's paths.
///
/// Every call is a single GET with no retry. Non-2xx statuses, transport
/// failures and unexpected bodies all come back as errors.
#[derive(Debug, Clone)]
pub struct NhlClient {
    client: Client,
    base_url: String,
}

impl NhlClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client with default settings pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let config = ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        };
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let body = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        serde_json::from_slice(&body).map_err(|e| EtlError::shape(path, e.to_string()))
    }

    /// All teams listed by `GET /teams`.
    pub async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let response: TeamsResponse = self.get_json("/teams", &[]).await?;
        Ok(response.teams.into_iter().map(team_from_api).collect())
    }

    /// IDs of the players currently on a team's roster.
    pub async fn fetch_roster(&self, team_id: TeamId) -> Result<Vec<PlayerId>> {
        let path = format!("/teams/{}/roster", team_id);
        let response: RosterResponse = self.get_json(&path, &[]).await?;
        Ok(response
            .roster
            .into_iter()
            .map(|entry| PlayerId::new(entry.person.id))
            .collect())
    }

    /// Biography for one player, attributed to the roster it was found on.
    pub async fn fetch_player(&self, player_id: PlayerId, team_id: TeamId) -> Result<Player> {
        let path = format!("/people/{}", player_id);
        let response: PeopleResponse = self.get_json(&path, &[]).await?;
        let person = response
            .people
            .into_iter()
            .next()
            .ok_or_else(|| EtlError::shape(path.as_str(), "empty `people` list"))?;
        if person.id != player_id.as_i32() {
            return Err(EtlError::shape(
                path.as_str(),
                format!("asked for player {} but got {}", player_id, person.id),
            ));
        }
        player_from_api(person, team_id)
    }

    /// Year-by-year stat splits for one player.
    pub async fn fetch_player_stats(&self, player_id: PlayerId) -> Result<Vec<SeasonStats>> {
        let path = format!("/people/{}/stats", player_id);
        let response: StatsResponse = self.get_json(&path, &[("stats", "yearByYear")]).await?;
        let group = response
            .stats
            .into_iter()
            .next()
            .ok_or_else(|| EtlError::shape(path.as_str(), "empty `stats` list"))?;
        stats_from_splits(player_id, group.splits)
    }
}
