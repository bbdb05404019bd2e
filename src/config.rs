//! Runtime configuration: API endpoint, database connection, table names.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `NHL_*` environment variables.

use crate::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[cfg(test)]
mod tests;

pub const CONFIG_PATH_ENV_VAR: &str = "NHL_ETL_CONFIG";
pub const API_BASE_URL_ENV_VAR: &str = "NHL_API_BASE_URL";
pub const API_TIMEOUT_ENV_VAR: &str = "NHL_API_TIMEOUT_SECS";
pub const DB_HOST_ENV_VAR: &str = "NHL_DB_HOST";
pub const DB_PORT_ENV_VAR: &str = "NHL_DB_PORT";
pub const DB_NAME_ENV_VAR: &str = "NHL_DB_NAME";
pub const DB_USER_ENV_VAR: &str = "NHL_DB_USER";
pub const DB_PASSWORD_ENV_VAR: &str = "NHL_DB_PASSWORD";

/// Base path for the NHL stats API v1.
pub const DEFAULT_API_BASE_URL: &str = "https://statsapi.web.nhl.com/api/v1";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub tables: TableNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("nhl-etl/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "nhl".to_string(),
            user: "postgres".to_string(),
            password: None,
        }
    }
}

// Hand-written so the password never reaches the logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user);
        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }
}

/// Names of the three target tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableNames {
    pub team: String,
    pub player: String,
    pub stats: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            team: "team".to_string(),
            player: "player".to_string(),
            stats: "stats".to_string(),
        }
    }
}

impl TableNames {
    /// Table names are spliced into SQL text, so only plain identifiers pass.
    pub fn validate(&self) -> Result<()> {
        for name in [&self.team, &self.player, &self.stats] {
            if !is_sql_identifier(name) {
                return Err(EtlError::config(format!(
                    "invalid table name {:?}: expected [A-Za-z_][A-Za-z0-9_]*",
                    name
                )));
            }
        }
        if self.team == self.player || self.team == self.stats || self.player == self.stats {
            return Err(EtlError::config("table names must be distinct"));
        }
        Ok(())
    }
}

fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Config {
    /// Load configuration from the given file (or the default location),
    /// then apply environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_path(path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Reading config file");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Explicit path, then `NHL_ETL_CONFIG`, then the per-user config file
    /// if one exists.
    fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        Self::resolve_path_with(explicit, env_var)
    }

    fn resolve_path_with<F>(explicit: Option<&Path>, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = non_empty(lookup(CONFIG_PATH_ENV_VAR)) {
            return Some(PathBuf::from(path));
        }
        default_config_path().filter(|p| p.is_file())
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(env_var)
    }

    /// Apply `NHL_*` overrides read through `lookup`. Empty values count as
    /// unset.
    pub(crate) fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_string = |key: &str| non_empty(lookup(key));

        if let Some(url) = env_string(API_BASE_URL_ENV_VAR) {
            self.api.base_url = url;
        }
        if let Some(secs) = env_string(API_TIMEOUT_ENV_VAR) {
            self.api.timeout_secs = secs
                .parse()
                .map_err(|_| EtlError::config(format!("{API_TIMEOUT_ENV_VAR}={secs:?} is not a number")))?;
        }
        if let Some(host) = env_string(DB_HOST_ENV_VAR) {
            self.database.host = host;
        }
        if let Some(port) = env_string(DB_PORT_ENV_VAR) {
            self.database.port = port
                .parse()
                .map_err(|_| EtlError::config(format!("{DB_PORT_ENV_VAR}={port:?} is not a port")))?;
        }
        if let Some(name) = env_string(DB_NAME_ENV_VAR) {
            self.database.name = name;
        }
        if let Some(user) = env_string(DB_USER_ENV_VAR) {
            self.database.user = user;
        }
        if let Some(password) = env_string(DB_PASSWORD_ENV_VAR) {
            self.database.password = Some(password);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(EtlError::config("api.timeout_secs must be greater than 0"));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(EtlError::config("api.base_url must not be empty"));
        }
        self.tables.validate()
    }
}

/// `<config dir>/nhl-etl/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nhl-etl").join("config.toml"))
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
