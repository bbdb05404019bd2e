//! Unit tests for configuration loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.timeout(), Duration::from_secs(30));
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.tables.team, "team");
    assert_eq!(config.tables.player, "player");
    assert_eq!(config.tables.stats, "stats");
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_file_partial_keeps_defaults() {
    let file = write_config(
        r#"
        [database]
        host = "db.internal"
        name = "hockey"

        [tables]
        stats = "player_season_stats"
        "#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.database.name, "hockey");
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.tables.stats, "player_season_stats");
    assert_eq!(config.tables.team, "team");
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn test_from_file_invalid_toml() {
    let file = write_config("[database\nhost = ");
    match Config::from_file(file.path()) {
        Err(EtlError::ConfigFormat(_)) => (),
        other => panic!("Expected ConfigFormat error, got {:?}", other),
    }
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    match Config::from_file(&missing) {
        Err(EtlError::Io(_)) => (),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_bad_table_name() {
    let file = write_config(
        r#"
        [tables]
        team = "team; DROP TABLE player"
        "#,
    );
    match Config::load(Some(file.path())) {
        Err(EtlError::Config { message }) => assert!(message.contains("invalid table name")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_duplicate_tables() {
    let mut config = Config::default();
    config.tables.stats = "player".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_sql_identifier_rules() {
    assert!(is_sql_identifier("team"));
    assert!(is_sql_identifier("_stats_2023"));
    assert!(!is_sql_identifier(""));
    assert!(!is_sql_identifier("2023stats"));
    assert!(!is_sql_identifier("player-stats"));
    assert!(!is_sql_identifier("public.team"));
}

fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn test_env_overrides() {
    let vars = [
        (DB_HOST_ENV_VAR, "pg.example.com"),
        (DB_PORT_ENV_VAR, "6543"),
        (DB_PASSWORD_ENV_VAR, "hunter2"),
        (API_TIMEOUT_ENV_VAR, "5"),
    ];

    let mut config = Config::default();
    config.apply_overrides(lookup_from(&vars)).unwrap();

    assert_eq!(config.database.host, "pg.example.com");
    assert_eq!(config.database.port, 6543);
    assert_eq!(config.database.password.as_deref(), Some("hunter2"));
    assert_eq!(config.api.timeout(), Duration::from_secs(5));
    assert_eq!(config.database.name, "nhl");
}

#[test]
fn test_env_overrides_ignore_empty_values() {
    let vars = [(DB_HOST_ENV_VAR, ""), (DB_PASSWORD_ENV_VAR, "  ")];

    let mut config = Config::default();
    config.apply_overrides(lookup_from(&vars)).unwrap();

    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.database.password, None);
}

#[test]
fn test_env_overrides_reject_bad_port() {
    let vars = [(DB_PORT_ENV_VAR, "postgres")];

    let mut config = Config::default();
    match config.apply_overrides(lookup_from(&vars)) {
        Err(EtlError::Config { message }) => assert!(message.contains(DB_PORT_ENV_VAR)),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_resolve_path_prefers_explicit_then_env() {
    let explicit = Path::new("/etc/nhl-etl.toml");
    let vars = [(CONFIG_PATH_ENV_VAR, "/srv/nhl.toml")];

    assert_eq!(
        Config::resolve_path_with(Some(explicit), lookup_from(&vars)),
        Some(explicit.to_path_buf())
    );
    assert_eq!(
        Config::resolve_path_with(None, lookup_from(&vars)),
        Some(PathBuf::from("/srv/nhl.toml"))
    );
}

#[test]
fn test_resolve_path_treats_empty_env_as_unset() {
    let vars = [(CONFIG_PATH_ENV_VAR, "")];
    let resolved = Config::resolve_path_with(None, lookup_from(&vars));
    assert_ne!(resolved, Some(PathBuf::new()));
    if let Some(path) = resolved {
        assert_eq!(Some(path), default_config_path());
    }
}

#[test]
fn test_database_debug_hides_password() {
    let database = DatabaseConfig {
        password: Some("hunter2".to_string()),
        ..DatabaseConfig::default()
    };
    let debug_str = format!("{:?}", database);
    assert!(!debug_str.contains("hunter2"));
    assert!(debug_str.contains("***"));
}

#[test]
fn test_default_config_path_location() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("nhl-etl/config.toml"));
    }
}
