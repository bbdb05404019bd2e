//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::Phase;

/// Load NHL teams, players and season stats into PostgreSQL.
///
/// Every flag is optional; a bare invocation runs the whole pipeline with
/// configuration from the environment and the default config file.
#[derive(Debug, Parser)]
#[clap(name = "nhl-etl", about = "Load NHL API data into PostgreSQL")]
pub struct Cli {
    /// Path to a TOML config file (or set `NHL_ETL_CONFIG`).
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Run a single phase: all | teams | players | stats.
    #[clap(long, short, default_value_t = Phase::default())]
    pub phase: Phase,

    /// Log at debug level (RUST_LOG still takes precedence).
    #[clap(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_runs_everything() {
        let cli = Cli::try_parse_from(["nhl-etl"]).unwrap();
        assert_eq!(cli.phase, Phase::All);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "nhl-etl",
            "--config",
            "/tmp/nhl.toml",
            "--phase",
            "stats",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/nhl.toml")));
        assert_eq!(cli.phase, Phase::Stats);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_phase() {
        assert!(Cli::try_parse_from(["nhl-etl", "--phase", "goalies"]).is_err());
    }
}
