//! Entry point: parse CLI, set up logging, run the load.

use anyhow::Context;
use clap::Parser;
use nhl_etl::{
    cli::Cli,
    commands::{handle_run, RunParams},
    logging::init_logging,
};

/// Run the job. Any error ends the process with a non-zero status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal; the environment may already be set.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let phase = cli.phase;
    handle_run(RunParams {
        config_path: cli.config,
        phase,
    })
    .await
    .with_context(|| format!("NHL load ({phase}) failed"))?;

    Ok(())
}
