//! Load phases and the run that strings them together

pub mod players;
pub mod run;
pub mod stats;
pub mod teams;


pub use players::load_players;
pub use run::{handle_run, run_pipeline, RunParams, RunSummary};
pub use stats::load_stats;
pub use teams::load_teams;
