//! Type-safe wrappers and enums for NHL data.

pub mod ids;
pub mod phase;
pub mod time;

pub use ids::{PlayerId, TeamId};
pub use phase::Phase;
pub use time::Season;
