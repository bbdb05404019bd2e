//! NHL stats API: HTTP client, raw response shapes, and conversion into rows.
//!
//! Only `types` and `convert` know what the provider's JSON looks like, so a
//! change on their side stays inside those two files.

pub mod convert;
pub mod http;
pub mod types;

pub use http::NhlClient;
