//! Data module - score file loading

mod fetch;
mod loader;
mod record;

pub use fetch::{spawn_fetch, FetchResult, PendingFetch};
pub use loader::{fetch_scores, LoaderError, RowSelection, ScoreTable, REQUIRED_COLUMNS};
pub use record::{format_number, parse_float, ScoreRecord, ScoreValue};
