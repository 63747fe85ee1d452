//! Suggestion data sources
//!
//! A source answers a query with an ordered list of suggestions. Sources are
//! called from the fetch worker's blocking pool, never from the UI thread.

mod loader;
mod word_list;
pub mod worker;

use thiserror::Error;

use crate::autocomplete::Suggestion;

pub use loader::{WordListFormat, builtin_suggestions, load_suggestions, parse_suggestions};
pub use word_list::WordListSource;
pub use worker::FetchWorker;

/// Why a fetch produced no suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Suggestion fetch failed: {0}")]
    Failed(String),
}

/// Something that can answer a suggestion query
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, SourceError>;
}
