use thiserror::Error;

use crate::core::models::{SearchEngine, SearchResult};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchFailure {
    #[error("Error: Status code {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },
    #[error("Error searching {engine} with dork '{dork}': {message}")]
    Transport {
        engine: SearchEngine,
        dork: String,
        message: String,
    },
}

/// What a single dork request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(SearchResult),
    Failed(SearchFailure),
}
