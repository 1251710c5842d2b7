mod finder_error;
mod person;
mod search_engine;
mod search_outcome;
mod search_result;
mod search_settings;

pub use finder_error::FinderError;
pub use person::Person;
pub use search_engine::SearchEngine;
pub use search_outcome::{FetchOutcome, SearchFailure};
pub use search_result::SearchResult;
pub use search_settings::SearchSettings;
