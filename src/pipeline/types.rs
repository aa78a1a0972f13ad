use crate::search::types::SearchResult;

use std::sync::Arc;
use std::time::Duration;

/// Quiescence window a query must survive before it is searched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Settled queries shorter than this (after trimming) never reach the index.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Tunables for the search pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub debounce: Duration,
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

/// Snapshot of everything the display layer observes.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// The corpus is still loading or the index is still being built.
    pub is_loading: bool,
    /// A settled query is being searched.
    pub is_searching: bool,
    /// Results for `query`, ordered by hymn number.
    pub results: Arc<Vec<SearchResult>>,
    /// The settled query the results belong to.
    pub query: String,
    /// Sequence number of the search that produced `results`; 0 before the first search.
    pub generation: u64,
    /// Sequence number of the query edit these results answer; 0 before the first edit.
    pub edit: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            is_loading: true,
            is_searching: false,
            results: Arc::new(Vec::new()),
            query: String::new(),
            generation: 0,
            edit: 0,
        }
    }
}

/// One value of the query-text stream, numbered by [`SearchController::set_query_text`].
///
/// [`SearchController::set_query_text`]: super::controller::SearchController::set_query_text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryEdit {
    pub seq: u64,
    pub text: String,
}
