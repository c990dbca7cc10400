//! Search state store: the aggregate search state and its transitions.
//!
//! [`SearchState`] is only ever mutated through [`reduce`], which applies one
//! [`StoreMessage`] at a time. Keeping the transition set closed is what holds
//! the store's invariants:
//!
//! - after any completed transition `loading` and `error` are never both set;
//! - `has_searched` only reverts on [`StoreMessage::Reset`];
//! - changing filters puts `current_page` back on 1;
//! - `movies` is empty whenever `error` is set.
//!
//! # Example
//!
//! ```rust
//! use reelsearch::app::store::{reduce, SearchState, StoreMessage};
//!
//! let mut state = SearchState::default();
//! reduce(&mut state, StoreMessage::BeginSearch);
//! assert!(state.loading);
//! reduce(&mut state, StoreMessage::SearchFailed("Movie not found!".into()));
//! assert!(!state.loading);
//! assert!(state.has_searched);
//! ```

use crate::domain::{Filters, ResultItem};

/// Fixed page size of the catalog's pagination contract.
pub const PAGE_SIZE: u32 = 10;

/// Validation message for a blank query.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";

/// Fallback when the catalog rejects a search without saying why.
pub const NO_RESULTS_MESSAGE: &str = "No movies found";

/// Failure for searches attempted after the host refused `WebAccess`.
pub const WEB_ACCESS_DENIED_MESSAGE: &str = "Web access was denied; searches cannot reach the catalog";

/// Aggregate search state for one plugin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub movies: Vec<ResultItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub total_results: u32,
    pub current_page: u32,
    pub search_query: String,
    pub filters: Filters,
    pub has_searched: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            loading: false,
            error: None,
            total_results: 0,
            current_page: 1,
            search_query: String::new(),
            filters: Filters::default(),
            has_searched: false,
        }
    }
}

impl SearchState {
    /// Number of pages implied by `total_results`.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        super::pagination::total_pages(self.total_results)
    }

    /// Returns `true` once a query has been searched and can be re-run.
    #[must_use]
    pub fn has_active_search(&self) -> bool {
        self.has_searched && !self.search_query.trim().is_empty()
    }
}

/// Transitions accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreMessage {
    /// A request is about to be issued.
    BeginSearch,
    /// A search completed with results.
    SearchSucceeded {
        items: Vec<ResultItem>,
        total_results: u32,
        page: u32,
    },
    /// A search failed for any reason.
    SearchFailed(String),
    /// The submitted query text changed. Does not fetch.
    SetQuery(String),
    /// The filter facets changed. Does not fetch.
    SetFilters(Filters),
    /// The current page changed. Does not fetch.
    SetPage(u32),
    /// Back to the initial empty state.
    Reset,
}

/// Applies one transition to the search state.
pub fn reduce(state: &mut SearchState, message: StoreMessage) {
    match message {
        StoreMessage::BeginSearch => {
            state.loading = true;
            state.error = None;
        }
        StoreMessage::SearchSucceeded {
            items,
            total_results,
            page,
        } => {
            tracing::debug!(items = items.len(), total_results, page, "search succeeded");
            state.loading = false;
            state.error = None;
            state.movies = items;
            state.total_results = total_results;
            state.current_page = page;
            state.has_searched = true;
        }
        StoreMessage::SearchFailed(message) => {
            tracing::debug!(message = %message, "search failed");
            state.loading = false;
            state.error = Some(message);
            state.movies.clear();
            state.total_results = 0;
            state.has_searched = true;
        }
        StoreMessage::SetQuery(query) => state.search_query = query,
        StoreMessage::SetFilters(filters) => {
            state.filters = filters;
            state.current_page = 1;
        }
        StoreMessage::SetPage(page) => state.current_page = page,
        StoreMessage::Reset => *state = SearchState::default(),
    }
}
