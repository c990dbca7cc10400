//! Search store transitions and their invariants.

use proptest::prelude::*;
use reelsearch::app::store::{reduce, SearchState, StoreMessage};
use reelsearch::domain::{Filters, MediaType, ResultItem};

fn item(id: &str) -> ResultItem {
    ResultItem {
        id: id.to_string(),
        title: format!("Title {id}"),
        year: Some("1999".to_string()),
        media_type: MediaType::Movie,
        poster: None,
    }
}

#[test]
fn successful_search_replaces_results() {
    let mut state = SearchState::default();
    reduce(&mut state, StoreMessage::BeginSearch);
    assert!(state.loading);

    reduce(
        &mut state,
        StoreMessage::SearchSucceeded {
            items: vec![item("tt1"), item("tt2")],
            total_results: 2,
            page: 1,
        },
    );

    assert!(!state.loading);
    assert!(state.has_searched);
    assert_eq!(state.error, None);
    assert_eq!(state.movies.len(), 2);
    assert_eq!(state.total_results, 2);
}

#[test]
fn failed_search_clears_results() {
    let mut state = SearchState::default();
    reduce(
        &mut state,
        StoreMessage::SearchSucceeded {
            items: vec![item("tt1")],
            total_results: 31,
            page: 3,
        },
    );
    reduce(&mut state, StoreMessage::BeginSearch);
    reduce(&mut state, StoreMessage::SearchFailed("Movie not found!".to_string()));

    assert!(!state.loading);
    assert!(state.movies.is_empty());
    assert_eq!(state.total_results, 0);
    assert_eq!(state.error.as_deref(), Some("Movie not found!"));
    assert!(state.has_searched);
}

#[test]
fn begin_search_clears_previous_error() {
    let mut state = SearchState::default();
    reduce(&mut state, StoreMessage::SearchFailed("boom".to_string()));
    reduce(&mut state, StoreMessage::BeginSearch);
    assert_eq!(state.error, None);
    assert!(state.loading);
}

#[test]
fn setting_filters_returns_to_first_page() {
    let mut state = SearchState::default();
    reduce(&mut state, StoreMessage::SetPage(4));
    reduce(&mut state, StoreMessage::SetFilters(Filters::default().with_year("2008")));
    assert_eq!(state.current_page, 1);
    assert_eq!(state.filters.year, "2008");
}

#[test]
fn reset_restores_initial_state() {
    let mut state = SearchState::default();
    reduce(&mut state, StoreMessage::SetQuery("alien".to_string()));
    reduce(&mut state, StoreMessage::SearchFailed("x".to_string()));
    reduce(&mut state, StoreMessage::Reset);
    assert_eq!(state, SearchState::default());
    assert!(!state.has_active_search());
}

fn message() -> impl Strategy<Value = StoreMessage> {
    prop_oneof![
        Just(StoreMessage::BeginSearch),
        (0usize..4, 0u32..200, 1u32..20).prop_map(|(n, total, page)| StoreMessage::SearchSucceeded {
            items: (0..n).map(|i| item(&format!("tt{i}"))).collect(),
            total_results: total,
            page,
        }),
        "[a-z ]{0,12}".prop_map(StoreMessage::SearchFailed),
        "[a-z ]{0,12}".prop_map(StoreMessage::SetQuery),
        "(19|20)[0-9]{2}".prop_map(|year| StoreMessage::SetFilters(Filters::default().with_year(year))),
        (1u32..20).prop_map(StoreMessage::SetPage),
    ]
}

proptest! {
    #[test]
    fn transitions_keep_invariants(messages in prop::collection::vec(message(), 1..40)) {
        let mut state = SearchState::default();
        let mut searched = false;

        for message in messages {
            let is_filter_change = matches!(message, StoreMessage::SetFilters(_));
            reduce(&mut state, message);

            prop_assert!(!(state.loading && state.error.is_some()));
            if state.error.is_some() {
                prop_assert!(state.movies.is_empty());
                prop_assert_eq!(state.total_results, 0);
            }
            if is_filter_change {
                prop_assert_eq!(state.current_page, 1);
            }
            prop_assert!(!searched || state.has_searched);
            searched = state.has_searched;
        }
    }
}
