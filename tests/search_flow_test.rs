//! End-to-end search flows driven through `handle_event`.

mod common;

use common::{complete, not_found_body, only_fetch, search_body, searched, state, submit};
use proptest::prelude::*;
use reelsearch::app::store::{EMPTY_QUERY_MESSAGE, WEB_ACCESS_DENIED_MESSAGE};
use reelsearch::app::{handle_event, Event, InputMode};
use reelsearch::catalog::RequestContext;
use reelsearch::domain::MediaType;

#[test]
fn batman_search_lands_on_first_page() {
    let mut state = state();
    let request = only_fetch(submit(&mut state, "batman"));
    assert!(state.search.loading);
    assert_eq!(request.context, RequestContext::Search { seq: 1, page: 1 });
    assert!(request.url.contains("s=batman&page=1"));

    assert!(complete(&mut state, &request, 200, search_body("Batman", 10, "57")));

    assert!(!state.search.loading);
    assert!(state.search.has_searched);
    assert_eq!(state.search.error, None);
    assert_eq!(state.search.movies.len(), 10);
    assert_eq!(state.search.current_page, 1);
    assert_eq!(state.search.total_results, 57);
    assert_eq!(state.search.total_pages(), 6);
    assert_eq!(state.input_mode, InputMode::Browse);
}

#[test]
fn no_match_surfaces_catalog_message() {
    let mut state = state();
    let request = only_fetch(submit(&mut state, "zzzqqqnomatch"));
    complete(&mut state, &request, 200, not_found_body("Movie not found!"));

    assert_eq!(state.search.error.as_deref(), Some("Movie not found!"));
    assert!(state.search.movies.is_empty());
    assert_eq!(state.search.total_results, 0);
    assert!(!state.search.loading);
}

proptest! {
    #[test]
    fn blank_queries_never_issue_requests(query in "[ \t]{0,8}") {
        let mut state = state();
        let actions = submit(&mut state, &query);

        prop_assert!(actions.is_empty());
        prop_assert_eq!(state.search.error.as_deref(), Some(EMPTY_QUERY_MESSAGE));
        prop_assert!(state.search.has_searched);
        prop_assert!(!state.search.loading);
        prop_assert_eq!(state.input_mode, InputMode::Search);
    }
}

#[test]
fn filter_change_returns_to_page_one() {
    let mut state = state();
    searched(&mut state, "batman", 10, "57");

    let page_three = only_fetch(handle_event(&mut state, &Event::GoToPage(3)).unwrap().1);
    assert_eq!(state.search.current_page, 3);
    complete(&mut state, &page_three, 200, search_body("batman", 10, "57"));
    assert_eq!(state.search.current_page, 3);

    let refiltered = only_fetch(handle_event(&mut state, &Event::CycleType).unwrap().1);
    assert_eq!(state.search.current_page, 1);
    assert_eq!(state.search.filters.media_type, Some(MediaType::Movie));
    assert!(refiltered.url.contains("page=1&type=movie"));
    assert!(matches!(refiltered.context, RequestContext::Search { page: 1, .. }));
}

#[test]
fn out_of_range_navigation_is_a_no_op() {
    let mut state = state();
    searched(&mut state, "batman", 10, "57");
    let seq = state.latest_search_seq();

    for page in [0, 1, 7] {
        let (render, actions) = handle_event(&mut state, &Event::GoToPage(page)).unwrap();
        assert!(!render, "page {page}");
        assert!(actions.is_empty(), "page {page}");
    }
    let (_, actions) = handle_event(&mut state, &Event::PrevPage).unwrap();
    assert!(actions.is_empty());

    assert_eq!(state.search.current_page, 1);
    assert_eq!(state.latest_search_seq(), seq);
}

#[test]
fn next_page_walks_forward_until_the_last() {
    let mut state = state();
    searched(&mut state, "batman", 10, "57");

    for expected in 2..=6 {
        let request = only_fetch(handle_event(&mut state, &Event::NextPage).unwrap().1);
        assert_eq!(state.search.current_page, expected);
        complete(&mut state, &request, 200, search_body("batman", 10, "57"));
    }

    let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
    assert!(actions.is_empty());
    assert_eq!(state.search.current_page, 6);
}

#[test]
fn navigation_waits_for_the_in_flight_page() {
    let mut state = state();
    searched(&mut state, "batman", 10, "57");

    only_fetch(handle_event(&mut state, &Event::NextPage).unwrap().1);
    let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
    assert!(actions.is_empty());
    assert_eq!(state.search.current_page, 2);
}

#[test]
fn stale_completion_is_ignored() {
    let mut state = state();
    searched(&mut state, "batman", 10, "57");

    let page_two = only_fetch(handle_event(&mut state, &Event::NextPage).unwrap().1);
    let refiltered = only_fetch(handle_event(&mut state, &Event::CycleType).unwrap().1);
    assert!(refiltered.context.seq() > page_two.context.seq());

    assert!(!complete(&mut state, &page_two, 200, search_body("stale", 10, "57")));
    assert!(state.search.loading);
    assert_eq!(state.search.current_page, 1);

    assert!(complete(&mut state, &refiltered, 200, search_body("fresh", 3, "3")));
    assert!(!state.search.loading);
    assert_eq!(state.search.movies.len(), 3);
    assert_eq!(state.search.movies[0].title, "fresh 1");
    assert_eq!(state.search.current_page, 1);
}

#[test]
fn filter_change_during_first_search_waits_for_it() {
    let mut state = state();
    only_fetch(submit(&mut state, "batman"));
    let (_, actions) = handle_event(&mut state, &Event::CycleType).unwrap();
    assert!(actions.is_empty());
    assert_eq!(state.search.filters.media_type, Some(MediaType::Movie));
}

#[test]
fn completion_after_reset_is_ignored() {
    let mut state = state();
    let request = only_fetch(submit(&mut state, "batman"));
    handle_event(&mut state, &Event::Reset).unwrap();

    assert!(!complete(&mut state, &request, 200, search_body("batman", 10, "57")));
    assert!(!state.search.has_searched);
    assert!(state.search.movies.is_empty());
    assert_eq!(state.input_mode, InputMode::Search);
}

#[test]
fn filters_before_first_search_do_not_fetch() {
    let mut state = state();
    let (render, actions) = handle_event(&mut state, &Event::CycleType).unwrap();
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.search.filters.media_type, Some(MediaType::Movie));

    let request = only_fetch(submit(&mut state, "alien"));
    assert!(request.url.ends_with("s=alien&page=1&type=movie"));
}

#[test]
fn year_edit_applies_on_enter_and_reverts_on_escape() {
    let mut state = state();
    searched(&mut state, "batman", 10, "57");

    handle_event(&mut state, &Event::EditYear).unwrap();
    for c in "1989".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    let request = only_fetch(handle_event(&mut state, &Event::Submit).unwrap().1);
    assert!(request.url.ends_with("&y=1989"));
    assert_eq!(state.search.filters.year, "1989");
    assert_eq!(state.input_mode, InputMode::Browse);
    complete(&mut state, &request, 200, search_body("batman", 4, "4"));

    handle_event(&mut state, &Event::EditYear).unwrap();
    handle_event(&mut state, &Event::Backspace).unwrap();
    handle_event(&mut state, &Event::Escape).unwrap();
    assert_eq!(state.year_input, "1989");
    assert_eq!(state.search.filters.year, "1989");
}

#[test]
fn clearing_filters_only_fetches_when_active() {
    let mut state = state();
    searched(&mut state, "batman", 10, "57");

    let (render, actions) = handle_event(&mut state, &Event::ClearFilters).unwrap();
    assert!(!render);
    assert!(actions.is_empty());

    let request = only_fetch(handle_event(&mut state, &Event::CycleType).unwrap().1);
    complete(&mut state, &request, 200, search_body("batman", 10, "20"));

    let request = only_fetch(handle_event(&mut state, &Event::ClearFilters).unwrap().1);
    assert!(!state.search.filters.is_active());
    assert!(!request.url.contains("type="));
}

#[test]
fn submit_is_ignored_while_loading() {
    let mut state = state();
    only_fetch(submit(&mut state, "batman"));
    state.focus_search();
    let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
    assert!(actions.is_empty());
}

#[test]
fn foreign_completion_is_an_error() {
    let mut state = state();
    let event = Event::CatalogResponse {
        status: 200,
        body: Vec::new(),
        context: std::collections::BTreeMap::new(),
    };
    assert!(handle_event(&mut state, &event).is_err());
}

#[test]
fn denied_web_access_fails_searches_without_fetching() {
    let mut state = state();
    handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();

    assert!(submit(&mut state, "batman").is_empty());
    assert!(!state.search.loading);
    assert!(state.search.has_searched);
    assert_eq!(state.search.error.as_deref(), Some(WEB_ACCESS_DENIED_MESSAGE));

    assert!(submit(&mut state, "alien").is_empty());
    assert_eq!(state.search.search_query, "alien");
    assert!(!state.search.loading);
}

#[test]
fn denial_fails_the_search_in_flight() {
    let mut state = state();
    let request = only_fetch(submit(&mut state, "batman"));
    handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();

    assert!(!state.search.loading);
    assert_eq!(state.search.error.as_deref(), Some(WEB_ACCESS_DENIED_MESSAGE));
    assert!(!complete(&mut state, &request, 200, search_body("batman", 10, "57")));
}

#[test]
fn granted_web_access_keeps_fetching() {
    let mut state = state();
    handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
    only_fetch(submit(&mut state, "batman"));
    assert!(state.search.loading);
}
