//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use reelsearch::app::{handle_event, Action, AppState, Event};
use reelsearch::catalog::{CatalogClient, CatalogRequest};
use reelsearch::Theme;
use serde_json::json;

pub const BASE_URL: &str = "https://www.omdbapi.com/";

/// A state with an API key so status lines are not warnings.
pub fn state() -> AppState {
    let mut state = AppState::new(CatalogClient::new(BASE_URL, "test-key"), Theme::default());
    state.set_viewport(40, 120);
    state
}

/// Types `query` into the search box and submits it.
pub fn submit(state: &mut AppState, query: &str) -> Vec<Action> {
    state.focus_search();
    state.query_input.clear();
    for c in query.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
    handle_event(state, &Event::Submit).unwrap().1
}

/// Unwraps the single fetch in `actions`.
pub fn only_fetch(actions: Vec<Action>) -> CatalogRequest {
    match actions.as_slice() {
        [Action::Fetch(request)] => request.clone(),
        other => panic!("expected one fetch, got {other:?}"),
    }
}

/// Delivers a completion for `request` the way the host would.
pub fn complete(state: &mut AppState, request: &CatalogRequest, status: u16, body: Vec<u8>) -> bool {
    let event = Event::CatalogResponse {
        status,
        body,
        context: request.context.to_map(),
    };
    handle_event(state, &event).unwrap().0
}

/// `count` movie items named "<prefix> <n>".
pub fn search_body(prefix: &str, count: usize, total: &str) -> Vec<u8> {
    let items: Vec<_> = (1..=count)
        .map(|n| {
            json!({
                "Title": format!("{prefix} {n}"),
                "Year": format!("{}", 1980 + n),
                "imdbID": format!("tt{:07}", n),
                "Type": "movie",
                "Poster": if n % 2 == 0 { "N/A".to_string() } else { format!("https://img.example/{n}.jpg") },
            })
        })
        .collect();

    json!({ "Search": items, "totalResults": total, "Response": "True" })
        .to_string()
        .into_bytes()
}

/// One item per `(id, title, year)`, all movies without posters.
pub fn items_body(items: &[(&str, &str, &str)], total: &str) -> Vec<u8> {
    let items: Vec<_> = items
        .iter()
        .map(|(id, title, year)| json!({ "Title": title, "Year": year, "imdbID": id, "Type": "movie", "Poster": "N/A" }))
        .collect();

    json!({ "Search": items, "totalResults": total, "Response": "True" })
        .to_string()
        .into_bytes()
}

pub fn not_found_body(message: &str) -> Vec<u8> {
    json!({ "Response": "False", "Error": message }).to_string().into_bytes()
}

/// A detail record with a mix of present and "N/A" fields.
pub fn shawshank_body() -> Vec<u8> {
    json!({
        "Title": "The Shawshank Redemption",
        "Year": "1994",
        "Rated": "R",
        "Released": "14 Oct 1994",
        "Runtime": "142 min",
        "Genre": "Drama",
        "Director": "Frank Darabont",
        "Writer": "N/A",
        "Actors": "Tim Robbins, Morgan Freeman, Bob Gunton",
        "Plot": "Two imprisoned men bond over a number of years.",
        "Language": "English",
        "Country": "United States",
        "Awards": "N/A",
        "Poster": "N/A",
        "Ratings": [
            { "Source": "Internet Movie Database", "Value": "9.3/10" },
            { "Source": "Metacritic", "Value": "N/A" }
        ],
        "Metascore": "N/A",
        "imdbRating": "9.3",
        "imdbVotes": "2,900,000",
        "imdbID": "tt0111161",
        "Type": "movie",
        "BoxOffice": "N/A",
        "Response": "True"
    })
    .to_string()
    .into_bytes()
}

/// Submits `query` and completes it with `count` items of `total`.
pub fn searched(state: &mut AppState, query: &str, count: usize, total: &str) {
    let request = only_fetch(submit(state, query));
    assert!(complete(state, &request, 200, search_body(query, count, total)));
}
