//! Request construction and response normalization against OMDb payloads.

mod common;

use common::{not_found_body, search_body, shawshank_body, BASE_URL};
use reelsearch::catalog::{CatalogClient, RequestContext, SEARCH_RETRY_MESSAGE};
use reelsearch::domain::{Filters, MediaType};

fn client() -> CatalogClient {
    CatalogClient::new(BASE_URL, "k3y")
}

#[test]
fn search_url_carries_filters_and_encodes_query() {
    let filters = Filters {
        media_type: Some(MediaType::Series),
        year: " 1999 ".to_string(),
    };
    let request = client().search_request("star wars", 3, &filters, 9);

    assert_eq!(
        request.url,
        "https://www.omdbapi.com/?apikey=k3y&s=star%20wars&page=3&type=series&y=1999"
    );
    assert_eq!(request.context, RequestContext::Search { seq: 9, page: 3 });
}

#[test]
fn blank_year_is_omitted() {
    let filters = Filters::default().with_year("   ");
    let request = client().search_request("alien", 1, &filters, 1);
    assert!(!request.url.contains("y="));
    assert!(!request.url.contains("type="));
}

#[test]
fn detail_url_requests_full_plot() {
    let request = client().detail_request("tt0111161", 2);
    assert_eq!(request.url, "https://www.omdbapi.com/?apikey=k3y&i=tt0111161&plot=full");
    assert_eq!(
        request.context,
        RequestContext::Detail {
            seq: 2,
            id: "tt0111161".to_string()
        }
    );
}

#[test]
fn batman_first_page() {
    let result = CatalogClient::normalize_search(200, &search_body("Batman", 10, "57"));

    assert!(result.ok);
    assert_eq!(result.items.len(), 10);
    assert_eq!(result.total_results, 57);
    assert_eq!(result.message, None);
    assert_eq!(result.items[0].title, "Batman 1");
    assert!(result.items[0].poster.is_some());
    assert_eq!(result.items[1].poster, None, "N/A poster decodes to None");
}

#[test]
fn remote_not_found_keeps_catalog_message() {
    let result = CatalogClient::normalize_search(200, &not_found_body("Movie not found!"));

    assert!(!result.ok);
    assert!(result.items.is_empty());
    assert_eq!(result.total_results, 0);
    assert_eq!(result.message.as_deref(), Some("Movie not found!"));
}

#[test]
fn transport_and_decode_failures_use_retry_message() {
    let cases: [(u16, &[u8]); 4] = [
        (400, b""),
        (503, br#"{"Response":"True"}"#),
        (200, b"<html>gateway timeout</html>"),
        (200, br#"{"Response":"True","Search":[],"totalResults":"lots"}"#),
    ];

    for (status, body) in cases {
        let result = CatalogClient::normalize_search(status, body);
        assert!(!result.ok, "status {status}");
        assert_eq!(result.message.as_deref(), Some(SEARCH_RETRY_MESSAGE));
        assert_eq!(result.total_results, 0);
    }
}

#[test]
fn detail_decodes_sentinels_as_absent() {
    let record = CatalogClient::normalize_details(200, &shawshank_body()).unwrap();

    assert_eq!(record.id, "tt0111161");
    assert_eq!(record.genres, vec!["Drama"]);
    assert_eq!(record.writer, None);
    assert_eq!(record.awards, None);
    assert_eq!(record.poster, None);
    assert_eq!(record.box_office, None);
    assert_eq!(record.imdb_rating.as_deref(), Some("9.3"));
    assert_eq!(record.ratings.len(), 2);
    assert_eq!(record.visible_ratings().count(), 1);
}

#[test]
fn detail_failures_yield_none() {
    assert!(CatalogClient::normalize_details(400, b"").is_none());
    assert!(CatalogClient::normalize_details(200, b"not json").is_none());
    assert!(CatalogClient::normalize_details(200, &not_found_body("Incorrect IMDb ID.")).is_none());
}

#[test]
fn unknown_media_type_decodes_as_other() {
    let body = br#"{"Response":"True","totalResults":"1","Search":[
        {"Title":"Batman: Arkham City","Year":"2011","imdbID":"tt1568322","Type":"game","Poster":"N/A"}
    ]}"#;
    let result = CatalogClient::normalize_search(200, body);
    assert_eq!(result.items[0].media_type, MediaType::Other);
}
