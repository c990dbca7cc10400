//! OMDb catalog client: request construction and response normalization.
//!
//! The client never performs I/O itself. It builds [`CatalogRequest`]s that
//! the plugin runtime hands to Zellij's `web_request`, and it turns the raw
//! `(status, body)` of each completion into a value the state machine can
//! consume without branching on error types:
//!
//! - searches always yield a [`SearchResult`], with every failure mode
//!   (transport, HTTP status, decode, remote "no results") folded into the
//!   same `ok: false` shape;
//! - detail lookups yield `Some(DetailRecord)` or `None`, and the cause of a
//!   `None` only goes to the log.

use super::request::{CatalogRequest, RequestContext};
use crate::domain::{DetailRecord, Filters, ReelsearchError, Result, ResultItem};
use serde::Deserialize;

/// Default catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Message used for transport, status and decode failures of a search.
pub const SEARCH_RETRY_MESSAGE: &str = "Failed to fetch movies. Please try again.";

/// Outcome of one search, successful or not.
///
/// Failures always carry no items and a zero total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub items: Vec<ResultItem>,
    pub total_results: u32,
    pub ok: bool,
    /// Remote or transport message; `None` when the catalog gave no reason.
    pub message: Option<String>,
}

impl SearchResult {
    #[must_use]
    pub const fn success(items: Vec<ResultItem>, total_results: u32) -> Self {
        Self {
            items,
            total_results,
            ok: true,
            message: None,
        }
    }

    #[must_use]
    pub const fn failure(message: Option<String>) -> Self {
        Self {
            items: Vec::new(),
            total_results: 0,
            ok: false,
            message,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<ResultItem>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

fn is_true(flag: &str) -> bool {
    flag.trim().eq_ignore_ascii_case("true")
}

const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Builds catalog requests and normalizes their completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogClient {
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    /// Creates a client for `base_url` authenticated with `api_key`.
    ///
    /// An empty key is accepted: requests are still built and the catalog
    /// rejects them, which surfaces as an ordinary failed search.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Returns `true` when an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    fn url_with(&self, params: &[(&str, &str)]) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        let query = std::iter::once(("apikey", self.api_key.as_str()))
            .chain(params.iter().copied())
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}{separator}{query}", self.base_url)
    }

    /// Builds a paginated search request.
    ///
    /// The query is trimmed; `type` and `y` are omitted when the filter is
    /// unset or blank. Callers must not pass a blank query.
    ///
    /// ```
    /// use reelsearch::catalog::CatalogClient;
    /// use reelsearch::domain::Filters;
    ///
    /// let client = CatalogClient::new("https://www.omdbapi.com/", "k");
    /// let request = client.search_request(" alien ", 2, &Filters::default(), 1);
    /// assert_eq!(request.url, "https://www.omdbapi.com/?apikey=k&s=alien&page=2");
    /// ```
    #[must_use]
    pub fn search_request(&self, query: &str, page: u32, filters: &Filters, seq: u64) -> CatalogRequest {
        let page_param = page.to_string();
        let mut params = vec![("s", query.trim()), ("page", page_param.as_str())];

        if let Some(media_type) = filters.media_type.and_then(|t| t.as_param()) {
            params.push(("type", media_type));
        }
        if let Some(year) = filters.year_param() {
            params.push(("y", year));
        }

        let url = self.url_with(&params);
        tracing::debug!(page, seq, filtered = filters.is_active(), "built search request");

        CatalogRequest {
            url,
            context: RequestContext::Search { seq, page },
        }
    }

    /// Builds a full-plot detail request for one identifier.
    #[must_use]
    pub fn detail_request(&self, id: &str, seq: u64) -> CatalogRequest {
        let url = self.url_with(&[("i", id), ("plot", "full")]);
        tracing::debug!(id = %id, seq, "built detail request");

        CatalogRequest {
            url,
            context: RequestContext::Detail {
                seq,
                id: id.to_string(),
            },
        }
    }

    /// Normalizes a completed search into a [`SearchResult`].
    ///
    /// Never fails: HTTP, decode and contract errors become
    /// [`SEARCH_RETRY_MESSAGE`]; a remote `"Response": "False"` keeps the
    /// catalog's own `Error` text.
    #[must_use]
    pub fn normalize_search(status: u16, body: &[u8]) -> SearchResult {
        match Self::decode_search(status, body) {
            Ok(result) => {
                if !result.ok {
                    tracing::debug!(message = ?result.message, "catalog reported no results");
                }
                result
            }
            Err(e) => {
                tracing::warn!(status, error = %e, "search request failed");
                SearchResult::failure(Some(SEARCH_RETRY_MESSAGE.to_string()))
            }
        }
    }

    fn decode_search(status: u16, body: &[u8]) -> Result<SearchResult> {
        if !is_success(status) {
            return Err(ReelsearchError::Http { status });
        }

        let payload: SearchPayload = serde_json::from_slice(body)?;
        if !is_true(&payload.response) {
            return Ok(SearchResult::failure(payload.error));
        }

        let raw_total = payload
            .total_results
            .ok_or_else(|| ReelsearchError::Payload("missing totalResults".to_string()))?;
        let total_results = raw_total
            .trim()
            .parse::<u32>()
            .map_err(|e| ReelsearchError::Payload(format!("totalResults {raw_total:?}: {e}")))?;

        Ok(SearchResult::success(payload.search, total_results))
    }

    /// Normalizes a completed detail lookup.
    ///
    /// Returns `None` on HTTP failure, undecodable body or a remote
    /// "not found"; the reason is logged.
    #[must_use]
    pub fn normalize_details(status: u16, body: &[u8]) -> Option<DetailRecord> {
        match Self::decode_details(status, body) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(status, error = %e, "detail request failed");
                None
            }
        }
    }

    fn decode_details(status: u16, body: &[u8]) -> Result<DetailRecord> {
        if !is_success(status) {
            return Err(ReelsearchError::Http { status });
        }

        let value: serde_json::Value = serde_json::from_slice(body)?;
        let envelope = Envelope::deserialize(&value)?;
        if !is_true(&envelope.response) {
            return Err(ReelsearchError::Payload(
                envelope.error.unwrap_or_else(|| "not found".to_string()),
            ));
        }

        Ok(serde_json::from_value(value)?)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, String::new())
    }
}
