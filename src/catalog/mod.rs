//! Catalog boundary.
//!
//! - [`client`]: request construction and completion normalization
//! - [`request`]: request/context types routed through the host

pub mod client;
pub mod request;

pub use client::{CatalogClient, SearchResult, DEFAULT_BASE_URL, SEARCH_RETRY_MESSAGE};
pub use request::{CatalogRequest, RequestContext};
