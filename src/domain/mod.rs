//! Domain layer for the reelsearch plugin.
//!
//! Core catalog types and the crate error, independent of Zellij APIs and of
//! the wire details of the catalog request/response cycle.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Result items, detail records, filters and sentinel decoding
//!
//! # Examples
//!
//! ```
//! use reelsearch::domain::{Filters, MediaType};
//!
//! let filters = Filters::default().with_next_media_type();
//! assert_eq!(filters.media_type, Some(MediaType::Movie));
//! ```

pub mod error;
pub mod movie;

pub use error::{ReelsearchError, Result};
pub use movie::{DetailRecord, Filters, MediaType, Rating, ResultItem};
