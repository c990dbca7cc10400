//! Outbound catalog requests and the context that routes their completions.
//!
//! Zellij delivers a finished web request as a `WebRequestResult` event that
//! echoes back a `BTreeMap<String, String>` supplied when the request was
//! issued. [`RequestContext`] is the typed form of that map: it tells the
//! handler whether a completion belongs to a search or a detail lookup, and
//! which sequence number it was issued under.

use crate::domain::{ReelsearchError, Result};
use std::collections::BTreeMap;

/// Marker stored under [`SOURCE_KEY`] so foreign completions are rejected.
const SOURCE: &str = "reelsearch";
const SOURCE_KEY: &str = "source";
const KIND_KEY: &str = "kind";
const SEQ_KEY: &str = "seq";
const PAGE_KEY: &str = "page";
const ID_KEY: &str = "id";

/// Typed context attached to every catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContext {
    /// A paginated search issued for `page`.
    Search {
        /// Search sequence number at issue time.
        seq: u64,
        /// 1-based page requested.
        page: u32,
    },
    /// A detail lookup for one catalog identifier.
    Detail {
        /// Detail sequence number at issue time.
        seq: u64,
        /// Catalog identifier requested.
        id: String,
    },
}

impl RequestContext {
    /// Encodes the context into the string map the host echoes back.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(SOURCE_KEY.to_string(), SOURCE.to_string());
        match self {
            Self::Search { seq, page } => {
                map.insert(KIND_KEY.to_string(), "search".to_string());
                map.insert(SEQ_KEY.to_string(), seq.to_string());
                map.insert(PAGE_KEY.to_string(), page.to_string());
            }
            Self::Detail { seq, id } => {
                map.insert(KIND_KEY.to_string(), "detail".to_string());
                map.insert(SEQ_KEY.to_string(), seq.to_string());
                map.insert(ID_KEY.to_string(), id.clone());
            }
        }
        map
    }

    /// Decodes a context map received with a `WebRequestResult`.
    ///
    /// # Errors
    ///
    /// Returns [`ReelsearchError::Context`] when the map was not produced by
    /// [`RequestContext::to_map`] or a field fails to parse.
    ///
    /// ```
    /// use reelsearch::catalog::RequestContext;
    ///
    /// let ctx = RequestContext::Search { seq: 4, page: 2 };
    /// assert_eq!(RequestContext::from_map(&ctx.to_map()).unwrap(), ctx);
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        if map.get(SOURCE_KEY).map(String::as_str) != Some(SOURCE) {
            return Err(ReelsearchError::Context("missing reelsearch marker".to_string()));
        }

        let seq = field(map, SEQ_KEY)?
            .parse::<u64>()
            .map_err(|e| ReelsearchError::Context(format!("bad seq: {e}")))?;

        match field(map, KIND_KEY)? {
            "search" => {
                let page = field(map, PAGE_KEY)?
                    .parse::<u32>()
                    .map_err(|e| ReelsearchError::Context(format!("bad page: {e}")))?;
                Ok(Self::Search { seq, page })
            }
            "detail" => Ok(Self::Detail {
                seq,
                id: field(map, ID_KEY)?.to_string(),
            }),
            other => Err(ReelsearchError::Context(format!("unknown kind: {other}"))),
        }
    }

    /// Sequence number the request was issued under.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::Search { seq, .. } | Self::Detail { seq, .. } => *seq,
        }
    }
}

fn field<'a>(map: &'a BTreeMap<String, String>, key: &str) -> Result<&'a str> {
    map.get(key)
        .map(String::as_str)
        .ok_or_else(|| ReelsearchError::Context(format!("missing {key}")))
}

/// A fully-built GET request ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Absolute URL including the query string.
    pub url: String,
    /// Routing context echoed back on completion.
    pub context: RequestContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_context_survives_host_echo() {
        let ctx = RequestContext::Detail {
            seq: 12,
            id: "tt0111161".to_string(),
        };
        let map = ctx.to_map();
        assert_eq!(map.get("kind").map(String::as_str), Some("detail"));
        assert_eq!(RequestContext::from_map(&map).unwrap(), ctx);
    }

    #[test]
    fn foreign_or_damaged_maps_are_rejected() {
        assert!(RequestContext::from_map(&BTreeMap::new()).is_err());

        let mut map = RequestContext::Search { seq: 1, page: 2 }.to_map();
        map.insert(PAGE_KEY.to_string(), "two".to_string());
        assert!(matches!(RequestContext::from_map(&map), Err(ReelsearchError::Context(_))));

        let mut map = RequestContext::Search { seq: 1, page: 2 }.to_map();
        map.insert(SOURCE_KEY.to_string(), "other-plugin".to_string());
        assert!(RequestContext::from_map(&map).is_err());
    }
}
