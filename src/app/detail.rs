//! Detail view state: a side-channel fetch keyed by catalog identifier.
//!
//! The view is independent of the search store. Opening it issues one detail
//! request; closing it simply drops the view. The in-flight request is not
//! cancelled, so completions are matched against the open view by sequence
//! number and identifier, and anything else is discarded.

use crate::domain::{DetailRecord, ResultItem};

/// Message shown when the detail record could not be fetched.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load movie details";

/// Renderable states of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus {
    Loading,
    Failed(String),
    Loaded(Box<DetailRecord>),
}

/// An open detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// The card that was opened; used for the header while loading.
    pub item: ResultItem,
    /// Detail sequence number of the request this view waits for.
    pub seq: u64,
    pub status: DetailStatus,
}

impl DetailView {
    #[must_use]
    pub const fn loading(item: ResultItem, seq: u64) -> Self {
        Self {
            item,
            seq,
            status: DetailStatus::Loading,
        }
    }

    /// Returns `true` if a completion for `(seq, id)` belongs to this view.
    #[must_use]
    pub fn accepts(&self, seq: u64, id: &str) -> bool {
        self.seq == seq && self.item.id == id
    }

    /// Applies a completion that [`accepts`](Self::accepts) returned `true` for.
    pub fn complete(&mut self, record: Option<DetailRecord>) {
        self.status = match record {
            Some(record) => DetailStatus::Loaded(Box::new(record)),
            None => DetailStatus::Failed(DETAIL_ERROR_MESSAGE.to_string()),
        };
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, DetailStatus::Loading)
    }
}
