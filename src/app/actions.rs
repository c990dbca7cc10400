//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij. It returns a `Vec<Action>` and the
//! runtime in `main.rs` turns each one into a host call, which keeps every
//! state transition testable without a host.
//!
//! # Example
//!
//! ```rust
//! use reelsearch::app::Action;
//! use reelsearch::catalog::CatalogClient;
//!
//! let client = CatalogClient::new("https://www.omdbapi.com/", "key");
//! let actions = vec![Action::Fetch(client.detail_request("tt0111161", 1))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::catalog::CatalogRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave (`q` while browsing).
    CloseFocus,

    /// Issues a GET request to the catalog.
    ///
    /// The request's context map comes back with the `WebRequestResult`
    /// event so the completion can be routed.
    Fetch(CatalogRequest),
}
