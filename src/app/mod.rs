//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Host Event → Event → handle_event → AppState / store transitions → Actions
//!                 ↑                                                    ↓
//!                 └──────────── WebRequestResult ◄──── web_request ────┘
//! ```
//!
//! # Modules
//!
//! - [`store`]: search state and its closed set of transitions
//! - [`pagination`]: page counts, page window and navigation guard
//! - [`detail`]: detail view state and completion guard
//! - [`state`]: central state container, composite operations, view model
//! - [`handler`]: event processing
//! - [`actions`]: side effects returned to the runtime
//! - [`modes`]: input focus modes

pub mod actions;
pub mod detail;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;
pub mod store;

pub use actions::Action;
pub use detail::{DetailStatus, DetailView};
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
pub use store::{SearchState, StoreMessage};
