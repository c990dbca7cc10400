//! Event handling and state transition logic.
//!
//! The runtime translates host events (keys, mouse, web request completions,
//! permission answers) into [`Event`]s; [`handle_event`] applies them to
//! [`AppState`] and returns whether to re-render plus the actions to execute.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `PrevPage`, `NextPage`, `GoToPage`
//! - **Input**: `Char`, `Backspace`, `Submit`, `Escape`, `FocusSearch`
//! - **Filters**: `CycleType`, `EditYear`, `ClearFilters`
//! - **Detail view**: `OpenSelected`, `CloseDetail`, `Click`
//! - **System**: `CatalogResponse`, `PermissionsResult`, `Reset`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use reelsearch::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! for c in "alien".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (render, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), reelsearch::domain::ReelsearchError>(())
//! ```

use super::modes::InputMode;
use super::state::opened;
use crate::app::{Action, AppState};
use crate::catalog::RequestContext;
use crate::domain::error::Result;
use std::collections::BTreeMap;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Selects the next card (wraps).
    KeyDown,
    /// Selects the previous card (wraps).
    KeyUp,
    /// Goes to the previous page of results.
    PrevPage,
    /// Goes to the next page of results.
    NextPage,
    /// Goes to an explicit page.
    GoToPage(u32),

    /// Appends a character to the focused input.
    Char(char),
    /// Removes the last character from the focused input.
    Backspace,
    /// Enter: submits the search box, applies the year, or opens the
    /// selected card while browsing.
    Submit,
    /// Esc: closes the detail view or leaves the focused input.
    Escape,
    /// Moves focus to the search box.
    FocusSearch,

    /// Cycles the type facet: all → movie → series → all.
    CycleType,
    /// Starts editing the year facet.
    EditYear,
    /// Clears both facets.
    ClearFilters,

    /// Opens the detail view for the selected card.
    OpenSelected,
    /// Closes the detail view.
    CloseDetail,
    /// Left mouse click at a 1-indexed cell.
    Click { row: usize, col: usize },

    /// Returns to the initial state.
    Reset,
    /// Hides the plugin pane.
    CloseFocus,

    /// A web request issued by [`Action::Fetch`] completed.
    CatalogResponse {
        status: u16,
        body: Vec<u8>,
        /// The context map the request was issued with.
        context: BTreeMap<String, String>,
    },

    /// Answer to the `WebAccess` permission prompt.
    PermissionsResult { granted: bool },
}

/// Processes an event, mutates application state, and returns
/// `(should_render, actions)`.
///
/// # Errors
///
/// Returns [`ReelsearchError::Context`](crate::domain::ReelsearchError::Context)
/// when a web request completion carries a context map this plugin did not
/// produce.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    if state.detail.is_some() && blocked_by_detail(event) {
        return Ok((false, vec![]));
    }

    match event {
        Event::KeyDown => Ok((state.move_selection_down(), vec![])),
        Event::KeyUp => Ok((state.move_selection_up(), vec![])),
        Event::PrevPage => {
            let target = state.search.current_page.saturating_sub(1);
            Ok(rendered(state.navigate_to(target)))
        }
        Event::NextPage => {
            let target = state.search.current_page.saturating_add(1);
            Ok(rendered(state.navigate_to(target)))
        }
        Event::GoToPage(page) => Ok(rendered(state.navigate_to(*page))),
        Event::Char(c) => Ok((state.push_char(*c), vec![])),
        Event::Backspace => Ok((state.pop_char(), vec![])),
        Event::Submit => match state.input_mode {
            InputMode::Search => Ok((true, state.submit_query())),
            InputMode::Year => Ok((true, state.apply_year_edit())),
            InputMode::Browse => Ok(opened(state.open_selected())),
        },
        Event::Escape => {
            if state.close_detail() {
                return Ok((true, vec![]));
            }
            Ok((state.leave_input(), vec![]))
        }
        Event::FocusSearch => {
            state.focus_search();
            Ok((true, vec![]))
        }
        Event::CycleType => {
            let filters = state.search.filters.with_next_media_type();
            Ok((true, state.change_filters(filters)))
        }
        Event::EditYear => {
            state.begin_year_edit();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            if !state.search.filters.is_active() {
                return Ok((false, vec![]));
            }
            state.year_input.clear();
            Ok((true, state.change_filters(crate::domain::Filters::default())))
        }
        Event::OpenSelected => Ok(opened(state.open_selected())),
        Event::CloseDetail => Ok((state.close_detail(), vec![])),
        Event::Click { row, col } => Ok(state.click(*row, *col)),
        Event::Reset => {
            state.reset();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::CatalogResponse { status, body, context } => {
            let context = RequestContext::from_map(context)?;
            tracing::debug!(status, bytes = body.len(), ?context, "catalog response");
            Ok((state.apply_completion(&context, *status, body), vec![]))
        }
        Event::PermissionsResult { granted } => {
            state.set_web_access(*granted);
            Ok((true, vec![]))
        }
    }
}

/// Renders whenever actions were produced.
fn rendered(actions: Vec<Action>) -> (bool, Vec<Action>) {
    (!actions.is_empty(), actions)
}

/// Events swallowed while the detail view is open.
const fn blocked_by_detail(event: &Event) -> bool {
    !matches!(
        event,
        Event::Escape
            | Event::CloseDetail
            | Event::Click { .. }
            | Event::Reset
            | Event::CatalogResponse { .. }
            | Event::PermissionsResult { .. }
    )
}

/// Span field that omits response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::CatalogResponse { status, body, .. } => {
                write!(f, "CatalogResponse {{ status: {status}, bytes: {} }}", body.len())
            }
            other => write!(f, "{other:?}"),
        }
    }
}
