//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready text:
//! every absent catalog value has already been dropped or replaced, so the
//! components print what they are given.
//!
//! # Example
//!
//! ```rust
//! use reelsearch::app::AppState;
//! use reelsearch::ui::viewmodel::BodyView;
//!
//! let state = AppState::default();
//! let vm = state.compute_viewmodel(24, 80);
//! assert!(matches!(vm.body, BodyView::Welcome(_)));
//! assert!(vm.pager.is_none());
//! ```

use crate::app::pagination::PageMarker;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub filters: FilterBarInfo,
    /// Text shown above the result list ("Found 57 results", notices).
    pub status: StatusLine,
    pub body: BodyView,
    /// Present only when there is more than one page of results.
    pub pager: Option<PagerInfo>,
    pub footer: FooterInfo,
    /// Present while the detail view is open; drawn over everything else.
    pub detail: Option<DetailViewModel>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Search box state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Text in the input buffer (not necessarily submitted yet).
    pub query: String,
    /// Whether keystrokes currently go to the box.
    pub focused: bool,
    /// Shown while a search is in flight.
    pub loading: bool,
}

/// Filter facets rendered as chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// "All Types", "Movie" or "TV Series".
    pub type_label: String,
    /// Year text; the edit buffer while editing.
    pub year: String,
    pub editing_year: bool,
    /// Whether the "clear" hint is shown.
    pub active: bool,
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

/// Centered two-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Error panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub title: String,
    pub message: String,
    /// Recovery hint ("Press Ctrl+r to start over").
    pub hint: String,
}

/// What occupies the result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    /// Nothing has been searched yet.
    Welcome(EmptyState),
    /// A search is in flight; holds the number of placeholder rows.
    Skeleton(usize),
    Error(ErrorPanel),
    /// The search succeeded with zero items.
    Empty(EmptyState),
    Results(ResultsView),
}

/// The visible window of result rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub items: Vec<DisplayItem>,
    /// Index of the selected row within `items`.
    pub selected_index: usize,
    /// Width of the title column.
    pub title_width: usize,
}

/// Display information for one result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the column width.
    pub title: String,
    pub year: String,
    pub type_label: String,
    /// "poster" or "No Image".
    pub poster_label: String,
    pub has_poster: bool,
    pub is_selected: bool,
    /// Character ranges to highlight for query matches.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Pager state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    pub markers: Vec<PageMarker>,
    pub current_page: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// "Page 2 of 6 (57 results)".
    pub summary: String,
}

/// Styling hint for one detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Dim,
    Heading,
    Error,
    Rating,
}

/// One line of the detail box body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    /// Optional left-hand label ("Director").
    pub label: Option<String>,
    pub text: String,
    pub style: LineStyle,
}

impl DetailLine {
    #[must_use]
    pub fn plain(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            label: None,
            text: text.into(),
            style,
        }
    }

    #[must_use]
    pub fn labeled(label: &str, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.to_string()),
            text: text.into(),
            style: LineStyle::Normal,
        }
    }

    #[must_use]
    pub fn blank() -> Self {
        Self::plain(String::new(), LineStyle::Normal)
    }
}

/// Detail modal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub title: String,
    /// "Movie · 1994 · R · 142 min"; empty while loading.
    pub subtitle: String,
    /// Body lines, already wrapped to the box width.
    pub lines: Vec<DetailLine>,
}
