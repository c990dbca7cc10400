//! Application state and view model computation.
//!
//! [`AppState`] is the single state container for the plugin. It owns the
//! search store, the optional detail view, and the UI focus. Its composite
//! operations coordinate the store with the catalog client: each one applies
//! store transitions and returns the [`Action`]s the runtime must execute.
//!
//! # Request sequencing
//!
//! Completions arrive asynchronously and in any order. Every search issued
//! bumps a search sequence number, and only a completion carrying the latest
//! number is applied; everything older is dropped. Detail lookups are guarded
//! the same way through [`DetailView::accepts`].
//!
//! # Example
//!
//! ```rust
//! use reelsearch::app::{Action, AppState};
//!
//! let mut state = AppState::default();
//! state.query_input = "batman".to_string();
//! let actions = state.submit_query();
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! assert!(state.search.loading);
//! ```

use super::detail::{DetailStatus, DetailView};
use super::modes::InputMode;
use super::pagination::{can_navigate, page_window};
use super::store::{
    reduce, SearchState, StoreMessage, EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE, PAGE_SIZE, WEB_ACCESS_DENIED_MESSAGE,
};
use super::Action;
use crate::catalog::{CatalogClient, RequestContext};
use crate::domain::{DetailRecord, Filters};
use crate::ui::helpers::{group_thousands, truncate, wrap};
use crate::ui::layout::{Layout, SEARCH_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, DetailLine, DetailViewModel, DisplayItem, EmptyState, ErrorPanel, FilterBarInfo, FooterInfo,
    HeaderInfo, LineStyle, PagerInfo, ResultsView, SearchBarInfo, StatusKind, StatusLine, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

const YEAR_COLUMN_WIDTH: usize = 11;
const TYPE_COLUMN_WIDTH: usize = 11;
const POSTER_COLUMN_WIDTH: usize = 9;
const MARKER_WIDTH: usize = 2;
const MIN_TITLE_WIDTH: usize = 12;
/// Label column inside the detail box.
const DETAIL_LABEL_WIDTH: usize = 12;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search store; only mutated through [`reduce`].
    pub search: SearchState,
    pub client: CatalogClient,
    /// Open detail view, if any.
    pub detail: Option<DetailView>,
    pub input_mode: InputMode,
    /// Search box contents. Submitted with Enter.
    pub query_input: String,
    /// Year filter edit buffer.
    pub year_input: String,
    /// Zero-based index of the selected card within `search.movies`.
    pub selected_index: usize,
    pub theme: Theme,
    /// Outcome of the `WebAccess` permission prompt; `None` until answered.
    pub web_access: Option<bool>,
    /// Terminal size seen by the last render, used for hit-testing clicks.
    pub viewport: Layout,
    search_seq: u64,
    detail_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CatalogClient::default(), Theme::default())
    }
}

impl AppState {
    #[must_use]
    pub fn new(client: CatalogClient, theme: Theme) -> Self {
        Self {
            search: SearchState::default(),
            client,
            detail: None,
            input_mode: InputMode::default(),
            query_input: String::new(),
            year_input: String::new(),
            selected_index: 0,
            theme,
            web_access: None,
            viewport: Layout::new(0, 0),
            search_seq: 0,
            detail_seq: 0,
        }
    }

    /// Sequence number of the most recently issued search.
    #[must_use]
    pub const fn latest_search_seq(&self) -> u64 {
        self.search_seq
    }

    /// Records the terminal size of the frame about to be drawn.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = Layout::new(rows, cols);
    }

    // ----- search ---------------------------------------------------------

    /// Runs a search for `query` at `page` with the current filters.
    ///
    /// A blank query fails immediately with [`EMPTY_QUERY_MESSAGE`] and issues
    /// nothing. So does any query once web access was denied, since the host
    /// drops those requests without ever completing them. Either way the
    /// sequence number moves on, so a completion still in flight can no longer
    /// overwrite the new outcome.
    pub fn perform_search(&mut self, query: &str, page: u32) -> Vec<Action> {
        self.search_seq += 1;
        let _span = tracing::debug_span!("perform_search", seq = self.search_seq, page).entered();

        if query.trim().is_empty() {
            tracing::debug!("blank query rejected");
            reduce(&mut self.search, StoreMessage::SearchFailed(EMPTY_QUERY_MESSAGE.to_string()));
            return vec![];
        }
        if self.web_access == Some(false) {
            tracing::warn!("search rejected without web access");
            reduce(&mut self.search, StoreMessage::SearchFailed(WEB_ACCESS_DENIED_MESSAGE.to_string()));
            return vec![];
        }

        reduce(&mut self.search, StoreMessage::BeginSearch);
        let request = self
            .client
            .search_request(query, page, &self.search.filters, self.search_seq);
        vec![Action::Fetch(request)]
    }

    /// Submits the search box: stores the query and searches page 1.
    ///
    /// Ignored while a search is loading, matching the disabled input.
    pub fn submit_query(&mut self) -> Vec<Action> {
        if self.search.loading {
            tracing::debug!("submit ignored while loading");
            return vec![];
        }

        let query = self.query_input.trim().to_string();
        reduce(&mut self.search, StoreMessage::SetQuery(query.clone()));
        if !query.is_empty() {
            self.input_mode = InputMode::Browse;
        }
        self.scroll_to_top();
        self.perform_search(&query, 1)
    }

    /// Replaces the filter facets.
    ///
    /// The page goes back to 1; when a search is already active it is re-run
    /// with the new facets. Identical filters are a no-op.
    pub fn change_filters(&mut self, filters: Filters) -> Vec<Action> {
        if filters == self.search.filters {
            return vec![];
        }

        tracing::debug!(media_type = ?filters.media_type, year = %filters.year, "filters changed");
        reduce(&mut self.search, StoreMessage::SetFilters(filters));
        self.scroll_to_top();

        if self.search.has_active_search() {
            let query = self.search.search_query.clone();
            self.perform_search(&query, 1)
        } else {
            vec![]
        }
    }

    /// Moves to `page` and re-runs the active query there.
    ///
    /// No-op for page 0, pages past the last, the current page, and while a
    /// search is loading.
    pub fn navigate_to(&mut self, page: u32) -> Vec<Action> {
        let current = self.search.current_page;
        if self.search.loading || !can_navigate(page, current, self.search.total_pages()) {
            tracing::debug!(page, current, loading = self.search.loading, "page change ignored");
            return vec![];
        }

        reduce(&mut self.search, StoreMessage::SetPage(page));
        self.scroll_to_top();
        let query = self.search.search_query.clone();
        self.perform_search(&query, page)
    }

    /// Back to the initial state: store, detail view, buffers and focus.
    pub fn reset(&mut self) {
        tracing::debug!("reset");
        reduce(&mut self.search, StoreMessage::Reset);
        self.search_seq += 1;
        self.detail = None;
        self.query_input.clear();
        self.year_input.clear();
        self.input_mode = InputMode::default();
        self.selected_index = 0;
    }

    // ----- input buffers --------------------------------------------------

    pub fn push_char(&mut self, c: char) -> bool {
        match self.input_mode {
            InputMode::Search => self.query_input.push(c),
            InputMode::Year => self.year_input.push(c),
            InputMode::Browse => return false,
        }
        true
    }

    pub fn pop_char(&mut self) -> bool {
        match self.input_mode {
            InputMode::Search => self.query_input.pop().is_some(),
            InputMode::Year => self.year_input.pop().is_some(),
            InputMode::Browse => false,
        }
    }

    pub fn focus_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn begin_year_edit(&mut self) {
        self.year_input.clone_from(&self.search.filters.year);
        self.input_mode = InputMode::Year;
    }

    /// Applies the year buffer as the new year facet.
    pub fn apply_year_edit(&mut self) -> Vec<Action> {
        self.input_mode = InputMode::Browse;
        let filters = self.search.filters.with_year(self.year_input.trim());
        self.change_filters(filters)
    }

    /// Leaves an input field. A year edit is discarded.
    pub fn leave_input(&mut self) -> bool {
        match self.input_mode {
            InputMode::Browse => false,
            InputMode::Search => {
                self.input_mode = InputMode::Browse;
                true
            }
            InputMode::Year => {
                self.year_input.clone_from(&self.search.filters.year);
                self.input_mode = InputMode::Browse;
                true
            }
        }
    }

    // ----- selection ------------------------------------------------------

    fn results_visible(&self) -> bool {
        !self.search.loading && self.search.error.is_none() && !self.search.movies.is_empty()
    }

    pub fn move_selection_down(&mut self) -> bool {
        if !self.results_visible() {
            return false;
        }
        self.selected_index = (self.selected_index + 1) % self.search.movies.len();
        true
    }

    pub fn move_selection_up(&mut self) -> bool {
        if !self.results_visible() {
            return false;
        }
        if self.selected_index == 0 {
            self.selected_index = self.search.movies.len() - 1;
        } else {
            self.selected_index -= 1;
        }
        true
    }

    fn scroll_to_top(&mut self) {
        self.selected_index = 0;
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.search.movies.len().saturating_sub(1));
    }

    /// Index range of the cards that fit in `capacity` rows, centered on the
    /// selection.
    fn visible_window(&self, capacity: usize) -> (usize, usize) {
        let len = self.search.movies.len();
        let mut start = self.selected_index.saturating_sub(capacity / 2);
        let end = (start + capacity).min(len);

        if end - start < capacity && len >= capacity {
            start = end.saturating_sub(capacity);
        }
        (start, end)
    }

    // ----- detail view ----------------------------------------------------

    /// Opens the detail view for the card at `index` and requests its record.
    ///
    /// Without web access the view opens already failed. Returns `None` when
    /// there is no card at `index`.
    pub fn open_detail(&mut self, index: usize) -> Option<Vec<Action>> {
        let item = self.search.movies.get(index).cloned()?;

        self.selected_index = index;
        self.detail_seq += 1;
        tracing::debug!(id = %item.id, seq = self.detail_seq, "opening detail view");

        let view = self.detail.insert(DetailView::loading(item, self.detail_seq));
        if self.web_access == Some(false) {
            tracing::warn!("detail lookup rejected without web access");
            view.complete(None);
            return Some(vec![]);
        }
        Some(vec![Action::Fetch(self.client.detail_request(&view.item.id, self.detail_seq))])
    }

    pub fn open_selected(&mut self) -> Option<Vec<Action>> {
        if !self.results_visible() {
            return None;
        }
        self.open_detail(self.selected_index)
    }

    /// Records the answer to the `WebAccess` prompt.
    ///
    /// A denial fails whatever is still loading: the host never completes
    /// requests from a plugin without the permission.
    pub fn set_web_access(&mut self, granted: bool) {
        self.web_access = Some(granted);
        if granted {
            return;
        }

        tracing::warn!("web access permission denied");
        if self.search.loading {
            self.search_seq += 1;
            reduce(&mut self.search, StoreMessage::SearchFailed(WEB_ACCESS_DENIED_MESSAGE.to_string()));
        }
        if let Some(view) = self.detail.as_mut().filter(|view| view.is_loading()) {
            view.complete(None);
        }
    }

    /// Closes the detail view. Returns `true` if one was open.
    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some()
    }

    // ----- completions ----------------------------------------------------

    /// Applies a catalog completion. Returns `true` if anything changed.
    pub fn apply_completion(&mut self, context: &RequestContext, status: u16, body: &[u8]) -> bool {
        match context {
            RequestContext::Search { seq, page } => self.apply_search_completion(*seq, *page, status, body),
            RequestContext::Detail { seq, id } => self.apply_detail_completion(*seq, id, status, body),
        }
    }

    fn apply_search_completion(&mut self, seq: u64, page: u32, status: u16, body: &[u8]) -> bool {
        if seq != self.search_seq {
            tracing::debug!(seq, latest = self.search_seq, "stale search completion dropped");
            return false;
        }

        let result = CatalogClient::normalize_search(status, body);
        if result.ok {
            reduce(
                &mut self.search,
                StoreMessage::SearchSucceeded {
                    items: result.items,
                    total_results: result.total_results,
                    page,
                },
            );
        } else {
            let message = result.message.unwrap_or_else(|| NO_RESULTS_MESSAGE.to_string());
            reduce(&mut self.search, StoreMessage::SearchFailed(message));
        }
        self.clamp_selection();
        true
    }

    fn apply_detail_completion(&mut self, seq: u64, id: &str, status: u16, body: &[u8]) -> bool {
        match self.detail.as_mut() {
            Some(view) if view.accepts(seq, id) => {
                view.complete(CatalogClient::normalize_details(status, body));
                true
            }
            _ => {
                tracing::debug!(seq, id = %id, "detail completion for closed view dropped");
                false
            }
        }
    }

    // ----- mouse ----------------------------------------------------------

    /// Handles a left click at a 1-indexed screen cell.
    ///
    /// With the detail view open, a click on `[x]` or outside the box closes
    /// it. Otherwise a click on a card opens its detail view and a click on
    /// the search box focuses it.
    pub fn click(&mut self, row: usize, col: usize) -> (bool, Vec<Action>) {
        let layout = self.viewport;

        if self.detail.is_some() {
            let outside = !layout.detail_box().contains(row, col);
            if outside || layout.detail_close_control().contains(row, col) {
                return (self.close_detail(), vec![]);
            }
            return (false, vec![]);
        }

        if (SEARCH_ROW..SEARCH_ROW + 3).contains(&row) {
            self.focus_search();
            return (true, vec![]);
        }

        if !self.results_visible() {
            return (false, vec![]);
        }

        let Some(slot) = layout.list_slot(row) else {
            return (false, vec![]);
        };
        let (start, end) = self.visible_window(layout.list_capacity());
        let index = start + slot;
        if index >= end {
            return (false, vec![]);
        }

        opened(self.open_detail(index))
    }

    // ----- view model -----------------------------------------------------

    /// Computes a renderable view model for a `rows` x `cols` terminal.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = Layout::new(rows, cols);

        UIViewModel {
            header: HeaderInfo {
                title: " Movie & TV Search ".to_string(),
            },
            search_bar: SearchBarInfo {
                query: self.query_input.clone(),
                focused: self.input_mode == InputMode::Search && self.detail.is_none(),
                loading: self.search.loading,
            },
            filters: self.compute_filter_bar(),
            status: self.compute_status(),
            body: self.compute_body(&layout),
            pager: self.compute_pager(),
            footer: self.compute_footer(),
            detail: self
                .detail
                .as_ref()
                .map(|view| Self::compute_detail(view, layout.detail_box().width())),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let filters = &self.search.filters;
        let editing_year = self.input_mode == InputMode::Year;

        FilterBarInfo {
            type_label: filters
                .media_type
                .map_or("All Types", |media_type| media_type.label())
                .to_string(),
            year: if editing_year {
                self.year_input.clone()
            } else {
                filters.year.clone()
            },
            editing_year,
            active: filters.is_active(),
        }
    }

    fn compute_status(&self) -> StatusLine {
        let warning = |text: &str| StatusLine {
            text: text.to_string(),
            kind: StatusKind::Warning,
        };

        if self.web_access == Some(false) {
            return warning(WEB_ACCESS_DENIED_MESSAGE);
        }
        if !self.client.has_api_key() {
            return warning("No API key configured: set api_key or OMDB_API_KEY");
        }

        let text = if self.search.loading {
            "Searching…".to_string()
        } else if self.search.has_searched && self.search.error.is_none() && !self.search.movies.is_empty() {
            let total = self.search.total_results;
            let noun = if total == 1 { "result" } else { "results" };
            format!("Found {} {noun}", group_thousands(total))
        } else {
            String::new()
        };

        StatusLine {
            text,
            kind: StatusKind::Info,
        }
    }

    fn compute_body(&self, layout: &Layout) -> BodyView {
        let search = &self.search;

        if search.loading {
            return BodyView::Skeleton((PAGE_SIZE as usize).min(layout.list_capacity()));
        }

        if !search.has_searched {
            return BodyView::Welcome(EmptyState {
                message: "Search for Movies & TV Series".to_string(),
                subtitle: "Type a title in the search box above and press Enter".to_string(),
            });
        }

        if let Some(message) = &search.error {
            return BodyView::Error(ErrorPanel {
                title: "Oops! Something went wrong".to_string(),
                message: message.clone(),
                hint: "Press / to edit the search, or Ctrl+r to start over".to_string(),
            });
        }

        if search.movies.is_empty() {
            return BodyView::Empty(EmptyState {
                message: "No Results Found".to_string(),
                subtitle: "Try adjusting your search terms or filters".to_string(),
            });
        }

        BodyView::Results(self.compute_results(layout))
    }

    fn compute_results(&self, layout: &Layout) -> ResultsView {
        let title_width = layout
            .cols
            .saturating_sub(MARKER_WIDTH + YEAR_COLUMN_WIDTH + TYPE_COLUMN_WIDTH + POSTER_COLUMN_WIDTH)
            .max(MIN_TITLE_WIDTH);
        let (start, end) = self.visible_window(layout.list_capacity());

        let query = self.search.search_query.trim();
        let matcher = (!query.is_empty()).then(SkimMatcherV2::default);

        let items = self.search.movies[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                let title = truncate(&item.title, title_width);
                let visible_chars = if title == item.title {
                    usize::MAX
                } else {
                    title_width.saturating_sub(1)
                };
                let highlight_ranges = matcher
                    .as_ref()
                    .map(|m| Self::compute_highlight_ranges(&item.title, query, m, visible_chars))
                    .unwrap_or_default();

                DisplayItem {
                    title,
                    year: item.year.clone().unwrap_or_default(),
                    type_label: item.media_type.label().to_string(),
                    poster_label: if item.poster.is_some() { "poster" } else { "No Image" }.to_string(),
                    has_poster: item.poster.is_some(),
                    is_selected: start + offset == self.selected_index,
                    highlight_ranges,
                }
            })
            .collect();

        ResultsView {
            items,
            selected_index: self.selected_index.saturating_sub(start),
            title_width,
        }
    }

    /// Coalesces the matcher's character indices into `(start, end)` runs,
    /// dropping anything past `visible_chars`.
    fn compute_highlight_ranges(
        text: &str,
        query: &str,
        matcher: &SkimMatcherV2,
        visible_chars: usize,
    ) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices.into_iter().filter(|&idx| idx < visible_chars) {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end += 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_pager(&self) -> Option<PagerInfo> {
        let search = &self.search;
        if !search.has_searched || search.total_results <= PAGE_SIZE {
            return None;
        }

        let current = search.current_page;
        let total_pages = search.total_pages();

        Some(PagerInfo {
            markers: page_window(current, total_pages),
            current_page: current,
            prev_enabled: !search.loading && current > 1,
            next_enabled: !search.loading && current < total_pages,
            summary: format!(
                "Page {current} of {total_pages} ({} results)",
                group_thousands(search.total_results)
            ),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.detail.is_some() {
            "Esc/q/x: close  click outside: close"
        } else {
            match self.input_mode {
                InputMode::Search => "Enter: search  Esc: browse results  Backspace: delete  Ctrl+r: reset",
                InputMode::Year => "Enter: apply year  Esc: cancel  Backspace: delete",
                InputMode::Browse => {
                    "j/k: select  Enter: details  h/l: page  /: search  t: type  y: year  c: clear  Ctrl+r: reset  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_detail(view: &DetailView, box_width: usize) -> DetailViewModel {
        let inner_width = box_width.saturating_sub(4);

        match &view.status {
            DetailStatus::Loading => DetailViewModel {
                title: view.item.title.clone(),
                subtitle: join_present(&[Some(view.item.media_type.label()), view.item.year.as_deref()]),
                lines: vec![DetailLine::plain("Loading details…", LineStyle::Dim)],
            },
            DetailStatus::Failed(message) => DetailViewModel {
                title: view.item.title.clone(),
                subtitle: String::new(),
                lines: vec![
                    DetailLine::plain("Error Loading Details", LineStyle::Error),
                    DetailLine::plain(message.clone(), LineStyle::Dim),
                ],
            },
            DetailStatus::Loaded(record) => DetailViewModel {
                title: record.title.clone(),
                subtitle: join_present(&[
                    Some(record.media_type.label()),
                    record.year.as_deref(),
                    record.rated.as_deref(),
                    record.runtime.as_deref(),
                ]),
                lines: detail_lines(record, inner_width),
            },
        }
    }
}

/// Renders whenever a detail view was opened, even one that needs no fetch.
pub(crate) fn opened(actions: Option<Vec<Action>>) -> (bool, Vec<Action>) {
    actions.map_or_else(|| (false, vec![]), |actions| (true, actions))
}

fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" · ")
}

fn detail_lines(record: &DetailRecord, width: usize) -> Vec<DetailLine> {
    let mut lines = Vec::new();
    let value_width = width.saturating_sub(DETAIL_LABEL_WIDTH);

    if let Some(rating) = &record.imdb_rating {
        let votes = record
            .imdb_votes
            .as_deref()
            .map(|votes| format!("  ({votes} votes)"))
            .unwrap_or_default();
        lines.push(DetailLine::plain(format!("★ {rating}/10{votes}"), LineStyle::Rating));
        lines.push(DetailLine::blank());
    }

    if let Some(plot) = &record.plot {
        lines.push(DetailLine::plain("Plot", LineStyle::Heading));
        lines.extend(wrap(plot, width).into_iter().map(|line| DetailLine::plain(line, LineStyle::Normal)));
        lines.push(DetailLine::blank());
    }

    let genres = (!record.genres.is_empty()).then(|| record.genres.join(", "));
    let poster = Some(if record.poster.is_some() { "available" } else { "No Image" }.to_string());
    let fields = [
        ("Genres", genres.as_ref()),
        ("Director", record.director.as_ref()),
        ("Writer", record.writer.as_ref()),
        ("Cast", record.actors.as_ref()),
        ("Released", record.released.as_ref()),
        ("Language", record.language.as_ref()),
        ("Country", record.country.as_ref()),
        ("Seasons", record.total_seasons.as_ref()),
        ("Box office", record.box_office.as_ref()),
        ("Awards", record.awards.as_ref()),
        ("Poster", poster.as_ref()),
    ];

    for (label, value) in fields {
        let Some(value) = value else { continue };
        for (i, chunk) in wrap(value, value_width).into_iter().enumerate() {
            let label = if i == 0 { label } else { "" };
            lines.push(DetailLine::labeled(label, chunk));
        }
    }

    let ratings: Vec<_> = record.visible_ratings().collect();
    if !ratings.is_empty() {
        lines.push(DetailLine::blank());
        lines.push(DetailLine::plain("Ratings", LineStyle::Heading));
        for rating in ratings {
            lines.push(DetailLine::plain(format!("{}: {}", rating.source, rating.value), LineStyle::Rating));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MediaType, ResultItem};

    fn item(id: &str, title: &str) -> ResultItem {
        ResultItem {
            id: id.to_string(),
            title: title.to_string(),
            year: Some("2008".to_string()),
            media_type: MediaType::Movie,
            poster: None,
        }
    }

    fn with_results(count: usize) -> AppState {
        let mut state = AppState::new(CatalogClient::new("http://catalog.test/", "k"), Theme::default());
        let items = (0..count).map(|i| item(&format!("tt{i:07}"), &format!("Movie {i}"))).collect();
        reduce(
            &mut state.search,
            StoreMessage::SearchSucceeded {
                items,
                total_results: count as u32,
                page: 1,
            },
        );
        state
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = with_results(3);
        assert!(state.move_selection_up());
        assert_eq!(state.selected_index, 2);
        assert!(state.move_selection_down());
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn window_follows_selection() {
        let mut state = with_results(10);
        state.selected_index = 9;
        assert_eq!(state.visible_window(4), (6, 10));
        state.selected_index = 0;
        assert_eq!(state.visible_window(4), (0, 4));
        assert_eq!(state.visible_window(0), (0, 0));
    }

    #[test]
    fn highlight_ranges_coalesce_runs() {
        let matcher = SkimMatcherV2::default();
        let ranges = AppState::compute_highlight_ranges("The Dark Knight", "dark", &matcher, usize::MAX);
        assert_eq!(ranges, vec![(4, 8)]);
        let clipped = AppState::compute_highlight_ranges("The Dark Knight", "dark", &matcher, 6);
        assert_eq!(clipped, vec![(4, 6)]);
    }

    #[test]
    fn click_on_card_opens_detail() {
        let mut state = with_results(5);
        state.set_viewport(30, 100);
        let (render, actions) = state.click(crate::ui::layout::LIST_START_ROW + 2, 10);
        assert!(render);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.detail.as_ref().map(|d| d.item.id.as_str()), Some("tt0000002"));
    }

    #[test]
    fn click_inside_box_keeps_detail_open() {
        let mut state = with_results(5);
        state.set_viewport(30, 100);
        state.open_detail(0);
        assert_eq!(state.click(10, 50), (false, vec![]));
        assert!(state.detail.is_some());
        let close = state.viewport.detail_close_control();
        assert_eq!(state.click(close.top, close.left + 1), (true, vec![]));
        assert!(state.detail.is_none());
    }
}
