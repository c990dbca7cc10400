//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: title bar
//! - [`search`]: search input box
//! - [`filters`]: type and year chips
//! - [`grid`]: result cards with column headers
//! - [`empty`]: welcome, empty, error and loading placeholders
//! - [`pager`]: page controls
//! - [`detail`]: detail modal drawn over the list
//! - [`footer`]: keybinding hints
//!
//! Row positions come from [`crate::ui::layout`].

mod detail;
mod empty;
mod filters;
mod footer;
mod grid;
mod header;
mod pager;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{self, Layout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, StatusKind, StatusLine, UIViewModel};

use empty::{render_empty_state, render_error_panel, render_skeleton};
use filters::render_filter_bar;
use footer::render_footer;
use grid::{render_column_headers, render_results};
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at `row`, returning the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_status(row: usize, status: &StatusLine, theme: &Theme) {
    if status.text.is_empty() {
        return;
    }
    let color = match status.kind {
        StatusKind::Info => &theme.colors.text_dim,
        StatusKind::Warning => &theme.colors.error_fg,
    };
    position_cursor(row, 3);
    print!("{}{}{}", Theme::fg(color), status.text, Theme::reset());
}

/// Renders the full screen.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Filter chips]
/// [Border]
/// [Status]
/// [Column headers / placeholder body]
/// [Cards]
/// [Pager]
/// [Border]
/// [Footer]
/// ```
///
/// The detail modal, when present, is drawn last on top of everything.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, layout: &Layout) {
    let cols = layout.cols;

    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_filter_bar(current_row, &vm.filters, theme, cols);
    render_border(current_row, &theme.colors.border, cols);

    render_status(layout::STATUS_ROW, &vm.status, theme);

    match &vm.body {
        BodyView::Welcome(empty) | BodyView::Empty(empty) => {
            render_empty_state(layout::COLUMNS_ROW, empty, theme, cols);
        }
        BodyView::Error(panel) => render_error_panel(layout::COLUMNS_ROW, panel, theme, cols),
        BodyView::Skeleton(count) => render_skeleton(layout::LIST_START_ROW, *count, theme, cols),
        BodyView::Results(results) => {
            render_column_headers(layout::COLUMNS_ROW, results.title_width, theme);
            render_results(layout::LIST_START_ROW, results, theme, cols);
        }
    }

    if let Some(info) = &vm.pager {
        pager::render_pager(layout.pager_row(), info, theme, cols);
    }

    let footer_row = layout.footer_row();
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(modal) = &vm.detail {
        detail::render_detail(modal, theme, layout);
    }
}
