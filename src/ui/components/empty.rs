//! Placeholder bodies: welcome, empty results, error panel and loading
//! skeletons.

use crate::ui::helpers::{char_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, ErrorPanel};

fn centered(row: usize, text: &str, color: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = char_len(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

/// Renders a centered headline and subtitle, two rows below `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    print!("{}", Theme::bold());
    centered(row + 2, &empty.message, &theme.colors.empty_state_fg, cols);
    print!("{}", Theme::dim());
    centered(row + 3, &empty.subtitle, &theme.colors.text_dim, cols);
}

/// Renders the error panel: title, message, and the recovery hint.
pub fn render_error_panel(row: usize, panel: &ErrorPanel, theme: &Theme, cols: usize) {
    print!("{}", Theme::bold());
    centered(row + 2, &panel.title, &theme.colors.error_fg, cols);
    centered(row + 3, &panel.message, &theme.colors.text_normal, cols);
    centered(row + 5, &panel.hint, &theme.colors.text_dim, cols);
}

/// Renders `count` shimmer bars in place of cards.
pub fn render_skeleton(row: usize, count: usize, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(4);
    for i in 0..count {
        // Vary the bar lengths so the placeholder reads as a list.
        let bar = width.saturating_sub((i % 3) * width / 6);
        position_cursor(row + i, 1);
        print!("  ");
        print!("{}", Theme::fg(&theme.colors.skeleton_fg));
        print!("{}", "░".repeat(bar));
        print!("{}", Theme::reset());
    }
}
