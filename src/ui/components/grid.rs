//! Result list renderer: one card per row with TITLE, YEAR, TYPE and POSTER
//! columns.

use crate::ui::helpers::{self, char_len, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ResultsView};

const YEAR_WIDTH: usize = 11;
const TYPE_WIDTH: usize = 11;

/// Renders the column headers at `row`.
pub fn render_column_headers(row: usize, title_width: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "  {}{}{}POSTER",
        fit("TITLE", title_width),
        fit("YEAR", YEAR_WIDTH),
        fit("TYPE", TYPE_WIDTH),
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the visible cards starting at `row`, returning the row after them.
pub fn render_results(row: usize, results: &ResultsView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in &results.items {
        current_row = render_card(current_row, item, results.title_width, theme, cols);
    }
    current_row
}

/// Selection paints the whole row; otherwise the badge and poster columns
/// carry their own colors and the title shows query matches.
fn render_card(row: usize, item: &DisplayItem, title_width: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = || {
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    };

    base();
    print!("{}", if item.is_selected { "▸ " } else { "  " });

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(title_width.saturating_sub(char_len(&item.title))));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", fit(&item.year, YEAR_WIDTH));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.badge_fg));
    }
    print!("{}", fit(&item.type_label, TYPE_WIDTH));

    if !item.is_selected {
        let color = if item.has_poster { &theme.colors.text_normal } else { &theme.colors.text_dim };
        print!("{}", Theme::fg(color));
    }
    print!("{}", item.poster_label);

    let line_len = 2 + title_width + YEAR_WIDTH + TYPE_WIDTH + char_len(&item.poster_label);
    base();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
