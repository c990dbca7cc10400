//! Search bar component renderer.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const PLACEHOLDER: &str = "Search for movies and TV series…";
const LOADING_TAG: &str = " Searching… ";

/// Renders the 3-line search box starting at `row`, returning the row after it.
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ Search: the matrix▏      │ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
///
/// The border switches to `search_bar_focus` while the box has focus. When
/// the query is wider than the box its tail is shown, so the cursor end
/// stays visible.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.search_bar_focus
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let prefix = " Search: ";
    let tag_len = if search.loading { char_len(LOADING_TAG) } else { 0 };
    let cursor = if search.focused { "▏" } else { "" };
    let room = inner_width.saturating_sub(char_len(prefix) + char_len(cursor) + tag_len);

    let (text, color) = if search.query.is_empty() && !search.focused {
        (PLACEHOLDER.chars().take(room).collect::<String>(), &theme.colors.text_dim)
    } else {
        let skip = char_len(&search.query).saturating_sub(room);
        (search.query.chars().skip(skip).collect(), &theme.colors.text_normal)
    };
    let used = char_len(prefix) + char_len(&text) + char_len(cursor) + tag_len;

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{prefix}");
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", Theme::fg(&theme.colors.search_bar_focus));
    print!("{cursor}");
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    if search.loading {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{LOADING_TAG}");
    }
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
