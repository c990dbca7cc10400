//! Detail modal renderer.
//!
//! The box is drawn over the list using the geometry from
//! [`Layout::detail_box`](crate::ui::layout::Layout::detail_box), so clicks
//! can be hit-tested against exactly what is on screen.

use crate::ui::helpers::{char_len, fit, position_cursor, truncate};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailLine, DetailViewModel, LineStyle};

const LABEL_WIDTH: usize = 12;

/// Renders the detail modal for a `layout`-sized terminal.
pub fn render_detail(detail: &DetailViewModel, theme: &Theme, layout: &Layout) {
    let frame = layout.detail_box();
    let inner = frame.width().saturating_sub(2);
    let content = inner.saturating_sub(2);
    let border = &theme.colors.border;

    // ┌─ Title ─────────[x]─┐
    let title = truncate(&detail.title, content.saturating_sub(8));
    let fill = inner.saturating_sub(char_len(&title) + 7);
    position_cursor(frame.top, frame.left);
    print!("{}┌─ ", Theme::fg(border));
    print!("{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    print!("{} {}", Theme::fg(border), "─".repeat(fill));
    print!("{}[x]{}", Theme::fg(&theme.colors.error_fg), Theme::fg(border));
    print!("─┐{}", Theme::reset());

    let mut row = frame.top + 1;
    body_row(row, frame.left, inner, theme, |width| {
        print!("{}", Theme::fg(&theme.colors.badge_fg));
        print!("{}", fit(&detail.subtitle, width));
    });
    row += 1;

    position_cursor(row, frame.left);
    print!("{}├{}┤{}", Theme::fg(border), "─".repeat(inner), Theme::reset());
    row += 1;

    let capacity = frame.bottom.saturating_sub(row);
    let overflow = detail.lines.len() > capacity;
    let shown = if overflow { capacity.saturating_sub(1) } else { detail.lines.len() };

    for line in detail.lines.iter().take(shown) {
        body_row(row, frame.left, inner, theme, |width| render_line(line, width, theme));
        row += 1;
    }
    if overflow {
        body_row(row, frame.left, inner, theme, |width| {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", fit("…", width));
        });
        row += 1;
    }
    while row < frame.bottom {
        body_row(row, frame.left, inner, theme, |width| print!("{}", " ".repeat(width)));
        row += 1;
    }

    position_cursor(frame.bottom, frame.left);
    print!("{}└{}┘{}", Theme::fg(border), "─".repeat(inner), Theme::reset());
}

/// Draws `│ … │` around content that must print exactly `width` cells.
fn body_row(row: usize, left: usize, inner: usize, theme: &Theme, content: impl FnOnce(usize)) {
    position_cursor(row, left);
    print!("{}│{} ", Theme::fg(&theme.colors.border), Theme::reset());
    content(inner.saturating_sub(2));
    print!("{} {}│{}", Theme::reset(), Theme::fg(&theme.colors.border), Theme::reset());
}

fn render_line(line: &DetailLine, width: usize, theme: &Theme) {
    let colors = &theme.colors;

    if let Some(label) = &line.label {
        print!("{}{}", Theme::fg(&colors.text_dim), fit(label, LABEL_WIDTH));
        print!("{}{}", Theme::fg(&colors.text_normal), fit(&line.text, width.saturating_sub(LABEL_WIDTH)));
        return;
    }

    let style = match line.style {
        LineStyle::Normal => Theme::fg(&colors.text_normal),
        LineStyle::Dim => Theme::fg(&colors.text_dim),
        LineStyle::Heading => format!("{}{}", Theme::bold(), Theme::fg(&colors.header_fg)),
        LineStyle::Error => format!("{}{}", Theme::bold(), Theme::fg(&colors.error_fg)),
        LineStyle::Rating => Theme::fg(&colors.rating_fg),
    };
    print!("{style}{}", fit(&line.text, width));
}
