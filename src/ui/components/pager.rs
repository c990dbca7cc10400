//! Pager renderer.

use crate::app::pagination::PageMarker;
use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

enum Segment {
    Text(String),
    Dim(String),
    Current(String),
}

impl Segment {
    fn len(&self) -> usize {
        match self {
            Self::Text(s) | Self::Dim(s) | Self::Current(s) => char_len(s),
        }
    }
}

fn segments(pager: &PagerInfo) -> Vec<Segment> {
    let control = |label: &str, enabled: bool| {
        if enabled {
            Segment::Text(label.to_string())
        } else {
            Segment::Dim(label.to_string())
        }
    };

    let mut out = vec![control("‹ Prev", pager.prev_enabled), Segment::Text("  ".into())];
    for marker in &pager.markers {
        out.push(match marker {
            PageMarker::Page(page) if *page == pager.current_page => Segment::Current(format!(" {page} ")),
            PageMarker::Page(page) => Segment::Text(format!(" {page} ")),
            PageMarker::Ellipsis => Segment::Dim(" … ".to_string()),
        });
    }
    out.push(Segment::Text("  ".into()));
    out.push(control("Next ›", pager.next_enabled));
    out.push(Segment::Text("    ".into()));
    out.push(Segment::Dim(pager.summary.clone()));
    out
}

/// Renders the page controls centered at `row`.
///
/// ```text
/// ‹ Prev   1  …  8  9 [10] 11  12  …  20   Next ›    Page 10 of 20 (200 results)
/// ```
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) {
    let segments = segments(pager);
    let width: usize = segments.iter().map(Segment::len).sum();
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    for segment in &segments {
        match segment {
            Segment::Text(s) => print!("{}{s}", Theme::fg(&theme.colors.text_normal)),
            Segment::Dim(s) => print!("{}{s}", Theme::fg(&theme.colors.text_dim)),
            Segment::Current(s) => print!(
                "{}{}{}{s}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.pager_current_fg),
                Theme::bg(&theme.colors.pager_current_bg),
                Theme::reset()
            ),
        }
    }
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    print!("{}", Theme::reset());
}
