//! Pagination policy: page counts, the displayed page window and the
//! navigation guard.

use super::store::PAGE_SIZE;

/// Pages on each side of the current page shown in the window.
const WINDOW: u32 = 2;

/// One entry of the displayed page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

/// `ceil(total_results / PAGE_SIZE)`.
///
/// ```
/// use reelsearch::app::pagination::total_pages;
///
/// assert_eq!(total_pages(57), 6);
/// assert_eq!(total_pages(60), 6);
/// assert_eq!(total_pages(0), 0);
/// ```
#[must_use]
pub const fn total_pages(total_results: u32) -> u32 {
    total_results.div_ceil(PAGE_SIZE)
}

/// Computes the page list for the pager.
///
/// Always includes the first page and, when there is more than one page, the
/// last. Pages within two of `current` are listed; an ellipsis stands in for
/// any gap between that window and either anchor.
///
/// ```
/// use reelsearch::app::pagination::{page_window, PageMarker::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_window(10, 20),
///     vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)],
/// );
/// ```
#[must_use]
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageMarker> {
    let mut markers = vec![PageMarker::Page(1)];

    if current.saturating_sub(WINDOW) > 2 {
        markers.push(PageMarker::Ellipsis);
    }

    let start = current.saturating_sub(WINDOW).max(2);
    let end = current.saturating_add(WINDOW).min(total_pages.saturating_sub(1));
    markers.extend((start..=end).map(PageMarker::Page));

    if current.saturating_add(WINDOW) < total_pages.saturating_sub(1) {
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    } else if total_pages > 1 {
        markers.push(PageMarker::Page(total_pages));
    }

    markers
}

/// Returns `true` when moving from `current` to `target` is a real navigation.
///
/// Page 0, pages past the last one and the current page are all no-ops.
#[must_use]
pub const fn can_navigate(target: u32, current: u32, total_pages: u32) -> bool {
    target >= 1 && target <= total_pages && target != current
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn window_near_start_has_no_leading_ellipsis() {
        assert_eq!(
            page_window(1, 6),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(6)]
        );
        assert_eq!(
            page_window(4, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn window_near_end_has_no_trailing_ellipsis() {
        assert_eq!(
            page_window(18, 20),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn single_page_lists_only_first() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(page_window(1, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn navigation_guard_rejects_bounds_and_current() {
        assert!(!can_navigate(0, 1, 6));
        assert!(!can_navigate(7, 1, 6));
        assert!(!can_navigate(3, 3, 6));
        assert!(can_navigate(6, 1, 6));
    }
}
