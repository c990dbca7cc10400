//! Screen geometry shared by the renderer and mouse hit-testing.
//!
//! All rows and columns are 1-indexed, matching the cursor positioning
//! escape sequence. The layout is fixed top-down:
//!
//! ```text
//!  1  (blank)
//!  2  header
//!  3  ───────
//!  4  ┌ search box ┐
//!  5  │ Search: …  │
//!  6  └────────────┘
//!  7  filter chips
//!  8  ───────
//!  9  status line
//! 10  column headers
//! 11  result rows …
//! -3  pager
//! -2  ───────
//! -1  footer
//! ```

/// First row of the result list.
pub const LIST_START_ROW: usize = 11;
/// Row of the search box's top border.
pub const SEARCH_ROW: usize = 4;
/// Row of the status line.
pub const STATUS_ROW: usize = 9;
/// Row of the column headers.
pub const COLUMNS_ROW: usize = 10;

/// Horizontal margin of the detail box.
const DETAIL_MARGIN_COLS: usize = 4;
/// Vertical margin of the detail box.
const DETAIL_MARGIN_ROWS: usize = 2;

/// An inclusive rectangle in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Rect {
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.right.saturating_sub(self.left) + 1
    }
}

/// Geometry for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn footer_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    #[must_use]
    pub const fn pager_row(&self) -> usize {
        self.rows.saturating_sub(3)
    }

    /// Number of result rows that fit between the column headers and the pager.
    #[must_use]
    pub const fn list_capacity(&self) -> usize {
        self.pager_row().saturating_sub(LIST_START_ROW)
    }

    /// Maps a screen row to a position in the visible result window.
    #[must_use]
    pub const fn list_slot(&self, row: usize) -> Option<usize> {
        if row >= LIST_START_ROW && row < LIST_START_ROW + self.list_capacity() {
            Some(row - LIST_START_ROW)
        } else {
            None
        }
    }

    /// Bounds of the detail modal box.
    #[must_use]
    pub const fn detail_box(&self) -> Rect {
        Rect {
            top: DETAIL_MARGIN_ROWS + 1,
            left: DETAIL_MARGIN_COLS + 1,
            bottom: self.rows.saturating_sub(DETAIL_MARGIN_ROWS),
            right: self.cols.saturating_sub(DETAIL_MARGIN_COLS),
        }
    }

    /// Cells covered by the `[x]` close control on the box's top border.
    #[must_use]
    pub const fn detail_close_control(&self) -> Rect {
        let frame = self.detail_box();
        Rect {
            top: frame.top,
            left: frame.right.saturating_sub(4),
            bottom: frame.top,
            right: frame.right.saturating_sub(2),
        }
    }
}
