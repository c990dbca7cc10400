//! Input focus modes.
//!
//! The plugin is either browsing results or editing one of its two text
//! fields. The mode decides how keys are interpreted by the runtime: in the
//! editing modes letters are typed, in [`InputMode::Browse`] they are
//! commands. An open detail view takes precedence over all modes.
//!
//! # Example
//!
//! ```rust
//! use reelsearch::app::InputMode;
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Search);
//! assert!(mode.is_editing());
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigating the result list; letters are commands.
    ///
    /// Keybindings: j/k (select), Enter (details), h/l (page), / (search),
    /// t (type filter), y (year filter), c (clear filters), q (quit).
    Browse,

    /// Typing in the search box. Enter submits, Esc returns to browsing.
    #[default]
    Search,

    /// Typing in the year filter. Enter applies, Esc cancels.
    Year,
}

impl InputMode {
    /// Returns `true` in the modes where characters are typed.
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Search | Self::Year)
    }
}
