//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: renderable UI state
//! - [`layout`]: screen geometry shared with mouse hit-testing
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: component renderers
//! - [`helpers`]: char-safe text utilities and highlighting
//! - [`theme`]: color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{BodyView, DetailViewModel, DisplayItem, PagerInfo, UIViewModel};
