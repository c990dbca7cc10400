//! Reelsearch: a Zellij plugin for searching movies and TV shows on OMDb.
//!
//! Reelsearch is a terminal multiplexer plugin that provides:
//! - Title search against the OMDb catalog with type and year facets
//! - Paginated results (ten per page) with a compact page window
//! - A detail view with plot, credits, awards, and third-party ratings
//! - Mouse and keyboard navigation inside a floating pane

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Search store and transitions                     │
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                   ┌───────────────────┐
//! │ UI Layer      │                   │ Catalog Layer     │
//! │ (ui/)         │                   │ (catalog/)        │
//! │ - Rendering   │                   │ - Request URLs    │
//! │ - Theming     │                   │ - Response decode │
//! │ - Components  │                   │ - Normalization   │
//! └───────────────┘                   └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths, environment (infrastructure/)     │
//! │  - Error types, movie records (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to an OTLP/JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Network I/O is owned by the host: the library only builds
//! [`catalog::CatalogRequest`]s and the shim hands them to Zellij's
//! `web_request`. Completions come back as [`Event::CatalogResponse`] carrying
//! the request's context map, which tells the state which search or detail
//! request it answers.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/reelsearch.wasm" {
//!         api_key "your-omdb-key"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use reelsearch::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     api_key: Some("k".to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! for c in "batman".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), reelsearch::ReelsearchError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use catalog::CatalogClient;
pub use domain::{ReelsearchError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/reelsearch.wasm" {
///     api_key "your-omdb-key"
///     base_url "https://www.omdbapi.com/"
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// OMDb API key. Falls back to the `OMDB_API_KEY` environment variable.
    pub api_key: Option<String>,

    /// Catalog endpoint. Default: [`catalog::DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: catalog::DEFAULT_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as absent. `api_key` falls back to the environment.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use reelsearch::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "abc123".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("abc123"));
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_key: value("api_key").or_else(infrastructure::api_key_from_env),
            base_url: value("base_url").unwrap_or(defaults.base_url),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Returns the configured API key.
    ///
    /// # Errors
    ///
    /// Returns [`ReelsearchError::Config`] when no key was configured.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            ReelsearchError::Config(format!(
                "no api_key configured and {} is unset",
                infrastructure::API_KEY_ENV
            ))
        })
    }
}

/// Builds the initial [`AppState`]: the catalog client from `base_url` and
/// the API key, and the theme from `theme_file`, then `theme_name`, then the
/// default.
///
/// A missing API key is logged and the client is built with an empty key;
/// searches then fail remotely and surface in the error panel.
#[tracing::instrument(level = "debug", skip_all)]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing reelsearch plugin");

    let api_key = config.api_key().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "searches will be rejected by the catalog");
        ""
    });
    let client = CatalogClient::new(config.base_url.clone(), api_key);

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(client, theme)
}
