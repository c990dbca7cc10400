//! Sandbox paths and environment lookups.

use std::path::PathBuf;

/// Environment variable consulted when the plugin configuration carries no
/// `api_key`.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Returns the plugin's private data directory.
///
/// Zellij maps `/data` to a per-plugin folder on the host that survives
/// restarts. Trace files are written here.
///
/// ```
/// use reelsearch::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/data"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// Reads the OMDb key from [`API_KEY_ENV`], ignoring blank values.
#[must_use]
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}
