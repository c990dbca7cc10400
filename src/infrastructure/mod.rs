//! Infrastructure layer for sandbox and environment interactions.
//!
//! Zellij plugins run inside a WASI sandbox: `/data` is the plugin's private
//! data directory and environment variables are whatever the host forwarded.

pub mod paths;

pub use paths::{api_key_from_env, get_data_dir, API_KEY_ENV};
