//! Configuration parsing and theme selection.

use reelsearch::catalog::DEFAULT_BASE_URL;
use reelsearch::ui::theme::DEFAULT_THEME;
use reelsearch::{initialize, Config, ReelsearchError, Theme};
use std::collections::BTreeMap;
use std::fs;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

#[test]
fn defaults_apply_for_missing_and_blank_values() {
    let config = Config::from_zellij(&map(&[
        ("api_key", "abc"),
        ("base_url", "  "),
        ("theme", ""),
        ("trace_level", ""),
    ]));

    assert_eq!(config.api_key.as_deref(), Some("abc"));
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.theme_name, None);
    assert_eq!(config.trace_level, "info");
}

#[test]
fn explicit_values_override_defaults() {
    let config = Config::from_zellij(&map(&[
        ("api_key", " abc "),
        ("base_url", "http://localhost:8080/"),
        ("theme", "catppuccin-latte"),
        ("trace_level", "reelsearch=debug"),
    ]));

    assert_eq!(config.api_key.as_deref(), Some("abc"));
    assert_eq!(config.base_url, "http://localhost:8080/");
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    assert_eq!(config.trace_level, "reelsearch=debug");
}

#[test]
fn missing_api_key_is_a_config_error() {
    let config = Config::default();
    assert!(matches!(config.api_key(), Err(ReelsearchError::Config(_))));

    let state = initialize(&config);
    assert!(!state.client.has_api_key());
}

#[test]
fn configured_base_url_reaches_requests() {
    let config = Config {
        api_key: Some("k".to_string()),
        base_url: "http://localhost:8080/omdb".to_string(),
        ..Config::default()
    };
    let state = initialize(&config);
    let request = state.client.detail_request("tt0111161", 1);
    assert_eq!(request.url, "http://localhost:8080/omdb?apikey=k&i=tt0111161&plot=full");
}

#[test]
fn theme_file_takes_precedence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noir.toml");

    let mut theme = Theme::default();
    theme.name = "noir".to_string();
    theme.colors.selection_bg = "#000000".to_string();
    fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

    let config = Config {
        theme_name: Some("catppuccin-latte".to_string()),
        theme_file: Some(path.to_string_lossy().into_owned()),
        ..Config::default()
    };
    let state = initialize(&config);
    assert_eq!(state.theme, theme);
}

#[test]
fn broken_theme_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();

    assert!(matches!(Theme::from_file(&path), Err(ReelsearchError::Theme(_))));

    let config = Config {
        theme_file: Some(path.to_string_lossy().into_owned()),
        ..Config::default()
    };
    assert_eq!(initialize(&config).theme.name, DEFAULT_THEME);
}

#[test]
fn unknown_theme_name_falls_back_to_default() {
    let config = Config {
        theme_name: Some("solarized".to_string()),
        ..Config::default()
    };
    assert_eq!(initialize(&config).theme.name, DEFAULT_THEME);

    let config = Config {
        theme_name: Some("catppuccin-latte".to_string()),
        ..Config::default()
    };
    assert_eq!(initialize(&config).theme.name, "catppuccin-latte");
}
