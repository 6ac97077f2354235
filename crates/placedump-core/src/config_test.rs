use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("PLACES_API_KEY", "test-key");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PLACES_API_KEY"),
        "expected MissingEnvVar(PLACES_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("PLACES_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.places_api_key, "test-key");
    assert!(cfg.query.is_none());
    assert!(cfg.location.is_none());
    assert_eq!(cfg.pages, 1);
    assert_eq!(cfg.radius_meters, 3200);
    assert_eq!(cfg.page_delay_ms, 2000);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "placedump/0.1 (places-export)");
    assert_eq!(cfg.api_base_url, "https://maps.googleapis.com/maps/api/");
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_reads_query_location_and_pages() {
    let mut map = full_env();
    map.insert("PLACEDUMP_QUERY", "coffee");
    map.insert("PLACEDUMP_LOCATION", "Seattle");
    map.insert("PLACEDUMP_PAGES", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.query.as_deref(), Some("coffee"));
    assert_eq!(cfg.location.as_deref(), Some("Seattle"));
    assert_eq!(cfg.pages, 3);
}

#[test]
fn build_app_config_ignores_blank_query() {
    let mut map = full_env();
    map.insert("PLACEDUMP_QUERY", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.query.is_none());
}

#[test]
fn build_app_config_rejects_zero_pages() {
    let mut map = full_env();
    map.insert("PLACEDUMP_PAGES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEDUMP_PAGES"),
        "expected InvalidEnvVar(PLACEDUMP_PAGES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_pages() {
    let mut map = full_env();
    map.insert("PLACEDUMP_PAGES", "three");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEDUMP_PAGES"),
        "expected InvalidEnvVar(PLACEDUMP_PAGES), got: {result:?}"
    );
}

#[test]
fn build_app_config_page_delay_override() {
    let mut map = full_env();
    map.insert("PLACEDUMP_PAGE_DELAY_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_delay_ms, 0);
}

#[test]
fn build_app_config_rejects_invalid_request_timeout() {
    let mut map = full_env();
    map.insert("PLACEDUMP_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEDUMP_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PLACEDUMP_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_radius() {
    let mut map = full_env();
    map.insert("PLACEDUMP_RADIUS_METERS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEDUMP_RADIUS_METERS"),
        "expected InvalidEnvVar(PLACEDUMP_RADIUS_METERS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("PLACES_API_KEY", "super-secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret-key"));
    assert!(rendered.contains("[redacted]"));
}
