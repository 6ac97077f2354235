use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load export configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load export configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let places_api_key = require("PLACES_API_KEY")?;
    let query = optional("PLACEDUMP_QUERY");
    let location = optional("PLACEDUMP_LOCATION");

    let pages = parse_u32("PLACEDUMP_PAGES", "1")?;
    if pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACEDUMP_PAGES".to_string(),
            reason: "page count must be at least 1".to_string(),
        });
    }

    let radius_meters = parse_u32("PLACEDUMP_RADIUS_METERS", "3200")?;
    let page_delay_ms = parse_u64("PLACEDUMP_PAGE_DELAY_MS", "2000")?;
    let request_timeout_secs = parse_u64("PLACEDUMP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACEDUMP_USER_AGENT", "placedump/0.1 (places-export)");
    let api_base_url = or_default(
        "PLACEDUMP_API_BASE_URL",
        "https://maps.googleapis.com/maps/api/",
    );
    let log_level = or_default("PLACEDUMP_LOG_LEVEL", "info");

    Ok(AppConfig {
        places_api_key,
        query,
        location,
        pages,
        radius_meters,
        page_delay_ms,
        request_timeout_secs,
        user_agent,
        api_base_url,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
