use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// OpenWeather's current air-pollution endpoint.
pub const DEFAULT_AIR_QUALITY_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default except the OpenWeather credential, which is
/// optional: without it every air-quality lookup reports "unavailable".
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("TRAVELSMART_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("TRAVELSMART_BIND_ADDR", e.to_string()))?;

    let max_concurrent_lookups = or_default("TRAVELSMART_MAX_CONCURRENT_LOOKUPS", "4")
        .parse::<usize>()
        .map_err(|e| invalid("TRAVELSMART_MAX_CONCURRENT_LOOKUPS", e.to_string()))?
        .max(1);

    let air_quality_timeout_secs = match lookup("TRAVELSMART_AIR_QUALITY_TIMEOUT_SECS") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("TRAVELSMART_AIR_QUALITY_TIMEOUT_SECS", e.to_string()))?,
        ),
        Err(_) => None,
    };

    let env = parse_environment(&or_default("TRAVELSMART_ENV", "development"))?;
    let log_level = or_default("TRAVELSMART_LOG_LEVEL", "info");
    let dataset_path = PathBuf::from(or_default(
        "TRAVELSMART_DATASET_PATH",
        "./data/hotels_sample.csv",
    ));
    let openweather_api_key = lookup("OPENWEATHER_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    let air_quality_url = or_default("TRAVELSMART_AIR_QUALITY_URL", DEFAULT_AIR_QUALITY_URL);
    let user_agent = or_default(
        "TRAVELSMART_USER_AGENT",
        "travelsmart/0.1 (hotel-recommender)",
    );

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        dataset_path,
        openweather_api_key,
        air_quality_url,
        air_quality_timeout_secs,
        user_agent,
        max_concurrent_lookups,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRAVELSMART_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
