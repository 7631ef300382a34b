use crate::app_config::{AppConfig, Environment};
use crate::site::{SiteConfig, DEFAULT_COPYRIGHT_START_YEAR};
use crate::ConfigError;

/// Load application configuration from environment variables.
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

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing is decoupled from the process environment so tests can drive it
/// with a plain `HashMap`.
///
/// # Errors
///
/// Returns `ConfigError` if required values are missing or values are invalid.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Empty values are treated as unset; deployments commonly template blank vars.
    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let cms_url = require("STOREFRONT_CMS_URL")?;
    if !(cms_url.starts_with("http://") || cms_url.starts_with("https://")) {
        return Err(invalid(
            "STOREFRONT_CMS_URL",
            "must start with http:// or https://".to_string(),
        ));
    }
    let cms_api_key = optional("STOREFRONT_CMS_API_KEY");

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"))?;
    let bind_addr = parse_addr("STOREFRONT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");

    let cms_request_timeout_secs = parse_u64("STOREFRONT_CMS_REQUEST_TIMEOUT_SECS", "15")?;
    let cms_user_agent = or_default("STOREFRONT_CMS_USER_AGENT", "storefront/0.1");
    let cms_max_retries = parse_u32("STOREFRONT_CMS_MAX_RETRIES", "2")?;
    let cms_retry_backoff_base_ms = parse_u64("STOREFRONT_CMS_RETRY_BACKOFF_BASE_MS", "250")?;

    let shop_page_size = parse_u32("STOREFRONT_SHOP_PAGE_SIZE", "10")?;
    if shop_page_size == 0 {
        return Err(invalid(
            "STOREFRONT_SHOP_PAGE_SIZE",
            "must be greater than zero".to_string(),
        ));
    }
    let filter_category_limit = parse_u32("STOREFRONT_FILTER_CATEGORY_LIMIT", "50")?;
    let footer_category_limit = parse_u32("STOREFRONT_FOOTER_CATEGORY_LIMIT", "6")?;

    let copyright_start_year = or_default(
        "STOREFRONT_COPYRIGHT_START_YEAR",
        &DEFAULT_COPYRIGHT_START_YEAR.to_string(),
    )
    .parse::<i32>()
    .map_err(|e| invalid("STOREFRONT_COPYRIGHT_START_YEAR", e.to_string()))?;

    let site = SiteConfig {
        site_name: optional("SITE_NAME"),
        company_name: optional("COMPANY_NAME"),
        copyright_start_year,
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        cms_url,
        cms_api_key,
        cms_request_timeout_secs,
        cms_user_agent,
        cms_max_retries,
        cms_retry_backoff_base_ms,
        shop_page_size,
        filter_category_limit,
        footer_category_limit,
        site,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
