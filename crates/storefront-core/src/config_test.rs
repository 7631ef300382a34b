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
    m.insert("STOREFRONT_CMS_URL", "https://cms.example.com");
    m
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "STOREFRONT_ENV"));
}

#[test]
fn build_app_config_fails_without_cms_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "STOREFRONT_CMS_URL"),
        "expected MissingEnvVar(STOREFRONT_CMS_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_cms_url_as_missing() {
    let mut map = full_env();
    map.insert("STOREFRONT_CMS_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "STOREFRONT_CMS_URL"),
        "expected MissingEnvVar(STOREFRONT_CMS_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_cms_url_without_scheme() {
    let mut map = full_env();
    map.insert("STOREFRONT_CMS_URL", "cms.example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_CMS_URL"),
        "expected InvalidEnvVar(STOREFRONT_CMS_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("STOREFRONT_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_BIND_ADDR"),
        "expected InvalidEnvVar(STOREFRONT_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.cms_url, "https://cms.example.com");
    assert!(cfg.cms_api_key.is_none());
    assert_eq!(cfg.cms_request_timeout_secs, 15);
    assert_eq!(cfg.cms_user_agent, "storefront/0.1");
    assert_eq!(cfg.cms_max_retries, 2);
    assert_eq!(cfg.cms_retry_backoff_base_ms, 250);
    assert_eq!(cfg.shop_page_size, 10);
    assert_eq!(cfg.filter_category_limit, 50);
    assert_eq!(cfg.footer_category_limit, 6);
    assert_eq!(cfg.site.copyright_start_year, 2023);
    assert!(cfg.site.site_name.is_none());
    assert!(cfg.site.company_name.is_none());
}

#[test]
fn build_app_config_reads_site_names() {
    let mut map = full_env();
    map.insert("SITE_NAME", "Acme Supplies");
    map.insert("COMPANY_NAME", "Acme Pty Ltd");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.site.site_name.as_deref(), Some("Acme Supplies"));
    assert_eq!(cfg.site.company_name.as_deref(), Some("Acme Pty Ltd"));
}

#[test]
fn build_app_config_ignores_blank_company_name() {
    let mut map = full_env();
    map.insert("COMPANY_NAME", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.site.company_name.is_none());
}

#[test]
fn build_app_config_cms_request_timeout_override() {
    let mut map = full_env();
    map.insert("STOREFRONT_CMS_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.cms_request_timeout_secs, 60);
}

#[test]
fn build_app_config_cms_request_timeout_invalid() {
    let mut map = full_env();
    map.insert("STOREFRONT_CMS_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_CMS_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STOREFRONT_CMS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_cms_max_retries_invalid() {
    let mut map = full_env();
    map.insert("STOREFRONT_CMS_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_CMS_MAX_RETRIES"),
        "expected InvalidEnvVar(STOREFRONT_CMS_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_page_size() {
    let mut map = full_env();
    map.insert("STOREFRONT_SHOP_PAGE_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_SHOP_PAGE_SIZE"),
        "expected InvalidEnvVar(STOREFRONT_SHOP_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_copyright_start_year_override() {
    let mut map = full_env();
    map.insert("STOREFRONT_COPYRIGHT_START_YEAR", "2019");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.site.copyright_start_year, 2019);
}

#[test]
fn build_app_config_fails_on_invalid_storefront_env() {
    let mut map = full_env();
    map.insert("STOREFRONT_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_ENV"),
        "expected InvalidEnvVar(STOREFRONT_ENV), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = full_env();
    map.insert("STOREFRONT_CMS_API_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("[redacted]"));
}
