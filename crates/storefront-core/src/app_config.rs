use std::net::SocketAddr;

use crate::site::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the content store, e.g. `https://cms.example.com`.
    pub cms_url: String,
    pub cms_api_key: Option<String>,
    pub cms_request_timeout_secs: u64,
    pub cms_user_agent: String,
    pub cms_max_retries: u32,
    pub cms_retry_backoff_base_ms: u64,
    /// Products fetched per shop page query.
    pub shop_page_size: u32,
    /// Categories listed in the shop filter sidebar.
    pub filter_category_limit: u32,
    /// Categories listed in the site footer.
    pub footer_category_limit: u32,
    pub site: SiteConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("cms_url", &self.cms_url)
            .field(
                "cms_api_key",
                &self.cms_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("cms_request_timeout_secs", &self.cms_request_timeout_secs)
            .field("cms_user_agent", &self.cms_user_agent)
            .field("cms_max_retries", &self.cms_max_retries)
            .field(
                "cms_retry_backoff_base_ms",
                &self.cms_retry_backoff_base_ms,
            )
            .field("shop_page_size", &self.shop_page_size)
            .field("filter_category_limit", &self.filter_category_limit)
            .field("footer_category_limit", &self.footer_category_limit)
            .field("site", &self.site)
            .finish()
    }
}
