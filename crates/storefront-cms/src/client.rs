//! HTTP client for the content store's REST API.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use storefront_core::{AppConfig, Category, ProductRecord};

use crate::error::CmsError;
use crate::retry::retry_with_backoff;
use crate::types::{CategoryQuery, PaginatedDocs, ProductQuery};

/// Read-only client for the products and categories collections and the
/// site globals.
///
/// Non-2xx responses map to typed errors (429, 404, everything else).
/// Transient failures are retried with jittered exponential backoff up to
/// `max_retries` additional attempts.
pub struct CmsClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl std::fmt::Debug for CmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("max_retries", &self.max_retries)
            .field("backoff_base_ms", &self.backoff_base_ms)
            .finish_non_exhaustive()
    }
}

impl CmsClient {
    /// Creates a client rooted at `base_url` (the store origin, without `/api`).
    ///
    /// # Errors
    ///
    /// - [`CmsError::InvalidBaseUrl`] if `base_url` cannot be parsed.
    /// - [`CmsError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, CmsError> {
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CmsError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()),
            max_retries,
            backoff_base_ms,
        })
    }

    /// Builds a client from the `STOREFRONT_CMS_*` settings.
    ///
    /// # Errors
    ///
    /// See [`CmsClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CmsError> {
        Self::new(
            &config.cms_url,
            config.cms_api_key.clone(),
            config.cms_request_timeout_secs,
            &config.cms_user_agent,
            config.cms_max_retries,
            config.cms_retry_backoff_base_ms,
        )
    }

    /// Runs a product `find` query.
    ///
    /// # Errors
    ///
    /// Any [`CmsError`] once retries are exhausted.
    pub async fn find_products(
        &self,
        query: &ProductQuery,
    ) -> Result<PaginatedDocs<ProductRecord>, CmsError> {
        let url = self.endpoint("api/products", &query.query_pairs())?;
        self.get_json(url, "products").await
    }

    /// Lists categories, sorted by title.
    ///
    /// # Errors
    ///
    /// Any [`CmsError`] once retries are exhausted.
    pub async fn find_categories(
        &self,
        query: &CategoryQuery,
    ) -> Result<PaginatedDocs<Category>, CmsError> {
        let url = self.endpoint("api/categories", &query.query_pairs())?;
        self.get_json(url, "categories").await
    }

    /// Fetches a global document such as `header` or `footer`.
    ///
    /// # Errors
    ///
    /// Any [`CmsError`] once retries are exhausted.
    pub async fn find_global<T: DeserializeOwned>(&self, slug: &str) -> Result<T, CmsError> {
        let pairs = [("depth".to_owned(), "1".to_owned())];
        let url = self.endpoint(&format!("api/globals/{slug}"), &pairs)?;
        self.get_json(url, &format!("global {slug}")).await
    }

    fn endpoint(&self, path: &str, pairs: &[(String, String)]) -> Result<Url, CmsError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| CmsError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join \"{path}\": {e}"),
            })?;
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T, CmsError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let mut request = self
                    .client
                    .get(url.clone())
                    .header(reqwest::header::ACCEPT, "application/json");
                if let Some(key) = &self.api_key {
                    request =
                        request.header(reqwest::header::AUTHORIZATION, format!("users API-Key {key}"));
                }

                let response = request.send().await?;
                let status = response.status();

                if status == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.trim().parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(CmsError::RateLimited { retry_after_secs });
                }

                if status == StatusCode::NOT_FOUND {
                    return Err(CmsError::NotFound {
                        url: url.to_string(),
                    });
                }

                if !status.is_success() {
                    return Err(CmsError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<T>(&body).map_err(|e| CmsError::Deserialize {
                    context: context.to_owned(),
                    source: e,
                })
            }
        })
        .await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
