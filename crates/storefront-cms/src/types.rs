//! Request and response shapes for the content store's REST collections API.

use serde::Deserialize;
use storefront_core::query::DEFAULT_SORT;
use storefront_core::CompiledQuery;

use crate::query_string::where_pairs;

/// Fields the shop grid needs from each product document.
pub const SHOP_PRODUCT_FIELDS: &[&str] = &[
    "title",
    "slug",
    "gallery",
    "categories",
    "priceInUSD",
    "inventory",
    "enableVariants",
];

/// Fields populated on each joined variant document.
pub const SHOP_VARIANT_FIELDS: &[&str] = &["inventory", "priceInUSD"];

/// A page of documents as returned by `GET /api/{collection}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedDocs<T> {
    #[serde(default = "Vec::new")]
    pub docs: Vec<T>,
    #[serde(default)]
    pub total_docs: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_prev_page: bool,
}

/// A `find` request against the products collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub compiled: CompiledQuery,
    pub limit: u32,
    pub page: Option<u32>,
    pub select: Vec<String>,
    pub populate_variants: Vec<String>,
    pub draft: bool,
}

impl ProductQuery {
    /// The shop grid query: published documents only, card fields selected,
    /// variant price and inventory populated.
    #[must_use]
    pub fn shop(compiled: CompiledQuery, limit: u32) -> Self {
        Self {
            compiled,
            limit,
            page: None,
            select: SHOP_PRODUCT_FIELDS.iter().map(|f| (*f).to_owned()).collect(),
            populate_variants: SHOP_VARIANT_FIELDS.iter().map(|f| (*f).to_owned()).collect(),
            draft: false,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Encodes the query as ordered `(key, value)` pairs.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("draft".to_owned(), self.draft.to_string()),
            ("limit".to_owned(), self.limit.to_string()),
        ];
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        pairs.push(("sort".to_owned(), self.compiled.sort.clone()));
        for field in &self.select {
            pairs.push((format!("select[{field}]"), "true".to_owned()));
        }
        for field in &self.populate_variants {
            pairs.push((format!("populate[variants][{field}]"), "true".to_owned()));
        }
        pairs.extend(where_pairs(&self.compiled.predicate));
        pairs
    }
}

/// A `find` request against the categories collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuery {
    pub sort: String,
    pub limit: u32,
}

impl CategoryQuery {
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            sort: DEFAULT_SORT.to_owned(),
            limit,
        }
    }

    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("limit".to_owned(), self.limit.to_string()),
            ("sort".to_owned(), self.sort.clone()),
        ]
    }
}
