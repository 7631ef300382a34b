//! State of the shop filter panel and the links its controls navigate to.
//!
//! The panel works on the full list of current query pairs so that keys it
//! does not own (pagination, tracking parameters) survive an update.

use serde::Serialize;

use crate::href::shop_href;

/// Current shop URL query, as ordered decoded pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    pairs: Vec<(String, String)>,
}

impl FilterPanel {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn search_query(&self) -> Option<&str> {
        self.get("q")
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.get("category")
    }

    #[must_use]
    pub fn min_price(&self) -> Option<&str> {
        self.get("minPrice")
    }

    #[must_use]
    pub fn max_price(&self) -> Option<&str> {
        self.get("maxPrice")
    }

    #[must_use]
    pub fn in_stock_only(&self) -> bool {
        self.get("inStock") == Some("true")
    }

    /// Category, in-stock, and price range each count once.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.selected_category().is_some())
            + usize::from(self.in_stock_only())
            + usize::from(self.min_price().is_some() || self.max_price().is_some())
    }

    /// Applies `updates` to the current query and returns the shop link.
    ///
    /// `None` or an empty value removes every occurrence of the key. Any other
    /// value replaces the first occurrence in place (dropping later ones) or
    /// is appended when the key is absent.
    #[must_use]
    pub fn with_updates(&self, updates: &[(&str, Option<&str>)]) -> String {
        let mut pairs = self.pairs.clone();
        for (key, value) in updates {
            match value.filter(|v| !v.is_empty()) {
                None => pairs.retain(|(k, _)| k != key),
                Some(value) => {
                    if let Some(pos) = pairs.iter().position(|(k, _)| k == key) {
                        pairs[pos].1 = value.to_string();
                        let mut seen = false;
                        pairs.retain(|(k, _)| {
                            if k != key {
                                return true;
                            }
                            let keep = !seen;
                            seen = true;
                            keep
                        });
                    } else {
                        pairs.push(((*key).to_string(), value.to_string()));
                    }
                }
            }
        }
        shop_href(&pairs)
    }

    /// Selecting the already-selected category clears the category filter.
    #[must_use]
    pub fn toggle_category(&self, category_id: &str) -> String {
        let next = if self.selected_category() == Some(category_id) {
            None
        } else {
            Some(category_id)
        };
        self.with_updates(&[("category", next)])
    }

    #[must_use]
    pub fn set_in_stock(&self, checked: bool) -> String {
        self.with_updates(&[("inStock", checked.then_some("true"))])
    }

    #[must_use]
    pub fn set_price_range(&self, min: &str, max: &str) -> String {
        self.with_updates(&[("minPrice", Some(min)), ("maxPrice", Some(max))])
    }

    /// Drops every filter but keeps the search text.
    #[must_use]
    pub fn clear_filters(&self) -> String {
        match self.search_query() {
            Some(q) => shop_href(&[("q".to_string(), q.to_string())]),
            None => shop_href(&[]),
        }
    }

    /// Snapshot of the panel for the rendering layer.
    #[must_use]
    pub fn summary(&self) -> FilterPanelState {
        FilterPanelState {
            selected_category: self.selected_category().map(str::to_string),
            min_price: self.min_price().map(str::to_string),
            max_price: self.max_price().map(str::to_string),
            in_stock_only: self.in_stock_only(),
            active_filter_count: self.active_filter_count(),
            clear_href: self.clear_filters(),
            in_stock_toggle_href: self.set_in_stock(!self.in_stock_only()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterPanelState {
    pub selected_category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock_only: bool,
    pub active_filter_count: usize,
    pub clear_href: String,
    pub in_stock_toggle_href: String,
}
