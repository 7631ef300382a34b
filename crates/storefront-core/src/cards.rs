//! Product-card and result-summary view models for the shop grid.

use serde::Serialize;

use crate::display::{resolve, StockStatus};
use crate::documents::DocumentId;
use crate::href::product_href;
use crate::products::ProductRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardImage {
    pub url: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: DocumentId,
    pub title: String,
    pub href: Option<String>,
    pub image: Option<CardImage>,
    pub display_price: Option<f64>,
    pub stock_status: StockStatus,
    pub stock_badge: Option<&'static str>,
}

impl ProductCard {
    #[must_use]
    pub fn from_record(product: &ProductRecord) -> Self {
        let state = resolve(product);
        let image = product.primary_image().and_then(|media| {
            media.url.as_ref().map(|url| CardImage {
                url: url.clone(),
                alt: media.alt.clone(),
            })
        });

        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            href: product.slug.as_deref().map(product_href),
            image,
            display_price: state.display_price,
            stock_status: state.stock_status,
            stock_badge: state.stock_status.badge_label(),
        }
    }
}

pub const NO_RESULTS_MESSAGE: &str = "No products found. Please try different filters.";

/// Text above the product grid. `query` is rendered emphasised after `lead`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    pub lead: String,
    pub query: Option<String>,
}

/// Summary line for a result set, or `None` when a plain listing needs none.
#[must_use]
pub fn results_summary(search: Option<&str>, count: usize) -> Option<ResultsSummary> {
    match search.filter(|s| !s.is_empty()) {
        Some(query) => {
            let lead = if count == 0 {
                "There are no products that match ".to_string()
            } else {
                let noun = if count > 1 { "results" } else { "result" };
                format!("Showing {count} {noun} for ")
            };
            Some(ResultsSummary {
                lead,
                query: Some(query.to_string()),
            })
        }
        None if count == 0 => Some(ResultsSummary {
            lead: NO_RESULTS_MESSAGE.to_string(),
            query: None,
        }),
        None => None,
    }
}
