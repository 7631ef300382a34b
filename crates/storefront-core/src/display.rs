//! Display price and stock classification for product cards.

use serde::Serialize;

use crate::documents::Relation;
use crate::products::ProductRecord;

/// Inventory at or below this (and above zero) is shown as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Badge text for the card overlay; in-stock products carry no badge.
    #[must_use]
    pub fn badge_label(self) -> Option<&'static str> {
        match self {
            StockStatus::OutOfStock => Some("Out of Stock"),
            StockStatus::LowStock => Some("Low Stock"),
            StockStatus::InStock => None,
        }
    }
}

/// Values derived from a product record for one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayState {
    pub display_price: Option<f64>,
    pub stock_status: StockStatus,
}

/// Derives the display price and stock status of `product`.
///
/// The price is the first variant entry's price when that entry is populated
/// and carries a non-zero price, otherwise the base price. The first entry is
/// used even when a later variant is cheaper or the store returned the
/// variants in no particular order.
///
/// Stock is aggregated over populated variants when variants are enabled and
/// taken from the base inventory otherwise. Unpopulated variant entries are
/// skipped.
#[must_use]
pub fn resolve(product: &ProductRecord) -> DisplayState {
    DisplayState {
        display_price: display_price(product),
        stock_status: stock_status(product),
    }
}

fn display_price(product: &ProductRecord) -> Option<f64> {
    product
        .variants
        .first()
        .and_then(Relation::populated)
        .and_then(|variant| variant.price_in_usd)
        .filter(|price| *price != 0.0)
        .or(product.price_in_usd)
}

fn stock_status(product: &ProductRecord) -> StockStatus {
    if product.variants_enabled() {
        classify(
            product
                .populated_variants()
                .map(|variant| variant.inventory.unwrap_or(0)),
        )
    } else {
        classify(std::iter::once(product.inventory.unwrap_or(0)))
    }
}

fn classify(levels: impl IntoIterator<Item = i64>) -> StockStatus {
    let mut has_stock = false;
    let mut is_low = false;
    for level in levels {
        if level > 0 {
            has_stock = true;
            is_low |= level <= LOW_STOCK_THRESHOLD;
        }
    }

    if !has_stock {
        StockStatus::OutOfStock
    } else if is_low {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}
