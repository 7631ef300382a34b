use serde::{Deserialize, Deserializer};

use crate::categories::Category;
use crate::documents::{null_as_empty, DocumentId, Media, Relation};

/// A product document as returned by the shop query.
///
/// Only the fields selected for the shop page are modelled; anything else the
/// store returns is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: DocumentId,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Base price, used when no variant price applies.
    #[serde(default, rename = "priceInUSD")]
    pub price_in_usd: Option<f64>,
    /// Base inventory count, used when variants are disabled.
    #[serde(default)]
    pub inventory: Option<i64>,
    #[serde(default)]
    pub enable_variants: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gallery: Vec<GalleryItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<Relation<Category>>,
    /// Variant entries in store order. The store returns these as a join
    /// (`{"docs": [...]}`); entries that were not populated stay
    /// [`Relation::Unpopulated`].
    #[serde(default, deserialize_with = "join_docs")]
    pub variants: Vec<Relation<VariantRecord>>,
}

impl ProductRecord {
    #[must_use]
    pub fn variants_enabled(&self) -> bool {
        self.enable_variants.unwrap_or(false)
    }

    /// First gallery image, if its upload was populated.
    #[must_use]
    pub fn primary_image(&self) -> Option<&Media> {
        self.gallery
            .first()
            .and_then(|item| item.image.as_ref())
            .and_then(Relation::populated)
    }

    /// Iterates over the variant entries that were populated.
    pub fn populated_variants(&self) -> impl Iterator<Item = &VariantRecord> {
        self.variants.iter().filter_map(Relation::populated)
    }
}

/// A sellable sub-configuration of a product (size, colour, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    pub id: DocumentId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "priceInUSD")]
    pub price_in_usd: Option<f64>,
    #[serde(default)]
    pub inventory: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub image: Option<Relation<Media>>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct JoinDocs<T> {
    #[serde(default)]
    docs: Vec<T>,
}

fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unwraps a join field (`{"docs": [...], "hasNextPage": ...}`) into its docs.
fn join_docs<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<JoinDocs<T>>::deserialize(deserializer)?
        .map(|join| join.docs)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_shop_query_document() {
        let json = serde_json::json!({
            "id": 12,
            "title": "Hanger Covers",
            "slug": "hanger-covers",
            "priceInUSD": 19.5,
            "inventory": 4,
            "enableVariants": true,
            "gallery": [{"id": "g1", "image": {"id": 9, "url": "/media/covers.jpg", "alt": "Covers"}}],
            "categories": [3],
            "variants": {
                "docs": [
                    {"id": 100, "priceInUSD": 18.0, "inventory": 2},
                    101
                ],
                "hasNextPage": false
            }
        });

        let product: ProductRecord = serde_json::from_value(json).expect("deserialize");
        assert_eq!(product.id, DocumentId::Number(12));
        assert_eq!(product.slug.as_deref(), Some("hanger-covers"));
        assert_eq!(product.price_in_usd, Some(19.5));
        assert_eq!(
            product.populated_variants().next().and_then(|v| v.price_in_usd),
            Some(18.0)
        );
        assert!(product.variants_enabled());
        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.populated_variants().count(), 1);
        assert_eq!(
            product.primary_image().and_then(|m| m.url.as_deref()),
            Some("/media/covers.jpg")
        );
        assert!(product.categories[0].populated().is_none());
    }

    #[test]
    fn tolerates_nulls_and_missing_fields() {
        let json = serde_json::json!({
            "id": "abc",
            "title": "Spot Remover",
            "priceInUSD": null,
            "enableVariants": null,
            "gallery": null,
            "variants": null
        });

        let product: ProductRecord = serde_json::from_value(json).expect("deserialize");
        assert!(!product.variants_enabled());
        assert!(product.gallery.is_empty());
        assert!(product.variants.is_empty());
        assert!(product.price_in_usd.is_none());
        assert!(product.primary_image().is_none());
    }

    #[test]
    fn missing_or_null_title_is_empty() {
        let missing: ProductRecord =
            serde_json::from_value(serde_json::json!({"id": 1, "priceInUSD": 4.0}))
                .expect("deserialize");
        let null: ProductRecord =
            serde_json::from_value(serde_json::json!({"id": 2, "title": null}))
                .expect("deserialize");
        assert_eq!(missing.title, "");
        assert_eq!(missing.price_in_usd, Some(4.0));
        assert_eq!(null.title, "");
    }

    #[test]
    fn primary_image_skips_unpopulated_upload() {
        let json = serde_json::json!({
            "id": 1,
            "title": "Steam Iron",
            "gallery": [{"image": 55}]
        });
        let product: ProductRecord = serde_json::from_value(json).expect("deserialize");
        assert!(product.primary_image().is_none());
    }
}
