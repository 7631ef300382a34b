use serde::{Deserialize, Serialize};

use crate::documents::{DocumentId, Media, Relation};
use crate::href::category_href;

pub const FEATURED_CATEGORIES_HEADING: &str = "Shop by Category";
pub const MAX_FEATURED_CATEGORIES: usize = 6;

/// A product category document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: DocumentId,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<Relation<Media>>,
}

impl Category {
    #[must_use]
    pub fn link(&self) -> CategoryLink {
        CategoryLink {
            id: self.id.clone(),
            title: self.title.clone(),
            href: category_href(&self.id),
        }
    }
}

/// Category entry for the filter sidebar and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLink {
    pub id: DocumentId,
    pub title: String,
    pub href: String,
}

/// The "featured categories" layout block as stored on a page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeaturedCategoriesBlock {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub categories: Vec<Relation<Category>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedCategory {
    pub id: DocumentId,
    pub title: String,
    pub description: Option<String>,
    pub href: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedCategoriesView {
    pub heading: String,
    pub categories: Vec<FeaturedCategory>,
}

impl FeaturedCategoriesBlock {
    /// Builds the renderable block, or `None` when no category reference was
    /// populated and the block should be hidden.
    #[must_use]
    pub fn view(&self) -> Option<FeaturedCategoriesView> {
        let categories: Vec<FeaturedCategory> = self
            .categories
            .iter()
            .filter_map(Relation::populated)
            .take(MAX_FEATURED_CATEGORIES)
            .map(|category| {
                let image = category.image.as_ref().and_then(Relation::populated);
                FeaturedCategory {
                    id: category.id.clone(),
                    title: category.title.clone(),
                    description: category.description.clone().filter(|d| !d.is_empty()),
                    href: category_href(&category.id),
                    image_url: image.and_then(|m| m.url.clone()),
                    image_alt: image.and_then(|m| m.alt.clone()),
                }
            })
            .collect();

        if categories.is_empty() {
            return None;
        }

        Some(FeaturedCategoriesView {
            heading: self
                .heading
                .clone()
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| FEATURED_CATEGORIES_HEADING.to_string()),
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_link_points_at_filtered_shop() {
        let category = Category {
            id: DocumentId::Number(4),
            title: "Hangers".to_string(),
            slug: Some("hangers".to_string()),
            description: None,
            image: None,
        };
        let link = category.link();
        assert_eq!(link.href, "/shop?category=4");
        assert_eq!(link.title, "Hangers");
    }

    #[test]
    fn featured_block_skips_unpopulated_categories() {
        let block: FeaturedCategoriesBlock = serde_json::from_value(serde_json::json!({
            "categories": [
                5,
                {"id": 6, "title": "Chemicals", "description": "", "image": {"id": 1, "url": "/media/chem.jpg", "alt": "Drums"}},
                {"id": 7, "title": "Packaging", "image": 12}
            ]
        }))
        .unwrap();

        let view = block.view().expect("block has populated categories");
        assert_eq!(view.heading, FEATURED_CATEGORIES_HEADING);
        assert_eq!(view.categories.len(), 2);
        assert_eq!(view.categories[0].image_url.as_deref(), Some("/media/chem.jpg"));
        assert!(view.categories[0].description.is_none());
        assert!(view.categories[1].image_url.is_none());
        assert_eq!(view.categories[1].href, "/shop?category=7");
    }

    #[test]
    fn featured_block_hidden_without_populated_categories() {
        let block = FeaturedCategoriesBlock {
            heading: Some("Browse".to_string()),
            categories: vec![Relation::Unpopulated(serde_json::json!(1))],
        };
        assert!(block.view().is_none());
    }

    #[test]
    fn featured_block_caps_category_count() {
        let categories = (0..9)
            .map(|i| {
                Relation::Populated(Category {
                    id: DocumentId::Number(i),
                    title: format!("Category {i}"),
                    slug: None,
                    description: None,
                    image: None,
                })
            })
            .collect();
        let block = FeaturedCategoriesBlock {
            heading: Some("Browse".to_string()),
            categories,
        };
        let view = block.view().unwrap();
        assert_eq!(view.heading, "Browse");
        assert_eq!(view.categories.len(), MAX_FEATURED_CATEGORIES);
    }
}
