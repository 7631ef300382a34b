use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use storefront_cms::{CategoryQuery, ProductQuery};
use storefront_core::{
    compile, results_summary, search_href, DocumentId, FilterPanel, FilterPanelState,
    FilterParams, ProductCard, ResultsSummary, SearchParams,
};

use crate::middleware::RequestId;

use super::{map_cms_error, ApiError, ApiResponse, AppState};

/// A sidebar category with its selection state and toggle link.
#[derive(Debug, Serialize)]
pub(super) struct CategoryOption {
    id: DocumentId,
    title: String,
    selected: bool,
    href: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ShopData {
    products: Vec<ProductCard>,
    categories: Vec<CategoryOption>,
    filters: FilterPanelState,
    summary: Option<ResultsSummary>,
    search: Option<String>,
    sort: String,
    total_docs: u64,
    page: Option<u32>,
    total_pages: u32,
    has_next_page: bool,
}

/// `page` is not a filter; anything that is not a positive integer means the
/// first page.
fn requested_page(pairs: &[(String, String)]) -> Option<u32> {
    pairs
        .iter()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.trim().parse::<u32>().ok())
        .filter(|p| *p > 0)
}

pub(super) async fn shop_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ApiResponse<ShopData>>, ApiError> {
    let panel = FilterPanel::from_pairs(pairs.iter().cloned());
    let params = FilterParams::from(SearchParams::from_pairs(pairs.iter().cloned()));
    let compiled = compile(&params);
    let sort = compiled.sort.clone();

    let mut product_query = ProductQuery::shop(compiled, state.config.shop_page_size);
    if let Some(page) = requested_page(&pairs) {
        product_query = product_query.with_page(page);
    }
    let category_query = CategoryQuery::new(state.config.filter_category_limit);

    let (products, categories) = tokio::try_join!(
        state.cms.find_products(&product_query),
        state.cms.find_categories(&category_query),
    )
    .map_err(|e| map_cms_error(req_id.0.clone(), &e))?;

    tracing::debug!(
        request_id = %req_id.0,
        total_docs = products.total_docs,
        returned = products.docs.len(),
        "shop query resolved"
    );

    let cards: Vec<ProductCard> = products.docs.iter().map(ProductCard::from_record).collect();
    let selected = panel.selected_category();
    let category_options = categories
        .docs
        .iter()
        .map(|category| {
            let id = category.id.to_string();
            CategoryOption {
                selected: selected == Some(id.as_str()),
                href: panel.toggle_category(&id),
                id: category.id.clone(),
                title: category.title.clone(),
            }
        })
        .collect();

    let data = ShopData {
        summary: results_summary(params.search_text.as_deref(), cards.len()),
        products: cards,
        categories: category_options,
        filters: panel.summary(),
        search: params.search_text,
        sort,
        total_docs: products.total_docs,
        page: products.page,
        total_pages: products.total_pages,
        has_next_page: products.has_next_page,
    };

    Ok(Json(ApiResponse::new(req_id.0, data)))
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchTarget {
    href: Option<String>,
}

/// Where the header search form navigates; `null` for blank input.
pub(super) async fn search(
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Json<ApiResponse<SearchTarget>> {
    Json(ApiResponse::new(
        req_id.0,
        SearchTarget {
            href: search_href(&query.q),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn requested_page_accepts_positive_integers() {
        assert_eq!(requested_page(&pairs(&[("page", "3")])), Some(3));
        assert_eq!(requested_page(&pairs(&[("q", "x"), ("page", " 2 ")])), Some(2));
    }

    #[test]
    fn requested_page_ignores_invalid_values() {
        assert_eq!(requested_page(&pairs(&[("page", "0")])), None);
        assert_eq!(requested_page(&pairs(&[("page", "two")])), None);
        assert_eq!(requested_page(&pairs(&[])), None);
    }
}
