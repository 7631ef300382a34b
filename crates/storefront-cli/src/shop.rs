//! Shop query commands.

use storefront_cms::{CmsClient, ProductQuery};
use storefront_core::href::form_encode_pairs;
use storefront_core::{compile, AppConfig, FilterParams, ProductCard, SearchParams};

fn product_query(pairs: &[(String, String)], limit: u32) -> ProductQuery {
    let params = FilterParams::from(SearchParams::from_pairs(pairs.iter().cloned()));
    ProductQuery::shop(compile(&params), limit)
}

/// Encoded product query string for the given `/shop` parameters.
pub(crate) fn encode_where(pairs: &[(String, String)], limit: u32) -> String {
    form_encode_pairs(&product_query(pairs, limit).query_pairs())
}

/// Fetches one page of products and prints the card view models as JSON.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the content store request
/// fails, or the output cannot be serialized.
pub(crate) async fn run_shop(
    config: &AppConfig,
    pairs: &[(String, String)],
    page: Option<u32>,
) -> anyhow::Result<()> {
    let client = CmsClient::from_config(config)?;
    let mut query = product_query(pairs, config.shop_page_size);
    if let Some(page) = page.filter(|p| *p > 0) {
        query = query.with_page(page);
    }

    let result = client.find_products(&query).await?;
    tracing::info!(
        total_docs = result.total_docs,
        returned = result.docs.len(),
        "shop query complete"
    );

    let cards: Vec<ProductCard> = result.docs.iter().map(ProductCard::from_record).collect();
    println!("{}", serde_json::to_string_pretty(&cards)?);
    Ok(())
}
