use axum::{Extension, Json};
use storefront_core::{FeaturedCategoriesBlock, FeaturedCategoriesView};

use crate::middleware::RequestId;

use super::ApiResponse;

/// Renders a featured-categories layout block. `data` is `null` when the
/// block has nothing to show.
pub(super) async fn featured_categories(
    Extension(req_id): Extension<RequestId>,
    Json(block): Json<FeaturedCategoriesBlock>,
) -> Json<ApiResponse<Option<FeaturedCategoriesView>>> {
    Json(ApiResponse::new(req_id.0, block.view()))
}
