use axum::{extract::State, Extension, Json};
use storefront_cms::CategoryQuery;
use storefront_core::{Category, CategoryLink};

use crate::middleware::RequestId;

use super::{map_cms_error, ApiError, ApiResponse, AppState};

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<CategoryLink>>>, ApiError> {
    let page = state
        .cms
        .find_categories(&CategoryQuery::new(state.config.filter_category_limit))
        .await
        .map_err(|e| map_cms_error(req_id.0.clone(), &e))?;

    let data = page.docs.iter().map(Category::link).collect();
    Ok(Json(ApiResponse::new(req_id.0, data)))
}
