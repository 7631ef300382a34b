use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use storefront_cms::CategoryQuery;
use storefront_core::{Category, CategoryLink, NavLink, NavigationGlobal};

use crate::middleware::RequestId;

use super::{map_cms_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct NavigationQuery {
    /// Current pathname, used to mark the active header link.
    path: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct HeaderData {
    nav: Vec<NavLink>,
}

#[derive(Debug, Serialize)]
pub(super) struct FooterData {
    nav: Vec<NavLink>,
    categories: Vec<CategoryLink>,
    copyright: String,
}

#[derive(Debug, Serialize)]
pub(super) struct NavigationData {
    header: HeaderData,
    footer: FooterData,
}

pub(super) async fn navigation(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<ApiResponse<NavigationData>>, ApiError> {
    let category_query = CategoryQuery::new(state.config.footer_category_limit);
    let (header, footer, categories) = tokio::try_join!(
        state.cms.find_global::<NavigationGlobal>("header"),
        state.cms.find_global::<NavigationGlobal>("footer"),
        state.cms.find_categories(&category_query),
    )
    .map_err(|e| map_cms_error(req_id.0.clone(), &e))?;

    let pathname = query.path.as_deref().filter(|p| !p.is_empty());
    let data = NavigationData {
        header: HeaderData {
            nav: header.links(pathname),
        },
        footer: FooterData {
            nav: footer.links(None),
            categories: categories.docs.iter().map(Category::link).collect(),
            copyright: state.config.site.copyright_notice(Utc::now().year()),
        },
    };

    Ok(Json(ApiResponse::new(req_id.0, data)))
}
