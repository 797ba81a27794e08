use axum::{
    Json, Router,
    extract::{Path, Query},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    catalog::{self, CategoryInfo},
    error::{AppError, AppResult},
    models::Gift,
    response::{ApiResponse, paginate},
    routes::params::GiftQuery,
    state::AppState,
};

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct GiftList {
    #[schema(value_type = Vec<Gift>)]
    pub items: Vec<Gift>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_gifts))
        .route("/categories", get(list_categories))
        .route("/{id}", get(get_gift))
}

#[utoipa::path(
    get,
    path = "/gifts",
    params(GiftQuery),
    responses(
        (status = 200, description = "Browse the gift catalog", body = ApiResponse<GiftList>),
        (status = 400, description = "Unknown category")
    ),
    tag = "Gifts"
)]
pub async fn list_gifts(Query(query): Query<GiftQuery>) -> AppResult<Json<ApiResponse<GiftList>>> {
    let category = query.category_filter()?;
    let gifts: Vec<Gift> = catalog::filter(query.text(), category)
        .into_iter()
        .cloned()
        .collect();
    let (items, meta) = paginate(gifts, query.pagination());
    Ok(Json(ApiResponse::success(
        "Gifts",
        GiftList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/gifts/categories",
    responses(
        (status = 200, description = "Gift categories with labels", body = ApiResponse<Vec<CategoryInfo>>)
    ),
    tag = "Gifts"
)]
pub async fn list_categories() -> Json<ApiResponse<Vec<CategoryInfo>>> {
    Json(ApiResponse::ok("Categories", catalog::categories()))
}

#[utoipa::path(
    get,
    path = "/gifts/{id}",
    params(
        ("id" = String, Path, description = "Gift ID")
    ),
    responses(
        (status = 200, description = "Gift", body = ApiResponse<Gift>),
        (status = 404, description = "Not Found")
    ),
    tag = "Gifts"
)]
pub async fn get_gift(Path(id): Path<String>) -> AppResult<Json<ApiResponse<Gift>>> {
    let gift = catalog::find(&id).cloned().ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::ok("Gift", gift)))
}
