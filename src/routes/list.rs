use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::registry::{GiftListView, PurchaseForm},
    error::AppResult,
    models::PurchasedGift,
    response::ApiResponse,
    routes::params::GiftQuery,
    services::registry_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(view_list))
        .route("/{id}/purchase", post(purchase_gift))
}

#[utoipa::path(
    get,
    path = "/list/{id}",
    params(
        ("id" = String, Path, description = "List alias or client ID"),
        GiftQuery
    ),
    responses(
        (status = 200, description = "Public gift list", body = ApiResponse<GiftListView>),
        (status = 404, description = "Not Found")
    ),
    tag = "Gift list"
)]
pub async fn view_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<GiftQuery>,
) -> AppResult<Json<ApiResponse<GiftListView>>> {
    let view = registry_service::view_list(&state, &id, query).await?;
    Ok(Json(ApiResponse::ok("Gift list", view)))
}

#[utoipa::path(
    post,
    path = "/list/{id}/purchase",
    params(
        ("id" = String, Path, description = "List alias or client ID")
    ),
    request_body(content = PurchaseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Gift reserved for the buyer", body = ApiResponse<PurchasedGift>),
        (status = 400, description = "Missing buyer details or gift not on the list"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Gift already purchased")
    ),
    tag = "Gift list"
)]
pub async fn purchase_gift(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(payload): Form<PurchaseForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<PurchasedGift>>)> {
    let purchase = registry_service::purchase_gift(&state, &id, payload).await?;
    tracing::info!(list_id = %id, gift_id = %purchase.gift_id, "gift purchased");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Thank you for your gift", purchase)),
    ))
}
