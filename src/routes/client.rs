use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::wishlist::{
        AddWishlistItemForm, ClientDashboard, NoteForm, PreferenceForm, WishlistSummary,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    routes::params::GiftQuery,
    services::wishlist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client_dashboard))
        .route("/wishlist", get(get_wishlist).post(add_to_wishlist))
        .route("/wishlist/{gift_id}/remove", post(remove_from_wishlist))
        .route("/wishlist/{gift_id}/preference", post(update_preference))
        .route("/wishlist/{gift_id}/note", post(set_note))
}

#[utoipa::path(
    get,
    path = "/client",
    params(GiftQuery),
    responses(
        (status = 200, description = "Wishlist builder", body = ApiResponse<ClientDashboard>),
        (status = 401, description = "Not signed in"),
        (status = 403, description = "Not a client")
    ),
    tag = "Client"
)]
pub async fn client_dashboard(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<GiftQuery>,
) -> AppResult<Json<ApiResponse<ClientDashboard>>> {
    let view = wishlist_service::dashboard(&state, &user, query).await?;
    Ok(Json(ApiResponse::ok("Client dashboard", view)))
}

#[utoipa::path(
    get,
    path = "/client/wishlist",
    responses(
        (status = 200, description = "Current wishlist", body = ApiResponse<WishlistSummary>)
    ),
    tag = "Client"
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> AppResult<Json<ApiResponse<WishlistSummary>>> {
    let summary = wishlist_service::get_wishlist(&state, &user).await?;
    Ok(Json(ApiResponse::ok("Wishlist", summary)))
}

#[utoipa::path(
    post,
    path = "/client/wishlist",
    request_body(content = AddWishlistItemForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Added; adding a gift twice changes nothing", body = ApiResponse<WishlistSummary>),
        (status = 400, description = "Unknown gift")
    ),
    tag = "Client"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Form(payload): Form<AddWishlistItemForm>,
) -> AppResult<Json<ApiResponse<WishlistSummary>>> {
    let summary = wishlist_service::add_item(&state, &user, payload).await?;
    Ok(Json(ApiResponse::ok("Added to wishlist", summary)))
}

#[utoipa::path(
    post,
    path = "/client/wishlist/{gift_id}/remove",
    params(
        ("gift_id" = String, Path, description = "Gift ID")
    ),
    responses(
        (status = 200, description = "Removed; unknown ids change nothing", body = ApiResponse<WishlistSummary>)
    ),
    tag = "Client"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(gift_id): Path<String>,
) -> AppResult<Json<ApiResponse<WishlistSummary>>> {
    let summary = wishlist_service::remove_item(&state, &user, &gift_id).await?;
    Ok(Json(ApiResponse::ok("Removed from wishlist", summary)))
}

#[utoipa::path(
    post,
    path = "/client/wishlist/{gift_id}/preference",
    params(
        ("gift_id" = String, Path, description = "Gift ID")
    ),
    request_body(content = PreferenceForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Preference updated", body = ApiResponse<WishlistSummary>)
    ),
    tag = "Client"
)]
pub async fn update_preference(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(gift_id): Path<String>,
    Form(payload): Form<PreferenceForm>,
) -> AppResult<Json<ApiResponse<WishlistSummary>>> {
    let summary = wishlist_service::update_preference(&state, &user, &gift_id, payload).await?;
    Ok(Json(ApiResponse::ok("Preference updated", summary)))
}

#[utoipa::path(
    post,
    path = "/client/wishlist/{gift_id}/note",
    params(
        ("gift_id" = String, Path, description = "Gift ID")
    ),
    request_body(content = NoteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Note saved; a blank note clears it", body = ApiResponse<WishlistSummary>)
    ),
    tag = "Client"
)]
pub async fn set_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(gift_id): Path<String>,
    Form(payload): Form<NoteForm>,
) -> AppResult<Json<ApiResponse<WishlistSummary>>> {
    let summary = wishlist_service::set_note(&state, &user, &gift_id, payload).await?;
    Ok(Json(ApiResponse::ok("Note saved", summary)))
}
