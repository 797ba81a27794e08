use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::admin::{
        AdminDashboard, CancelInviteResult, ClientList, ClientStatusForm, ClientSummary,
        InviteDispatch, InviteList, SendInviteForm,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::AuditEntry,
    response::ApiResponse,
    routes::params::{Pagination, SearchQuery},
    services::admin_service,
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ActivityList {
    #[schema(value_type = Vec<AuditEntry>)]
    pub items: Vec<AuditEntry>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_dashboard))
        .route("/clients", get(list_clients))
        .route("/clients/{id}/status", post(update_client_status))
        .route("/invites", get(list_invites).post(send_invite))
        .route("/invites/{id}/resend", post(resend_invite))
        .route("/invites/{id}/cancel", post(cancel_invite))
        .route("/activity", get(list_activity))
}

#[utoipa::path(
    get,
    path = "/admin",
    params(SearchQuery),
    responses(
        (status = 200, description = "Franchisee dashboard with stats, clients and invites", body = ApiResponse<AdminDashboard>),
        (status = 401, description = "Not signed in"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin"
)]
pub async fn admin_dashboard(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<AdminDashboard>>> {
    let view = admin_service::dashboard(&state, &user, query).await?;
    Ok(Json(ApiResponse::ok("Admin dashboard", view)))
}

#[utoipa::path(
    get,
    path = "/admin/clients",
    params(SearchQuery),
    responses(
        (status = 200, description = "Clients matching the search", body = ApiResponse<ClientList>),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin"
)]
pub async fn list_clients(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<ClientList>>> {
    let (items, meta) = admin_service::list_clients(&state, &user, query).await?;
    Ok(Json(ApiResponse::success(
        "Clients",
        ClientList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    post,
    path = "/admin/clients/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    request_body(content = ClientStatusForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ClientSummary>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found")
    ),
    tag = "Admin"
)]
pub async fn update_client_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Form(payload): Form<ClientStatusForm>,
) -> AppResult<Json<ApiResponse<ClientSummary>>> {
    let client = admin_service::update_client_status(&state, &user, id, payload).await?;
    Ok(Json(ApiResponse::ok("Client status updated", client)))
}

#[utoipa::path(
    get,
    path = "/admin/invites",
    params(SearchQuery),
    responses(
        (status = 200, description = "Invites matching the search, newest first", body = ApiResponse<InviteList>),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin"
)]
pub async fn list_invites(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<InviteList>>> {
    let (items, meta) = admin_service::list_invites(&state, &user, query).await?;
    Ok(Json(ApiResponse::success(
        "Invites",
        InviteList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    post,
    path = "/admin/invites",
    request_body(content = SendInviteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Invite created; the email outcome is reported alongside", body = ApiResponse<InviteDispatch>),
        (status = 400, description = "Invalid form"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin"
)]
pub async fn send_invite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Form(payload): Form<SendInviteForm>,
) -> AppResult<(StatusCode, Json<ApiResponse<InviteDispatch>>)> {
    let dispatch = admin_service::send_invite(&state, &user, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Invite sent", dispatch)),
    ))
}

#[utoipa::path(
    post,
    path = "/admin/invites/{id}/resend",
    params(
        ("id" = Uuid, Path, description = "Invite ID")
    ),
    responses(
        (status = 200, description = "Invite window restarted and mailed again", body = ApiResponse<InviteDispatch>),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Invite already accepted")
    ),
    tag = "Admin"
)]
pub async fn resend_invite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<InviteDispatch>>> {
    let dispatch = admin_service::resend_invite(&state, &user, id).await?;
    Ok(Json(ApiResponse::ok("Invite resent", dispatch)))
}

#[utoipa::path(
    post,
    path = "/admin/invites/{id}/cancel",
    params(
        ("id" = Uuid, Path, description = "Invite ID")
    ),
    responses(
        (status = 200, description = "Invite removed; unknown ids change nothing", body = ApiResponse<CancelInviteResult>),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin"
)]
pub async fn cancel_invite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CancelInviteResult>>> {
    let result = admin_service::cancel_invite(&state, &user, id).await?;
    Ok(Json(ApiResponse::ok("Invite cancelled", result)))
}

#[utoipa::path(
    get,
    path = "/admin/activity",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Audit trail, newest first", body = ApiResponse<ActivityList>),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin"
)]
pub async fn list_activity(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ActivityList>>> {
    let (items, meta) = admin_service::activity(&state, &user, pagination).await?;
    Ok(Json(ApiResponse::success(
        "Activity",
        ActivityList { items },
        Some(meta),
    )))
}
