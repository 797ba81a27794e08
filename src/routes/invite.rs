use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::invite::{AcceptInviteForm, InviteLanding},
    error::AppResult,
    response::ApiResponse,
    routes::auth::{home_for, start_session},
    services::invite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{token}", get(invite_landing).post(accept_invite))
}

#[utoipa::path(
    get,
    path = "/invite/{token}",
    params(
        ("token" = String, Path, description = "Invite token from the email link")
    ),
    responses(
        (status = 200, description = "Invitation details; expired invites are flagged", body = ApiResponse<InviteLanding>),
        (status = 404, description = "Unknown token")
    ),
    tag = "Invite"
)]
pub async fn invite_landing(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<ApiResponse<InviteLanding>>> {
    let landing = invite_service::landing(&state, &token).await?;
    Ok(Json(ApiResponse::ok("Invitation", landing)))
}

#[utoipa::path(
    post,
    path = "/invite/{token}",
    params(
        ("token" = String, Path, description = "Invite token from the email link")
    ),
    request_body(content = AcceptInviteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created; redirects to the wishlist builder"),
        (status = 400, description = "Invite expired or used, or invalid form"),
        (status = 404, description = "Unknown token")
    ),
    tag = "Invite"
)]
pub async fn accept_invite(
    State(state): State<AppState>,
    Path(token): Path<String>,
    jar: CookieJar,
    Form(payload): Form<AcceptInviteForm>,
) -> AppResult<impl IntoResponse> {
    let user = invite_service::accept(&state, &token, payload).await?;
    tracing::info!(user_id = %user.id, client_id = ?user.client_id, "invite accepted");
    start_session(&state, jar, &user, home_for(user.role))
}
