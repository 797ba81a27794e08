use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use secrecy::ExposeSecret;

use crate::{
    dto::auth::{LoginForm, RegisterForm},
    error::AppResult,
    middleware::auth::{AuthUser, clear_session_cookie, encode_session, session_cookie},
    models::{SessionUser, UserRole},
    response::ApiResponse,
    services::auth_service::{login_user, register_franchisee},
    state::AppState,
};

/// Where each role lands after signing in.
pub fn home_for(role: UserRole) -> &'static str {
    match role {
        UserRole::Client => "/client",
        UserRole::Franchisee => "/admin",
    }
}

/// Sets the session cookie for `user` and sends the browser to `to`.
pub fn start_session(
    state: &AppState,
    jar: CookieJar,
    user: &SessionUser,
    to: &str,
) -> AppResult<(CookieJar, Redirect)> {
    let token = encode_session(user, state.config.session_secret.expose_secret())?;
    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    Ok((jar, Redirect::to(to)))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Signed in; redirects to the role's dashboard"),
        (status = 400, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(payload): Form<LoginForm>,
) -> AppResult<impl IntoResponse> {
    let user = login_user(&state, payload).await?;
    tracing::info!(user_id = %user.id, role = ?user.role, "user signed in");
    start_session(&state, jar, &user, home_for(user.role))
}

#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 303, description = "Session cleared; redirects home")
    ),
    tag = "Auth"
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(clear_session_cookie(state.config.cookie_secure));
    (jar, Redirect::to("/"))
}

#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Franchisee created; redirects to the dashboard"),
        (status = 400, description = "Invalid form or email already taken")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(payload): Form<RegisterForm>,
) -> AppResult<impl IntoResponse> {
    let user = register_franchisee(&state, payload).await?;
    start_session(&state, jar, &user, home_for(user.role))
}

#[utoipa::path(
    get,
    path = "/session",
    responses(
        (status = 200, description = "Signed-in user", body = ApiResponse<SessionUser>),
        (status = 401, description = "No session")
    ),
    tag = "Auth"
)]
pub async fn current_session(AuthUser(user): AuthUser) -> Json<ApiResponse<SessionUser>> {
    Json(ApiResponse::ok("Session", user))
}
