use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};

use crate::{services::checkout_service, state::AppState};

/// Where the browser lands when no checkout session could be opened.
pub const CHECKOUT_FAILED_REDIRECT: &str = "/?error=stripe_failed";

#[utoipa::path(
    post,
    path = "/api/checkout",
    responses(
        (status = 303, description = "Redirect to the hosted checkout page"),
        (status = 302, description = "Checkout unavailable; redirects home with an error flag")
    ),
    tag = "Checkout"
)]
pub async fn create_checkout(State(state): State<AppState>) -> Response {
    match checkout_service::start_checkout(&state).await {
        Ok(url) => Redirect::to(&url).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to create checkout session");
            (
                StatusCode::FOUND,
                [(header::LOCATION, CHECKOUT_FAILED_REDIRECT)],
            )
                .into_response()
        }
    }
}
