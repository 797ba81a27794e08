use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{response::ApiResponse, seed::DEFAULT_LIST};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HomeQuery {
    /// Set by failed redirects, e.g. `stripe_failed`.
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeView {
    pub title: String,
    pub tagline: String,
    pub registry_url: String,
    pub manage_url: String,
    pub error: Option<String>,
}

#[utoipa::path(
    get,
    path = "/",
    params(HomeQuery),
    responses(
        (status = 200, description = "Landing page", body = ApiResponse<HomeView>)
    ),
    tag = "Pages"
)]
pub async fn home(Query(query): Query<HomeQuery>) -> Json<ApiResponse<HomeView>> {
    let view = HomeView {
        title: "Wedding Gift Registry".to_string(),
        tagline: "Thank you for celebrating with us! Browse our gift registry and help \
                  us start our new journey together."
            .to_string(),
        registry_url: format!("/list/{DEFAULT_LIST}"),
        manage_url: "/client".to_string(),
        error: query.error.filter(|e| !e.is_empty()),
    };
    Json(ApiResponse::ok("Home", view))
}
