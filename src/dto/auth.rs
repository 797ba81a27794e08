use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::SessionUser;

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Franchisee sign-up form.
#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterForm {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub password: String,
    /// Checkbox; browsers send `on` when ticked and omit it otherwise.
    pub terms: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Claims {
    #[serde(flatten)]
    pub user: SessionUser,
    pub exp: usize,
}
