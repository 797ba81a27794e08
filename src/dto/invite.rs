use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::InviteStatus;

/// What the invitee sees when opening their link.
#[derive(Debug, Serialize, ToSchema)]
pub struct InviteLanding {
    pub bride_name: String,
    pub partner_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub franchisee_name: String,
    pub email: String,
    pub status: InviteStatus,
    pub expired: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AcceptInviteForm {
    pub bride_name: String,
    pub partner_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub wedding_date: Option<String>,
    pub password: String,
}
