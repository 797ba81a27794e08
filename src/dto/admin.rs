use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    integrations::email::EmailOutcome,
    models::{Client, ClientStatus, Franchisee, FranchiseeStats, InviteStatus},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendInviteForm {
    pub email: String,
    pub bride_name: String,
    pub partner_name: Option<String>,
    pub wedding_date: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClientStatusForm {
    pub status: ClientStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClientSummary {
    #[serde(flatten)]
    pub client: Client,
    /// Euro cents.
    pub commission_earned: i64,
}

impl From<Client> for ClientSummary {
    fn from(client: Client) -> Self {
        Self {
            commission_earned: client.commission_earned(),
            client,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InviteSummary {
    pub id: Uuid,
    pub email: String,
    pub bride_name: String,
    pub partner_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub sent_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: InviteStatus,
    pub invite_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InviteDispatch {
    pub invite: InviteSummary,
    pub email: EmailOutcome,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CancelInviteResult {
    pub removed: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDashboard {
    pub franchisee: Franchisee,
    pub stats: FranchiseeStats,
    pub clients: Vec<ClientSummary>,
    pub invites: Vec<InviteSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ClientList {
    #[schema(value_type = Vec<ClientSummary>)]
    pub items: Vec<ClientSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct InviteList {
    #[schema(value_type = Vec<InviteSummary>)]
    pub items: Vec<InviteSummary>,
}
