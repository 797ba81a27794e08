use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Franchisees earn this share of every client's gift value.
pub const COMMISSION_RATE_PERCENT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GiftCategory {
    Kitchen,
    Bedroom,
    Living,
    Garden,
    Electronics,
    Experiences,
    Travel,
}

impl GiftCategory {
    pub const ALL: [GiftCategory; 7] = [
        GiftCategory::Kitchen,
        GiftCategory::Bedroom,
        GiftCategory::Living,
        GiftCategory::Garden,
        GiftCategory::Electronics,
        GiftCategory::Experiences,
        GiftCategory::Travel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GiftCategory::Kitchen => "kitchen",
            GiftCategory::Bedroom => "bedroom",
            GiftCategory::Living => "living",
            GiftCategory::Garden => "garden",
            GiftCategory::Electronics => "electronics",
            GiftCategory::Experiences => "experiences",
            GiftCategory::Travel => "travel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GiftCategory::Kitchen => "Kitchen & Dining",
            GiftCategory::Bedroom => "Bedroom & Bath",
            GiftCategory::Living => "Living Room",
            GiftCategory::Garden => "Garden & Outdoor",
            GiftCategory::Electronics => "Electronics",
            GiftCategory::Experiences => "Experiences",
            GiftCategory::Travel => "Travel & Honeymoon",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            GiftCategory::Kitchen => "🍳",
            GiftCategory::Bedroom => "🛏️",
            GiftCategory::Living => "🛋️",
            GiftCategory::Garden => "🌻",
            GiftCategory::Electronics => "📱",
            GiftCategory::Experiences => "🎭",
            GiftCategory::Travel => "✈️",
        }
    }
}

impl fmt::Display for GiftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GiftCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GiftCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category {s}"))
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Gift {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in euro cents.
    pub price: i64,
    pub category: GiftCategory,
    pub image_url: String,
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GiftPreference {
    Product,
    Monetary,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WishlistItem {
    pub gift: Gift,
    pub preference: GiftPreference,
    pub added_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PurchasedGift {
    pub gift_id: String,
    pub buyer_name: String,
    pub buyer_email: String,
    pub message: Option<String>,
    pub purchased_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Completed,
    Inactive,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Client {
    pub id: Uuid,
    pub franchisee_id: Uuid,
    pub bride_name: String,
    pub partner_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub registered_at: DateTime<Utc>,
    pub status: ClientStatus,
    /// Sum of purchased gift prices, in euro cents.
    pub total_gifts_value: i64,
    pub gift_count: i64,
}

impl Client {
    pub fn commission_earned(&self) -> i64 {
        self.total_gifts_value * COMMISSION_RATE_PERCENT / 100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Expired,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Invite {
    pub id: Uuid,
    pub franchisee_id: Uuid,
    #[serde(skip_serializing)]
    pub token: String,
    pub email: String,
    pub bride_name: String,
    pub partner_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
    pub sent_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: InviteStatus,
}

impl Invite {
    /// Status as observed at `now`: a pending invite past its expiry reads as expired.
    pub fn effective_status(&self, now: DateTime<Utc>) -> InviteStatus {
        match self.status {
            InviteStatus::Pending if self.expires_at <= now => InviteStatus::Expired,
            status => status,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Franchisee {
    pub id: Uuid,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Franchisee,
}

/// Credential table row.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub name: Option<String>,
    pub client_id: Option<Uuid>,
    pub franchisee_id: Option<Uuid>,
}

/// The part of a user carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub name: Option<String>,
    pub client_id: Option<Uuid>,
    pub franchisee_id: Option<Uuid>,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            name: user.name.clone(),
            client_id: user.client_id,
            franchisee_id: user.franchisee_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct FranchiseeStats {
    pub total_clients: i64,
    pub active_clients: i64,
    pub pending_invites: i64,
    pub total_revenue: i64,
    pub total_commission: i64,
    pub this_month_revenue: i64,
    pub this_month_clients: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuditEntry {
    pub id: Uuid,
    pub actor_id: Option<Uuid>,
    pub franchisee_id: Option<Uuid>,
    pub action: String,
    pub resource: Option<String>,
    #[schema(value_type = Object)]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
