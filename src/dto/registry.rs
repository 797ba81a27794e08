use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{catalog::CategoryInfo, models::Gift};

#[derive(Debug, Deserialize, ToSchema)]
pub struct PurchaseForm {
    pub gift_id: String,
    pub buyer_name: String,
    pub buyer_email: String,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CoupleInfo {
    pub bride_name: String,
    pub partner_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GiftListItem {
    pub gift: Gift,
    pub is_purchased: bool,
    pub purchased_by: Option<String>,
}

/// Counts and values over the whole list, independent of the active filter.
#[derive(Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct GiftListStats {
    pub total: usize,
    pub purchased: usize,
    pub available: usize,
    pub total_value: i64,
    pub purchased_value: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GiftListView {
    pub list_id: String,
    pub couple: CoupleInfo,
    pub items: Vec<GiftListItem>,
    pub stats: GiftListStats,
    pub categories: Vec<CategoryInfo>,
}
