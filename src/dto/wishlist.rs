use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    catalog::CategoryInfo,
    models::{Gift, GiftPreference, WishlistItem},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddWishlistItemForm {
    pub gift_id: String,
    pub preference: GiftPreference,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PreferenceForm {
    pub preference: GiftPreference,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NoteForm {
    pub note: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogGift {
    #[serde(flatten)]
    pub gift: Gift,
    pub in_wishlist: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistSummary {
    pub items: Vec<WishlistItem>,
    pub item_count: usize,
    /// Euro cents.
    pub total_value: i64,
}

/// Everything the couple's wishlist builder page shows.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClientDashboard {
    pub bride_name: String,
    pub partner_name: Option<String>,
    pub gifts: Vec<CatalogGift>,
    pub wishlist: WishlistSummary,
    pub categories: Vec<CategoryInfo>,
    /// Public link guests use to buy from this wishlist.
    pub share_url: String,
}
