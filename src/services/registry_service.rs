use chrono::Utc;

use crate::{
    audit::{Actor, log_audit},
    catalog,
    dto::{
        non_empty,
        registry::{CoupleInfo, GiftListItem, GiftListStats, GiftListView, PurchaseForm},
        required,
    },
    error::{AppError, AppResult},
    models::PurchasedGift,
    routes::params::GiftQuery,
    services::auth_service::normalize_email,
    state::AppState,
};

/// The guest-facing view of a couple's list.
pub async fn view_list(
    state: &AppState,
    list_id: &str,
    query: GiftQuery,
) -> AppResult<GiftListView> {
    let category = query.category_filter()?;

    let data = state.store.read().await;
    let client_id = data.resolve_list(list_id).ok_or(AppError::NotFound)?;
    let client = data.client(client_id).ok_or(AppError::NotFound)?;
    let purchases = data.purchases.get(&client_id).map(Vec::as_slice).unwrap_or(&[]);

    let items: Vec<GiftListItem> = data
        .wishlists
        .get(&client_id)
        .map(|wishlist| wishlist.items())
        .unwrap_or(&[])
        .iter()
        .map(|item| {
            let purchase = purchases.iter().find(|p| p.gift_id == item.gift.id);
            GiftListItem {
                gift: item.gift.clone(),
                is_purchased: purchase.is_some(),
                purchased_by: purchase.map(|p| p.buyer_name.clone()),
            }
        })
        .collect();

    let stats = list_stats(&items);
    let items = items
        .into_iter()
        .filter(|item| catalog::matches(&item.gift, query.text(), category))
        .collect();

    tracing::debug!(list_id, %client_id, "gift list viewed");

    Ok(GiftListView {
        list_id: list_id.to_string(),
        couple: CoupleInfo {
            bride_name: client.bride_name.clone(),
            partner_name: client.partner_name.clone(),
            wedding_date: client.wedding_date,
        },
        items,
        stats,
        categories: catalog::categories(),
    })
}

/// Reserves a gift for a guest. Check and append happen under one write lock, so a
/// gift can only ever be bought once.
pub async fn purchase_gift(
    state: &AppState,
    list_id: &str,
    payload: PurchaseForm,
) -> AppResult<PurchasedGift> {
    let buyer_name = required(&payload.buyer_name, "buyer_name")?;
    let buyer_email = normalize_email(&payload.buyer_email)?;
    let gift_id = required(&payload.gift_id, "gift_id")?;

    let mut data = state.store.write().await;
    let client_id = data.resolve_list(list_id).ok_or(AppError::NotFound)?;

    let price = data
        .wishlists
        .get(&client_id)
        .and_then(|wishlist| wishlist.get(&gift_id))
        .map(|item| item.gift.price)
        .ok_or_else(|| AppError::BadRequest("Gift is not on this list".into()))?;

    let purchases = data.purchases.entry(client_id).or_default();
    if purchases.iter().any(|p| p.gift_id == gift_id) {
        return Err(AppError::Conflict("Gift has already been purchased".into()));
    }

    let purchase = PurchasedGift {
        gift_id: gift_id.clone(),
        buyer_name,
        buyer_email,
        message: non_empty(payload.message),
        purchased_at: Utc::now(),
    };
    purchases.push(purchase.clone());

    let franchisee_id = match data.client_mut(client_id) {
        Some(client) => {
            client.total_gifts_value += price;
            client.gift_count += 1;
            Some(client.franchisee_id)
        }
        None => None,
    };

    log_audit(
        &mut data,
        Actor {
            user_id: None,
            franchisee_id,
        },
        "gift_purchase",
        Some("purchases"),
        Some(serde_json::json!({ "client_id": client_id, "gift_id": gift_id, "price": price })),
    );

    Ok(purchase)
}

fn list_stats(items: &[GiftListItem]) -> GiftListStats {
    let purchased: Vec<_> = items.iter().filter(|i| i.is_purchased).collect();
    GiftListStats {
        total: items.len(),
        purchased: purchased.len(),
        available: items.len() - purchased.len(),
        total_value: items.iter().map(|i| i.gift.price).sum(),
        purchased_value: purchased.iter().map(|i| i.gift.price).sum(),
    }
}
