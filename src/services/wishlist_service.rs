use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::{Actor, log_audit},
    catalog,
    dto::wishlist::{
        AddWishlistItemForm, CatalogGift, ClientDashboard, NoteForm, PreferenceForm,
        WishlistSummary,
    },
    error::{AppError, AppResult},
    middleware::auth::ensure_client,
    models::SessionUser,
    routes::params::GiftQuery,
    state::AppState,
    wishlist::Wishlist,
};

pub async fn dashboard(
    state: &AppState,
    user: &SessionUser,
    query: GiftQuery,
) -> AppResult<ClientDashboard> {
    let client_id = ensure_client(user)?;
    let category = query.category_filter()?;

    let data = state.store.read().await;
    let client = data.client(client_id).ok_or(AppError::NotFound)?;
    let empty = Wishlist::new();
    let wishlist = data.wishlists.get(&client_id).unwrap_or(&empty);

    let gifts = catalog::filter(query.text(), category)
        .into_iter()
        .map(|gift| CatalogGift {
            gift: gift.clone(),
            in_wishlist: wishlist.contains(&gift.id),
        })
        .collect();

    Ok(ClientDashboard {
        bride_name: client.bride_name.clone(),
        partner_name: client.partner_name.clone(),
        gifts,
        wishlist: summarize(wishlist),
        categories: catalog::categories(),
        share_url: format!("{}/list/{}", state.config.public_url, client_id),
    })
}

pub async fn get_wishlist(state: &AppState, user: &SessionUser) -> AppResult<WishlistSummary> {
    let client_id = ensure_client(user)?;
    let data = state.store.read().await;
    Ok(data
        .wishlists
        .get(&client_id)
        .map(summarize)
        .unwrap_or_else(|| summarize(&Wishlist::new())))
}

pub async fn add_item(
    state: &AppState,
    user: &SessionUser,
    payload: AddWishlistItemForm,
) -> AppResult<WishlistSummary> {
    let gift = catalog::find(payload.gift_id.trim())
        .ok_or_else(|| AppError::BadRequest("Gift not found".into()))?;

    mutate(state, user, "wishlist_add", &gift.id, |wishlist| {
        wishlist.add(gift, payload.preference, Utc::now())
    })
    .await
}

pub async fn remove_item(
    state: &AppState,
    user: &SessionUser,
    gift_id: &str,
) -> AppResult<WishlistSummary> {
    mutate(state, user, "wishlist_remove", gift_id, |wishlist| {
        wishlist.remove(gift_id)
    })
    .await
}

pub async fn update_preference(
    state: &AppState,
    user: &SessionUser,
    gift_id: &str,
    payload: PreferenceForm,
) -> AppResult<WishlistSummary> {
    mutate(state, user, "wishlist_preference", gift_id, |wishlist| {
        wishlist.update_preference(gift_id, payload.preference)
    })
    .await
}

pub async fn set_note(
    state: &AppState,
    user: &SessionUser,
    gift_id: &str,
    payload: NoteForm,
) -> AppResult<WishlistSummary> {
    mutate(state, user, "wishlist_note", gift_id, |wishlist| {
        wishlist.set_note(gift_id, payload.note)
    })
    .await
}

/// Applies `op` to the signed-in couple's wishlist; only changes are audited.
async fn mutate<F>(
    state: &AppState,
    user: &SessionUser,
    action: &str,
    gift_id: &str,
    op: F,
) -> AppResult<WishlistSummary>
where
    F: FnOnce(&mut Wishlist) -> bool,
{
    let client_id: Uuid = ensure_client(user)?;
    let mut data = state.store.write().await;
    let franchisee_id = data
        .client(client_id)
        .map(|client| client.franchisee_id)
        .ok_or(AppError::NotFound)?;

    let wishlist = data.wishlists.entry(client_id).or_default();
    let changed = op(wishlist);
    let summary = summarize(wishlist);

    if changed {
        log_audit(
            &mut data,
            Actor {
                user_id: Some(user.id),
                franchisee_id: Some(franchisee_id),
            },
            action,
            Some("wishlists"),
            Some(serde_json::json!({ "client_id": client_id, "gift_id": gift_id })),
        );
    } else {
        tracing::debug!(action, gift_id, "wishlist unchanged");
    }

    Ok(summary)
}

fn summarize(wishlist: &Wishlist) -> WishlistSummary {
    WishlistSummary {
        items: wishlist.items().to_vec(),
        item_count: wishlist.len(),
        total_value: wishlist.total_value(),
    }
}
