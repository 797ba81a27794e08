mod common;

use common::{demo_client, demo_franchisee, test_app};
use wedding_registry::{
    dto::wishlist::{AddWishlistItemForm, NoteForm, PreferenceForm},
    error::AppError,
    models::GiftPreference,
    routes::params::GiftQuery,
    services::{admin_service, wishlist_service},
};

// Couple adds, tweaks and removes gifts; repeated adds and unknown removals change nothing.
#[tokio::test]
async fn couple_curates_their_wishlist() -> anyhow::Result<()> {
    let app = test_app()?;
    let bride = demo_client(&app.state).await;

    let start = wishlist_service::get_wishlist(&app.state, &bride).await?;
    assert_eq!(start.item_count, 14);

    let added = wishlist_service::add_item(
        &app.state,
        &bride,
        AddWishlistItemForm {
            gift_id: "k4".into(),
            preference: GiftPreference::Product,
        },
    )
    .await?;
    assert_eq!(added.item_count, 15);
    assert_eq!(added.items.last().map(|i| i.gift.id.as_str()), Some("k4"));

    let again = wishlist_service::add_item(
        &app.state,
        &bride,
        AddWishlistItemForm {
            gift_id: "k4".into(),
            preference: GiftPreference::Monetary,
        },
    )
    .await?;
    assert_eq!(again.item_count, 15);

    let updated = wishlist_service::update_preference(
        &app.state,
        &bride,
        "k4",
        PreferenceForm {
            preference: GiftPreference::Monetary,
        },
    )
    .await?;
    let k4 = updated.items.iter().find(|i| i.gift.id == "k4").expect("k4");
    assert_eq!(k4.preference, GiftPreference::Monetary);

    let noted = wishlist_service::set_note(
        &app.state,
        &bride,
        "k4",
        NoteForm {
            note: Some("The red one".into()),
        },
    )
    .await?;
    let k4 = noted.items.iter().find(|i| i.gift.id == "k4").expect("k4");
    assert_eq!(k4.note.as_deref(), Some("The red one"));

    let removed = wishlist_service::remove_item(&app.state, &bride, "k4").await?;
    assert_eq!(removed.item_count, 14);
    assert_eq!(removed.total_value, start.total_value);

    let unchanged = wishlist_service::remove_item(&app.state, &bride, "does-not-exist").await?;
    assert_eq!(unchanged.item_count, 14);

    Ok(())
}

#[tokio::test]
async fn adding_an_unknown_gift_is_rejected() -> anyhow::Result<()> {
    let app = test_app()?;
    let bride = demo_client(&app.state).await;

    let err = wishlist_service::add_item(
        &app.state,
        &bride,
        AddWishlistItemForm {
            gift_id: "zz9".into(),
            preference: GiftPreference::Product,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn dashboard_flags_gifts_already_on_the_wishlist() -> anyhow::Result<()> {
    let app = test_app()?;
    let bride = demo_client(&app.state).await;

    let view = wishlist_service::dashboard(
        &app.state,
        &bride,
        GiftQuery {
            category: Some("kitchen".into()),
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(view.bride_name, "Sophie de Vries");
    assert_eq!(view.gifts.len(), 4);
    let flagged: Vec<_> = view
        .gifts
        .iter()
        .filter(|g| g.in_wishlist)
        .map(|g| g.gift.id.as_str())
        .collect();
    assert_eq!(flagged, vec!["k1", "k2", "k3"]);
    assert!(view.share_url.starts_with("http://localhost:3000/list/"));
    assert_eq!(view.categories.len(), 7);
    Ok(())
}

#[tokio::test]
async fn franchisee_cannot_use_the_wishlist_builder() -> anyhow::Result<()> {
    let app = test_app()?;
    let partner = demo_franchisee(&app.state).await;

    let err = wishlist_service::get_wishlist(&app.state, &partner)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
    Ok(())
}

#[tokio::test]
async fn wishlist_changes_show_up_in_the_franchisee_activity() -> anyhow::Result<()> {
    let app = test_app()?;
    let bride = demo_client(&app.state).await;
    let partner = demo_franchisee(&app.state).await;

    wishlist_service::add_item(
        &app.state,
        &bride,
        AddWishlistItemForm {
            gift_id: "g2".into(),
            preference: GiftPreference::Product,
        },
    )
    .await?;
    // No-op removal is not audited.
    wishlist_service::remove_item(&app.state, &bride, "nope").await?;

    let (entries, meta) = admin_service::activity(&app.state, &partner, Default::default()).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "wishlist_add");
    assert_eq!(meta.total, Some(1));
    Ok(())
}
