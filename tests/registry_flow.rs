mod common;

use common::{demo_client, demo_franchisee, test_app};
use wedding_registry::{
    dto::registry::{GiftListStats, PurchaseForm},
    error::AppError,
    routes::params::GiftQuery,
    seed::DEFAULT_LIST,
    services::{admin_service, registry_service},
};

fn purchase(gift_id: &str, buyer: &str) -> PurchaseForm {
    PurchaseForm {
        gift_id: gift_id.into(),
        buyer_name: buyer.into(),
        buyer_email: format!("{}@example.com", buyer.to_lowercase().replace(' ', ".")),
        message: Some("Congratulations!".into()),
    }
}

#[tokio::test]
async fn default_list_shows_seeded_purchases() -> anyhow::Result<()> {
    let app = test_app()?;
    let view = registry_service::view_list(&app.state, DEFAULT_LIST, GiftQuery::default()).await?;

    assert_eq!(view.couple.bride_name, "Sophie de Vries");
    assert_eq!(view.items.len(), 14);
    assert_eq!(view.stats.total, 14);
    assert_eq!(view.stats.purchased, 2);
    assert_eq!(view.stats.available, 12);

    let casserole = view.items.iter().find(|i| i.gift.id == "k2").expect("k2");
    assert!(casserole.is_purchased);
    assert_eq!(casserole.purchased_by.as_deref(), Some("Aunt Maria"));
    Ok(())
}

#[tokio::test]
async fn list_is_reachable_by_client_id_and_filters_keep_stats() -> anyhow::Result<()> {
    let app = test_app()?;
    let bride = demo_client(&app.state).await;
    let client_id = bride.client_id.expect("client id").to_string();

    let unfiltered =
        registry_service::view_list(&app.state, &client_id, GiftQuery::default()).await?;
    let travel = registry_service::view_list(
        &app.state,
        &client_id,
        GiftQuery {
            category: Some("travel".into()),
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(travel.items.len(), 3);
    assert_eq!(travel.stats, unfiltered.stats);
    Ok(())
}

#[tokio::test]
async fn unknown_list_is_not_found() -> anyhow::Result<()> {
    let app = test_app()?;
    let err = registry_service::view_list(&app.state, "nobody", GiftQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

// Guest buys a gift: stats move, the client's totals grow, and a second buyer is refused.
#[tokio::test]
async fn purchase_updates_stats_and_blocks_a_second_buyer() -> anyhow::Result<()> {
    let app = test_app()?;
    let partner = demo_franchisee(&app.state).await;
    let before = registry_service::view_list(&app.state, DEFAULT_LIST, GiftQuery::default()).await?;

    let bought =
        registry_service::purchase_gift(&app.state, DEFAULT_LIST, purchase("k1", "Oma Ria"))
            .await?;
    assert_eq!(bought.gift_id, "k1");
    assert_eq!(bought.buyer_email, "oma.ria@example.com");
    assert_eq!(bought.message.as_deref(), Some("Congratulations!"));

    let after = registry_service::view_list(&app.state, DEFAULT_LIST, GiftQuery::default()).await?;
    let price = after
        .items
        .iter()
        .find(|i| i.gift.id == "k1")
        .map(|i| i.gift.price)
        .expect("k1 on list");
    assert_eq!(
        after.stats,
        GiftListStats {
            total: before.stats.total,
            purchased: before.stats.purchased + 1,
            available: before.stats.available - 1,
            total_value: before.stats.total_value,
            purchased_value: before.stats.purchased_value + price,
        }
    );

    let (clients, _) = admin_service::list_clients(
        &app.state,
        &partner,
        wedding_registry::routes::params::SearchQuery {
            q: Some("sophie".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].client.total_gifts_value, 425_000 + price);
    assert_eq!(clients[0].client.gift_count, 25);

    let second = purchase("k1", "Someone Else");
    let err = registry_service::purchase_gift(&app.state, DEFAULT_LIST, second)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    Ok(())
}

#[tokio::test]
async fn purchase_requires_buyer_details_and_a_listed_gift() -> anyhow::Result<()> {
    let app = test_app()?;

    let mut missing_name = purchase("k3", "Guest");
    missing_name.buyer_name = "   ".into();
    let err = registry_service::purchase_gift(&app.state, DEFAULT_LIST, missing_name)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let mut bad_email = purchase("k3", "Guest");
    bad_email.buyer_email = "not-an-email".into();
    let err = registry_service::purchase_gift(&app.state, DEFAULT_LIST, bad_email)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    // g2 is in the catalog but not on the demo wishlist.
    let err = registry_service::purchase_gift(&app.state, DEFAULT_LIST, purchase("g2", "Guest"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn concurrent_purchases_of_one_gift_succeed_once() -> anyhow::Result<()> {
    let app = test_app()?;

    let mut handles = Vec::new();
    for n in 0..8 {
        let state = app.state.clone();
        handles.push(tokio::spawn(async move {
            let form = purchase("l1", &format!("Guest {n}"));
            registry_service::purchase_gift(&state, DEFAULT_LIST, form)
                .await
                .is_ok()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await? {
            successes += 1;
        }
    }
    assert_eq!(successes, 1);
    Ok(())
}
