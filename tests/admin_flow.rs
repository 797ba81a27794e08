mod common;

use common::{RecordingMailer, FakePayments, build, demo_client, demo_franchisee, test_app};
use uuid::Uuid;
use wedding_registry::{
    dto::admin::{ClientStatusForm, SendInviteForm},
    error::AppError,
    models::{ClientStatus, InviteStatus},
    routes::params::SearchQuery,
    services::admin_service,
};

fn invite_form(email: &str, bride: &str) -> SendInviteForm {
    SendInviteForm {
        email: email.into(),
        bride_name: bride.into(),
        partner_name: Some("Pieter".into()),
        wedding_date: Some("2026-09-12".into()),
    }
}

#[tokio::test]
async fn dashboard_reports_seeded_stats() -> anyhow::Result<()> {
    let app = test_app()?;
    let partner = demo_franchisee(&app.state).await;

    let view = admin_service::dashboard(&app.state, &partner, SearchQuery::default()).await?;
    assert_eq!(view.franchisee.company_name, "Wedding Dreams Amsterdam");
    assert_eq!(view.stats.total_clients, 4);
    assert_eq!(view.stats.active_clients, 3);
    assert_eq!(view.stats.pending_invites, 1);
    assert_eq!(view.stats.total_revenue, 425_000 + 318_000 + 560_000 + 189_000);
    assert_eq!(view.stats.total_commission, view.stats.total_revenue / 10);
    assert_eq!(view.clients.len(), 4);
    assert_eq!(view.invites.len(), 2);
    Ok(())
}

#[tokio::test]
async fn search_matches_clients_and_invites() -> anyhow::Result<()> {
    let app = test_app()?;
    let partner = demo_franchisee(&app.state).await;

    // Partner name match.
    let view = admin_service::dashboard(
        &app.state,
        &partner,
        SearchQuery {
            q: Some("DAAN".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(view.clients.len(), 1);
    assert_eq!(view.clients[0].client.bride_name, "Lisa Smit");
    assert!(view.invites.is_empty());

    let (invites, meta) = admin_service::list_invites(
        &app.state,
        &partner,
        SearchQuery {
            q: Some("nina".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(invites.len(), 1);
    assert_eq!(invites[0].status, InviteStatus::Expired);
    assert_eq!(meta.total, Some(1));
    Ok(())
}

// Franchisee sends, resends and cancels an invite; the email goes out each time.
#[tokio::test]
async fn invite_lifecycle() -> anyhow::Result<()> {
    let app = test_app()?;
    let partner = demo_franchisee(&app.state).await;

    let dispatch = admin_service::send_invite(
        &app.state,
        &partner,
        invite_form("Julia@Example.com", "Julia <b>Visser</b>"),
    )
    .await?;
    assert!(dispatch.email.success);
    assert_eq!(dispatch.email.message_id.as_deref(), Some("msg-1"));
    assert_eq!(dispatch.invite.email, "julia@example.com");
    assert_eq!(dispatch.invite.status, InviteStatus::Pending);
    assert_eq!(
        (dispatch.invite.expires_at - dispatch.invite.sent_at).num_days(),
        admin_service::INVITE_TTL_DAYS
    );
    assert!(dispatch.invite.invite_url.starts_with("http://localhost:3000/invite/"));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "julia@example.com");
    let token = dispatch.invite.invite_url.rsplit('/').next().expect("token");
    assert!(sent[0].html.contains(token));
    assert!(sent[0].html.contains("Congratulations, Julia!"));
    assert!(sent[0].html.contains("Wedding Dreams Amsterdam"));
    assert!(!sent[0].html.contains("<b>"));

    let (invites, _) =
        admin_service::list_invites(&app.state, &partner, SearchQuery::default()).await?;
    assert_eq!(invites.len(), 3);
    assert_eq!(invites[0].id, dispatch.invite.id);

    let resent = admin_service::resend_invite(&app.state, &partner, dispatch.invite.id).await?;
    assert!(resent.invite.sent_at >= dispatch.invite.sent_at);
    assert_eq!(app.mailer.sent().len(), 2);

    let cancelled = admin_service::cancel_invite(&app.state, &partner, dispatch.invite.id).await?;
    assert!(cancelled.removed);
    let again = admin_service::cancel_invite(&app.state, &partner, dispatch.invite.id).await?;
    assert!(!again.removed);

    let (invites, _) =
        admin_service::list_invites(&app.state, &partner, SearchQuery::default()).await?;
    assert_eq!(invites.len(), 2);
    Ok(())
}

#[tokio::test]
async fn resending_an_expired_invite_reopens_it() -> anyhow::Result<()> {
    let app = test_app()?;
    let partner = demo_franchisee(&app.state).await;

    let (invites, _) = admin_service::list_invites(
        &app.state,
        &partner,
        SearchQuery {
            q: Some("nina".into()),
            ..Default::default()
        },
    )
    .await?;
    let resent = admin_service::resend_invite(&app.state, &partner, invites[0].id).await?;
    assert_eq!(resent.invite.status, InviteStatus::Pending);

    let view = admin_service::dashboard(&app.state, &partner, SearchQuery::default()).await?;
    assert_eq!(view.stats.pending_invites, 2);
    Ok(())
}

#[tokio::test]
async fn failed_email_is_reported_but_the_invite_is_kept() -> anyhow::Result<()> {
    let app = build(
        RecordingMailer::failing(),
        FakePayments::redirecting_to("https://checkout.example/x"),
    )?;
    let partner = demo_franchisee(&app.state).await;

    let form = invite_form("eva@example.com", "Eva");
    let dispatch = admin_service::send_invite(&app.state, &partner, form).await?;
    assert!(!dispatch.email.success);
    assert!(dispatch.email.error.as_deref().is_some_and(|e| e.contains("smtp down")));

    let (invites, _) =
        admin_service::list_invites(&app.state, &partner, SearchQuery::default()).await?;
    assert_eq!(invites.len(), 3);
    Ok(())
}

#[tokio::test]
async fn invite_form_is_validated() -> anyhow::Result<()> {
    let app = test_app()?;
    let partner = demo_franchisee(&app.state).await;

    let err = admin_service::send_invite(&app.state, &partner, invite_form("", "Eva"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = admin_service::send_invite(&app.state, &partner, invite_form("eva@example.com", " "))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let mut bad_date = invite_form("eva@example.com", "Eva");
    bad_date.wedding_date = Some("12/09/2026".into());
    let err = admin_service::send_invite(&app.state, &partner, bad_date)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(app.mailer.sent().is_empty());
    Ok(())
}

#[tokio::test]
async fn client_status_is_assigned_directly() -> anyhow::Result<()> {
    let app = test_app()?;
    let partner = demo_franchisee(&app.state).await;
    let bride = demo_client(&app.state).await;
    let client_id = bride.client_id.expect("client id");

    for status in [ClientStatus::Completed, ClientStatus::Inactive, ClientStatus::Active] {
        let summary = admin_service::update_client_status(
            &app.state,
            &partner,
            client_id,
            ClientStatusForm { status },
        )
        .await?;
        assert_eq!(summary.client.status, status);
        assert_eq!(summary.commission_earned, 42_500);
    }

    let err = admin_service::update_client_status(
        &app.state,
        &partner,
        Uuid::new_v4(),
        ClientStatusForm {
            status: ClientStatus::Active,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let (entries, _) = admin_service::activity(&app.state, &partner, Default::default()).await?;
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.action == "client_status_update"));
    Ok(())
}

#[tokio::test]
async fn clients_cannot_reach_admin_operations() -> anyhow::Result<()> {
    let app = test_app()?;
    let bride = demo_client(&app.state).await;

    let err = admin_service::dashboard(&app.state, &bride, SearchQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));

    let err = admin_service::send_invite(&app.state, &bride, invite_form("x@example.com", "X"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
    Ok(())
}
