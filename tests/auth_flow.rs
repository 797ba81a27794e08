mod common;

use common::test_app;
use wedding_registry::{
    dto::auth::{LoginForm, RegisterForm},
    error::AppError,
    models::UserRole,
    routes::params::SearchQuery,
    seed::{DEMO_CLIENT_EMAIL, DEMO_FRANCHISEE_EMAIL},
    services::{admin_service, auth_service},
};

fn register_form(email: &str) -> RegisterForm {
    RegisterForm {
        company_name: "Bruidsgeluk Utrecht".into(),
        contact_name: "Ilse Vermeer".into(),
        email: email.into(),
        phone: "+31 30 7654321".into(),
        city: "Utrecht".into(),
        password: "trouwen2026".into(),
        terms: Some("on".into()),
    }
}

// New partner signs up, starts with an empty dashboard, and can sign in again later.
#[tokio::test]
async fn franchisee_registers_and_signs_in() -> anyhow::Result<()> {
    let app = test_app()?;

    let session =
        auth_service::register_franchisee(&app.state, register_form("Ilse@Bruidsgeluk.nl"))
            .await?;
    assert_eq!(session.role, UserRole::Franchisee);
    assert_eq!(session.email, "ilse@bruidsgeluk.nl");

    let view = admin_service::dashboard(&app.state, &session, SearchQuery::default()).await?;
    assert_eq!(view.franchisee.company_name, "Bruidsgeluk Utrecht");
    assert_eq!(view.stats.total_clients, 0);
    assert!(view.invites.is_empty());

    let again = auth_service::login_user(
        &app.state,
        LoginForm {
            email: "ilse@bruidsgeluk.nl".into(),
            password: "trouwen2026".into(),
        },
    )
    .await?;
    assert_eq!(again.franchisee_id, session.franchisee_id);
    Ok(())
}

#[tokio::test]
async fn registration_rules() -> anyhow::Result<()> {
    let app = test_app()?;

    let err = auth_service::register_franchisee(&app.state, register_form(DEMO_CLIENT_EMAIL))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(msg) if msg == "Email is already taken"));

    let mut no_terms = register_form("new@example.com");
    no_terms.terms = None;
    let err = auth_service::register_franchisee(&app.state, no_terms)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let mut short = register_form("new@example.com");
    short.password = "kort".into();
    let err = auth_service::register_franchisee(&app.state, short)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn unknown_email_and_wrong_password_look_the_same() -> anyhow::Result<()> {
    let app = test_app()?;

    let attempts = [
        ("ghost@example.com", "whatever1"),
        (DEMO_FRANCHISEE_EMAIL, "wrong-pass"),
    ];
    for (email, password) in attempts {
        let err = auth_service::login_user(
            &app.state,
            LoginForm {
                email: email.into(),
                password: password.into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.detail(), "Invalid email or password");
    }
    Ok(())
}
