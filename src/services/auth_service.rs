use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    audit::{Actor, log_audit},
    dto::{
        auth::{LoginForm, RegisterForm},
        required,
    },
    error::{AppError, AppResult},
    models::{Franchisee, SessionUser, User, UserRole},
    state::AppState,
};

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password_hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

pub fn validate_password(password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub fn normalize_email(email: &str) -> AppResult<String> {
    let email = required(email, "email")?.to_lowercase();
    if !email.contains('@') {
        return Err(AppError::BadRequest(format!("Invalid email {email}")));
    }
    Ok(email)
}

pub async fn login_user(state: &AppState, payload: LoginForm) -> AppResult<SessionUser> {
    let LoginForm { email, password } = payload;
    let user = state.store.read().await.user_by_email(&email).cloned();

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::BadRequest("Invalid email or password".into())),
    };

    if !verify_password(&user.password_hash, &password)? {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let session = SessionUser::from(&user);
    let mut data = state.store.write().await;
    log_audit(
        &mut data,
        Actor::from(&session),
        "user_login",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id, "role": user.role })),
    );

    Ok(session)
}

/// Signs up a franchise partner and their login in one step.
pub async fn register_franchisee(
    state: &AppState,
    payload: RegisterForm,
) -> AppResult<SessionUser> {
    let company_name = required(&payload.company_name, "company_name")?;
    let contact_name = required(&payload.contact_name, "contact_name")?;
    let email = normalize_email(&payload.email)?;
    let phone = required(&payload.phone, "phone")?;
    let city = required(&payload.city, "city")?;
    validate_password(&payload.password)?;
    if payload.terms.as_deref().map(str::trim).filter(|t| !t.is_empty()).is_none() {
        return Err(AppError::BadRequest(
            "You must agree to the terms of service".into(),
        ));
    }

    let password_hash = hash_password(&payload.password)?;

    let mut data = state.store.write().await;
    if data.user_by_email(&email).is_some() {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }

    let franchisee = Franchisee {
        id: Uuid::new_v4(),
        company_name,
        contact_name: contact_name.clone(),
        email: email.clone(),
        phone,
        city,
        registered_at: Utc::now(),
    };
    let user = User {
        id: Uuid::new_v4(),
        email,
        password_hash,
        role: UserRole::Franchisee,
        name: Some(contact_name),
        client_id: None,
        franchisee_id: Some(franchisee.id),
    };
    let session = SessionUser::from(&user);

    data.franchisees.push(franchisee);
    data.users.push(user);
    log_audit(
        &mut data,
        Actor::from(&session),
        "franchisee_register",
        Some("franchisees"),
        Some(serde_json::json!({ "user_id": session.id })),
    );

    Ok(session)
}
