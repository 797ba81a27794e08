use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::{Actor, log_audit},
    dto::{
        invite::{AcceptInviteForm, InviteLanding},
        non_empty, parse_date, required,
    },
    error::{AppError, AppResult},
    models::{Client, ClientStatus, InviteStatus, SessionUser, User, UserRole},
    services::auth_service::{hash_password, validate_password},
    state::AppState,
    wishlist::Wishlist,
};

pub async fn landing(state: &AppState, token: &str) -> AppResult<InviteLanding> {
    let data = state.store.read().await;
    let invite = data.invite_by_token(token).ok_or(AppError::NotFound)?;
    let franchisee_name = data
        .franchisee(invite.franchisee_id)
        .map(|f| f.company_name.clone())
        .unwrap_or_default();
    let status = invite.effective_status(Utc::now());

    Ok(InviteLanding {
        bride_name: invite.bride_name.clone(),
        partner_name: invite.partner_name.clone(),
        wedding_date: invite.wedding_date,
        franchisee_name,
        email: invite.email.clone(),
        status,
        expired: status == InviteStatus::Expired,
    })
}

/// Turns a pending invite into a client account with an empty wishlist and signs
/// the bride in.
pub async fn accept(
    state: &AppState,
    token: &str,
    payload: AcceptInviteForm,
) -> AppResult<SessionUser> {
    let bride_name = required(&payload.bride_name, "bride_name")?;
    validate_password(&payload.password)?;
    let wedding_date = parse_date(payload.wedding_date)?;
    let password_hash = hash_password(&payload.password)?;
    let now = Utc::now();

    let mut data = state.store.write().await;
    let invite = data
        .invites
        .iter()
        .find(|i| i.token == token)
        .cloned()
        .ok_or(AppError::NotFound)?;

    match invite.effective_status(now) {
        InviteStatus::Pending => {}
        InviteStatus::Expired => {
            return Err(AppError::BadRequest("This invitation has expired".into()));
        }
        InviteStatus::Accepted => {
            return Err(AppError::BadRequest(
                "This invitation has already been used".into(),
            ));
        }
    }

    if let Some(email) = non_empty(payload.email) {
        if !email.eq_ignore_ascii_case(&invite.email) {
            return Err(AppError::BadRequest(
                "Email does not match the invitation".into(),
            ));
        }
    }
    if data.user_by_email(&invite.email).is_some() {
        return Err(AppError::BadRequest("Email is already taken".into()));
    }

    let client = Client {
        id: Uuid::new_v4(),
        franchisee_id: invite.franchisee_id,
        bride_name: bride_name.clone(),
        partner_name: non_empty(payload.partner_name).or(invite.partner_name.clone()),
        email: invite.email.to_lowercase(),
        phone: non_empty(payload.phone),
        wedding_date: wedding_date.or(invite.wedding_date),
        registered_at: now,
        status: ClientStatus::Active,
        total_gifts_value: 0,
        gift_count: 0,
    };
    let user = User {
        id: Uuid::new_v4(),
        email: client.email.clone(),
        password_hash,
        role: UserRole::Client,
        name: Some(bride_name),
        client_id: Some(client.id),
        franchisee_id: None,
    };
    let session = SessionUser::from(&user);

    if let Some(stored) = data.invites.iter_mut().find(|i| i.id == invite.id) {
        stored.status = InviteStatus::Accepted;
    }
    data.wishlists.insert(client.id, Wishlist::new());
    data.users.push(user);
    log_audit(
        &mut data,
        Actor {
            user_id: Some(session.id),
            franchisee_id: Some(invite.franchisee_id),
        },
        "invite_accept",
        Some("clients"),
        Some(serde_json::json!({ "invite_id": invite.id, "client_id": client.id })),
    );
    data.clients.push(client);

    Ok(session)
}
