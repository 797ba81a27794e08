use askama::Template;
use chrono::{DateTime, Datelike, Duration, Utc};
use uuid::Uuid;

use crate::{
    audit::{Actor, log_audit},
    dto::{
        admin::{
            AdminDashboard, CancelInviteResult, ClientStatusForm, ClientSummary, InviteDispatch,
            InviteSummary, SendInviteForm,
        },
        non_empty, parse_date, required,
    },
    error::{AppError, AppResult},
    integrations::email::{EmailError, EmailOutcome, InviteEmailHtml, send_email},
    middleware::auth::ensure_franchisee,
    models::{AuditEntry, Client, ClientStatus, FranchiseeStats, Invite, InviteStatus, SessionUser},
    response::{Meta, paginate},
    routes::params::{Pagination, SearchQuery},
    services::auth_service::normalize_email,
    state::AppState,
    store::StoreData,
};

/// How long an invite link stays valid after it was (re)sent.
pub const INVITE_TTL_DAYS: i64 = 14;

pub async fn dashboard(
    state: &AppState,
    user: &SessionUser,
    query: SearchQuery,
) -> AppResult<AdminDashboard> {
    let franchisee_id = ensure_franchisee(user)?;
    let now = Utc::now();

    let data = state.store.read().await;
    let franchisee = data
        .franchisee(franchisee_id)
        .cloned()
        .ok_or(AppError::NotFound)?;

    Ok(AdminDashboard {
        franchisee,
        stats: compute_stats(&data, franchisee_id, now),
        clients: search_clients(&data, franchisee_id, query.text()),
        invites: search_invites(&data, franchisee_id, query.text(), &state.config.public_url, now),
    })
}

pub async fn list_clients(
    state: &AppState,
    user: &SessionUser,
    query: SearchQuery,
) -> AppResult<(Vec<ClientSummary>, Meta)> {
    let franchisee_id = ensure_franchisee(user)?;
    let data = state.store.read().await;
    let clients = search_clients(&data, franchisee_id, query.text());
    Ok(paginate(clients, query.pagination()))
}

pub async fn list_invites(
    state: &AppState,
    user: &SessionUser,
    query: SearchQuery,
) -> AppResult<(Vec<InviteSummary>, Meta)> {
    let franchisee_id = ensure_franchisee(user)?;
    let data = state.store.read().await;
    let invites = search_invites(
        &data,
        franchisee_id,
        query.text(),
        &state.config.public_url,
        Utc::now(),
    );
    Ok(paginate(invites, query.pagination()))
}

pub async fn send_invite(
    state: &AppState,
    user: &SessionUser,
    payload: SendInviteForm,
) -> AppResult<InviteDispatch> {
    let franchisee_id = ensure_franchisee(user)?;
    let email = normalize_email(&payload.email)?;
    let bride_name = required(&payload.bride_name, "bride_name")?;
    let wedding_date = parse_date(payload.wedding_date)?;
    let now = Utc::now();

    let invite = Invite {
        id: Uuid::new_v4(),
        franchisee_id,
        token: Uuid::new_v4().simple().to_string(),
        email,
        bride_name,
        partner_name: non_empty(payload.partner_name),
        wedding_date,
        sent_at: now,
        expires_at: now + Duration::days(INVITE_TTL_DAYS),
        status: InviteStatus::Pending,
    };

    let company_name = {
        let mut data = state.store.write().await;
        let company_name = data
            .franchisee(franchisee_id)
            .map(|f| f.company_name.clone())
            .ok_or(AppError::NotFound)?;
        data.invites.insert(0, invite.clone());
        log_audit(
            &mut data,
            Actor::from(user),
            "invite_send",
            Some("invites"),
            Some(serde_json::json!({ "invite_id": invite.id, "email": invite.email })),
        );
        company_name
    };

    let email = email_invite(state, &invite, &company_name).await;
    Ok(InviteDispatch {
        invite: invite_summary(&invite, &state.config.public_url, now),
        email,
    })
}

/// Restarts the invite's validity window and mails the link again.
pub async fn resend_invite(
    state: &AppState,
    user: &SessionUser,
    invite_id: Uuid,
) -> AppResult<InviteDispatch> {
    let franchisee_id = ensure_franchisee(user)?;
    let now = Utc::now();

    let (invite, company_name) = {
        let mut data = state.store.write().await;
        let company_name = data
            .franchisee(franchisee_id)
            .map(|f| f.company_name.clone())
            .ok_or(AppError::NotFound)?;
        let invite = data
            .invites
            .iter_mut()
            .find(|i| i.id == invite_id && i.franchisee_id == franchisee_id)
            .ok_or(AppError::NotFound)?;
        if invite.status == InviteStatus::Accepted {
            return Err(AppError::Conflict("Invite has already been accepted".into()));
        }
        invite.sent_at = now;
        invite.expires_at = now + Duration::days(INVITE_TTL_DAYS);
        invite.status = InviteStatus::Pending;
        let invite = invite.clone();

        log_audit(
            &mut data,
            Actor::from(user),
            "invite_resend",
            Some("invites"),
            Some(serde_json::json!({ "invite_id": invite.id })),
        );
        (invite, company_name)
    };

    let email = email_invite(state, &invite, &company_name).await;
    Ok(InviteDispatch {
        invite: invite_summary(&invite, &state.config.public_url, now),
        email,
    })
}

/// Unknown ids are a no-op.
pub async fn cancel_invite(
    state: &AppState,
    user: &SessionUser,
    invite_id: Uuid,
) -> AppResult<CancelInviteResult> {
    let franchisee_id = ensure_franchisee(user)?;
    let mut data = state.store.write().await;

    let position = data
        .invites
        .iter()
        .position(|i| i.id == invite_id && i.franchisee_id == franchisee_id);
    let removed = match position {
        Some(index) => {
            data.invites.remove(index);
            true
        }
        None => false,
    };

    if removed {
        log_audit(
            &mut data,
            Actor::from(user),
            "invite_cancel",
            Some("invites"),
            Some(serde_json::json!({ "invite_id": invite_id })),
        );
    }

    Ok(CancelInviteResult { removed })
}

/// Statuses are assigned directly; any status may follow any other.
pub async fn update_client_status(
    state: &AppState,
    user: &SessionUser,
    client_id: Uuid,
    payload: ClientStatusForm,
) -> AppResult<ClientSummary> {
    let franchisee_id = ensure_franchisee(user)?;
    let mut data = state.store.write().await;

    let client = data
        .client_mut(client_id)
        .filter(|c| c.franchisee_id == franchisee_id)
        .ok_or(AppError::NotFound)?;
    let previous = client.status;
    client.status = payload.status;
    let client = client.clone();

    log_audit(
        &mut data,
        Actor::from(user),
        "client_status_update",
        Some("clients"),
        Some(serde_json::json!({
            "client_id": client_id,
            "from": previous,
            "to": payload.status,
        })),
    );

    Ok(ClientSummary::from(client))
}

/// Audit trail for the franchisee's own actions and their couples' lists, newest first.
pub async fn activity(
    state: &AppState,
    user: &SessionUser,
    pagination: Pagination,
) -> AppResult<(Vec<AuditEntry>, Meta)> {
    let franchisee_id = ensure_franchisee(user)?;
    let data = state.store.read().await;
    let entries = data
        .audit_log
        .iter()
        .rev()
        .filter(|entry| entry.franchisee_id == Some(franchisee_id))
        .cloned()
        .collect();
    Ok(paginate(entries, pagination))
}

pub fn compute_stats(data: &StoreData, franchisee_id: Uuid, now: DateTime<Utc>) -> FranchiseeStats {
    let clients: Vec<&Client> = data
        .clients
        .iter()
        .filter(|c| c.franchisee_id == franchisee_id)
        .collect();
    let this_month: Vec<&&Client> = clients
        .iter()
        .filter(|c| c.registered_at.year() == now.year() && c.registered_at.month() == now.month())
        .collect();

    FranchiseeStats {
        total_clients: clients.len() as i64,
        active_clients: clients
            .iter()
            .filter(|c| c.status == ClientStatus::Active)
            .count() as i64,
        pending_invites: data
            .invites
            .iter()
            .filter(|i| i.franchisee_id == franchisee_id)
            .filter(|i| i.effective_status(now) == InviteStatus::Pending)
            .count() as i64,
        total_revenue: clients.iter().map(|c| c.total_gifts_value).sum(),
        total_commission: clients.iter().map(|c| c.commission_earned()).sum(),
        this_month_revenue: this_month.iter().map(|c| c.total_gifts_value).sum(),
        this_month_clients: this_month.len() as i64,
    }
}

fn search_clients(data: &StoreData, franchisee_id: Uuid, query: &str) -> Vec<ClientSummary> {
    let needle = query.trim().to_lowercase();
    data.clients
        .iter()
        .filter(|c| c.franchisee_id == franchisee_id)
        .filter(|c| {
            c.bride_name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c
                    .partner_name
                    .as_ref()
                    .is_some_and(|p| p.to_lowercase().contains(&needle))
        })
        .cloned()
        .map(ClientSummary::from)
        .collect()
}

fn search_invites(
    data: &StoreData,
    franchisee_id: Uuid,
    query: &str,
    public_url: &str,
    now: DateTime<Utc>,
) -> Vec<InviteSummary> {
    let needle = query.trim().to_lowercase();
    data.invites
        .iter()
        .filter(|i| i.franchisee_id == franchisee_id)
        .filter(|i| {
            i.bride_name.to_lowercase().contains(&needle)
                || i.email.to_lowercase().contains(&needle)
        })
        .map(|i| invite_summary(i, public_url, now))
        .collect()
}

pub fn invite_url(public_url: &str, invite: &Invite) -> String {
    format!("{public_url}/invite/{}", invite.token)
}

fn invite_summary(invite: &Invite, public_url: &str, now: DateTime<Utc>) -> InviteSummary {
    InviteSummary {
        id: invite.id,
        email: invite.email.clone(),
        bride_name: invite.bride_name.clone(),
        partner_name: invite.partner_name.clone(),
        wedding_date: invite.wedding_date,
        sent_at: invite.sent_at,
        expires_at: invite.expires_at,
        status: invite.effective_status(now),
        invite_url: invite_url(public_url, invite),
    }
}

async fn email_invite(state: &AppState, invite: &Invite, company_name: &str) -> EmailOutcome {
    let link = invite_url(&state.config.public_url, invite);
    let first_name = invite
        .bride_name
        .split_whitespace()
        .next()
        .unwrap_or(&invite.bride_name);
    let expires = invite.expires_at.format("%-d %B %Y").to_string();
    let rendered = InviteEmailHtml {
        name: first_name,
        company: company_name,
        link: &link,
        expires: &expires,
    }
    .render();
    let html = match rendered {
        Ok(html) => html,
        Err(err) => {
            let err = EmailError::from(err);
            tracing::error!(invite_id = %invite.id, error = %err, "invite email not rendered");
            return EmailOutcome::failed(&err);
        }
    };

    send_email(
        state.mailer.as_ref(),
        &invite.email,
        "You're invited to create your wedding gift registry",
        html,
    )
    .await
}
