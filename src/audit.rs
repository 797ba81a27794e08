use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    models::{AuditEntry, SessionUser},
    store::StoreData,
};

/// Oldest entries are dropped once the log grows past this.
const AUDIT_LOG_CAPACITY: usize = 1_000;

#[derive(Debug, Clone, Copy, Default)]
pub struct Actor {
    pub user_id: Option<Uuid>,
    pub franchisee_id: Option<Uuid>,
}

impl From<&SessionUser> for Actor {
    fn from(user: &SessionUser) -> Self {
        Self {
            user_id: Some(user.id),
            franchisee_id: user.franchisee_id,
        }
    }
}

pub fn log_audit(
    data: &mut StoreData,
    actor: Actor,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) {
    tracing::info!(
        action,
        resource = resource.unwrap_or("-"),
        user_id = ?actor.user_id,
        "audit"
    );

    data.audit_log.push(AuditEntry {
        id: Uuid::new_v4(),
        actor_id: actor.user_id,
        franchisee_id: actor.franchisee_id,
        action: action.to_string(),
        resource: resource.map(str::to_string),
        metadata,
        created_at: Utc::now(),
    });

    if data.audit_log.len() > AUDIT_LOG_CAPACITY {
        let overflow = data.audit_log.len() - AUDIT_LOG_CAPACITY;
        data.audit_log.drain(..overflow);
    }
}
