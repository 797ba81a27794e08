//! Process-memory persistence. Nothing here survives a restart.

use std::collections::HashMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::{
    models::{AuditEntry, Client, Franchisee, Invite, PurchasedGift, User},
    wishlist::Wishlist,
};

#[derive(Debug, Default)]
pub struct StoreData {
    pub users: Vec<User>,
    pub franchisees: Vec<Franchisee>,
    pub clients: Vec<Client>,
    /// Newest first.
    pub invites: Vec<Invite>,
    pub wishlists: HashMap<Uuid, Wishlist>,
    /// Purchases recorded against each client's public list.
    pub purchases: HashMap<Uuid, Vec<PurchasedGift>>,
    /// Friendly public list names, e.g. `default`, mapped to client ids.
    pub list_aliases: HashMap<String, Uuid>,
    pub audit_log: Vec<AuditEntry>,
}

impl StoreData {
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email.trim()))
    }

    pub fn client(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn client_mut(&mut self, id: Uuid) -> Option<&mut Client> {
        self.clients.iter_mut().find(|client| client.id == id)
    }

    pub fn franchisee(&self, id: Uuid) -> Option<&Franchisee> {
        self.franchisees.iter().find(|f| f.id == id)
    }

    pub fn invite_by_token(&self, token: &str) -> Option<&Invite> {
        self.invites.iter().find(|invite| invite.token == token)
    }

    /// Resolves a public list id: an alias first, then a client id.
    pub fn resolve_list(&self, list_id: &str) -> Option<Uuid> {
        if let Some(id) = self.list_aliases.get(list_id) {
            return Some(*id);
        }
        Uuid::parse_str(list_id)
            .ok()
            .filter(|id| self.client(*id).is_some())
    }
}

/// Shared application data behind a single async lock; a write guard acts as a transaction.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<StoreData>,
}

impl Store {
    pub fn new(data: StoreData) -> Self {
        Self {
            inner: RwLock::new(data),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.inner.write().await
    }
}
