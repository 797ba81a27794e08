//! Demo data loaded at startup: one franchise partner, four couples, two invites
//! and the credential table used by the login form.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::{
    catalog,
    models::{
        Client, ClientStatus, Franchisee, GiftPreference, Invite, InviteStatus, PurchasedGift,
        User, UserRole,
    },
    services::auth_service::hash_password,
    store::{Store, StoreData},
    wishlist::Wishlist,
};

pub const DEMO_CLIENT_EMAIL: &str = "sophie@example.com";
pub const DEMO_CLIENT_PASSWORD: &str = "sophie2026";
pub const DEMO_FRANCHISEE_EMAIL: &str = "partner@weddingdreams.nl";
pub const DEMO_FRANCHISEE_PASSWORD: &str = "dreams2026";

/// Alias of the demo couple's public gift list.
pub const DEFAULT_LIST: &str = "default";
pub const PENDING_INVITE_TOKEN: &str = "abc123";
pub const EXPIRED_INVITE_TOKEN: &str = "xyz789";

/// Gift ids on the demo couple's wishlist.
const DEMO_WISHLIST: [&str; 14] = [
    "k1", "k2", "k3", "b1", "b3", "l1", "l2", "g1", "e1", "x1", "x3", "t1", "t2", "t4",
];

pub fn seeded_store() -> anyhow::Result<Store> {
    Ok(Store::new(seed_data()?))
}

pub fn seed_data() -> anyhow::Result<StoreData> {
    let now = Utc::now();
    let mut data = StoreData::default();

    let franchisee = Franchisee {
        id: Uuid::new_v4(),
        company_name: "Wedding Dreams Amsterdam".into(),
        contact_name: "Marloes de Boer".into(),
        email: DEMO_FRANCHISEE_EMAIL.into(),
        phone: "+31 20 1234567".into(),
        city: "Amsterdam".into(),
        registered_at: utc(2025, 3, 1),
    };

    let clients = vec![
        client(
            &franchisee,
            "Sophie de Vries",
            Some("Thomas Bakker"),
            DEMO_CLIENT_EMAIL,
            Some("+31 6 12345678"),
            date(2026, 6, 15),
            utc(2025, 12, 1),
            ClientStatus::Active,
            425_000,
            24,
        ),
        client(
            &franchisee,
            "Emma Jansen",
            Some("Lucas van Dijk"),
            "emma.j@example.com",
            Some("+31 6 98765432"),
            date(2026, 8, 22),
            utc(2025, 11, 15),
            ClientStatus::Active,
            318_000,
            18,
        ),
        client(
            &franchisee,
            "Lisa Smit",
            Some("Daan Visser"),
            "lisa.smit@example.com",
            None,
            date(2025, 9, 10),
            utc(2025, 5, 20),
            ClientStatus::Completed,
            560_000,
            32,
        ),
        client(
            &franchisee,
            "Anna Mulder",
            Some("Bram de Jong"),
            "anna.m@example.com",
            Some("+31 6 55544433"),
            date(2026, 4, 5),
            utc(2025, 12, 20),
            ClientStatus::Active,
            189_000,
            12,
        ),
    ];
    let sophie = clients[0].id;

    let mut wishlist = Wishlist::new();
    for id in DEMO_WISHLIST {
        if let Some(gift) = catalog::find(id) {
            let preference = if gift.category == crate::models::GiftCategory::Travel {
                GiftPreference::Monetary
            } else {
                GiftPreference::Product
            };
            wishlist.add(gift, preference, now);
        }
    }
    data.wishlists.insert(sophie, wishlist);
    for client in &clients[1..] {
        data.wishlists.insert(client.id, Wishlist::new());
    }

    data.purchases.insert(
        sophie,
        vec![
            purchase("k2", "Aunt Maria", "maria@example.com", utc(2026, 1, 3)),
            purchase("b1", "Uncle Jan", "jan@example.com", utc(2026, 1, 4)),
        ],
    );
    data.list_aliases.insert(DEFAULT_LIST.to_string(), sophie);

    data.invites = vec![
        Invite {
            id: Uuid::new_v4(),
            franchisee_id: franchisee.id,
            token: PENDING_INVITE_TOKEN.into(),
            email: "maria.k@example.com".into(),
            bride_name: "Maria Kuiper".into(),
            partner_name: Some("Jan Peters".into()),
            wedding_date: date(2026, 7, 20),
            sent_at: now - Duration::days(2),
            expires_at: now + Duration::days(12),
            status: InviteStatus::Pending,
        },
        Invite {
            id: Uuid::new_v4(),
            franchisee_id: franchisee.id,
            token: EXPIRED_INVITE_TOKEN.into(),
            email: "nina.b@example.com".into(),
            bride_name: "Nina Bos".into(),
            partner_name: None,
            wedding_date: None,
            sent_at: now - Duration::days(30),
            expires_at: now - Duration::days(16),
            status: InviteStatus::Expired,
        },
    ];

    data.users = vec![
        User {
            id: Uuid::new_v4(),
            email: DEMO_CLIENT_EMAIL.into(),
            password_hash: hash_password(DEMO_CLIENT_PASSWORD)?,
            role: UserRole::Client,
            name: Some("Sophie de Vries".into()),
            client_id: Some(sophie),
            franchisee_id: None,
        },
        User {
            id: Uuid::new_v4(),
            email: DEMO_FRANCHISEE_EMAIL.into(),
            password_hash: hash_password(DEMO_FRANCHISEE_PASSWORD)?,
            role: UserRole::Franchisee,
            name: Some(franchisee.contact_name.clone()),
            client_id: None,
            franchisee_id: Some(franchisee.id),
        },
    ];

    data.clients = clients;
    data.franchisees.push(franchisee);
    Ok(data)
}

#[allow(clippy::too_many_arguments)]
fn client(
    franchisee: &Franchisee,
    bride_name: &str,
    partner_name: Option<&str>,
    email: &str,
    phone: Option<&str>,
    wedding_date: Option<NaiveDate>,
    registered_at: DateTime<Utc>,
    status: ClientStatus,
    total_gifts_value: i64,
    gift_count: i64,
) -> Client {
    Client {
        id: Uuid::new_v4(),
        franchisee_id: franchisee.id,
        bride_name: bride_name.into(),
        partner_name: partner_name.map(str::to_string),
        email: email.into(),
        phone: phone.map(str::to_string),
        wedding_date,
        registered_at,
        status,
        total_gifts_value,
        gift_count,
    }
}

fn purchase(
    gift_id: &str,
    buyer_name: &str,
    buyer_email: &str,
    at: DateTime<Utc>,
) -> PurchasedGift {
    PurchasedGift {
        gift_id: gift_id.into(),
        buyer_name: buyer_name.into(),
        buyer_email: buyer_email.into(),
        message: None,
        purchased_at: at,
    }
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
