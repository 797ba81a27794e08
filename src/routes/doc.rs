use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    catalog::CategoryInfo,
    dto::{
        admin::{
            AdminDashboard, CancelInviteResult, ClientList, ClientStatusForm, ClientSummary,
            InviteDispatch, InviteList, InviteSummary, SendInviteForm,
        },
        auth::{LoginForm, RegisterForm},
        invite::{AcceptInviteForm, InviteLanding},
        registry::{CoupleInfo, GiftListItem, GiftListStats, GiftListView, PurchaseForm},
        wishlist::{
            AddWishlistItemForm, CatalogGift, ClientDashboard, NoteForm, PreferenceForm,
            WishlistSummary,
        },
    },
    integrations::email::EmailOutcome,
    middleware::auth::SESSION_COOKIE_NAME,
    models::{
        AuditEntry, Client, ClientStatus, Franchisee, FranchiseeStats, Gift, GiftCategory,
        GiftPreference, InviteStatus, PurchasedGift, SessionUser, UserRole, WishlistItem,
    },
    response::{ApiResponse, Meta},
    routes::{admin, auth, checkout, client, gifts, health, home, invite, list, params},
};

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE_NAME))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        home::home,
        health::health_check,
        auth::login,
        auth::logout,
        auth::register,
        auth::current_session,
        gifts::list_gifts,
        gifts::list_categories,
        gifts::get_gift,
        client::client_dashboard,
        client::get_wishlist,
        client::add_to_wishlist,
        client::remove_from_wishlist,
        client::update_preference,
        client::set_note,
        list::view_list,
        list::purchase_gift,
        admin::admin_dashboard,
        admin::list_clients,
        admin::update_client_status,
        admin::list_invites,
        admin::send_invite,
        admin::resend_invite,
        admin::cancel_invite,
        admin::list_activity,
        invite::invite_landing,
        invite::accept_invite,
        checkout::create_checkout
    ),
    components(
        schemas(
            Gift,
            GiftCategory,
            GiftPreference,
            WishlistItem,
            PurchasedGift,
            Client,
            ClientStatus,
            Franchisee,
            FranchiseeStats,
            InviteStatus,
            UserRole,
            SessionUser,
            AuditEntry,
            CategoryInfo,
            EmailOutcome,
            LoginForm,
            RegisterForm,
            AddWishlistItemForm,
            PreferenceForm,
            NoteForm,
            CatalogGift,
            WishlistSummary,
            ClientDashboard,
            PurchaseForm,
            CoupleInfo,
            GiftListItem,
            GiftListStats,
            GiftListView,
            AcceptInviteForm,
            InviteLanding,
            SendInviteForm,
            ClientStatusForm,
            ClientSummary,
            InviteSummary,
            InviteDispatch,
            CancelInviteResult,
            AdminDashboard,
            ClientList,
            InviteList,
            admin::ActivityList,
            gifts::GiftList,
            home::HomeView,
            health::HealthData,
            params::Pagination,
            params::GiftQuery,
            params::SearchQuery,
            Meta,
            ApiResponse<Gift>,
            ApiResponse<GiftListView>,
            ApiResponse<WishlistSummary>,
            ApiResponse<AdminDashboard>
        )
    ),
    security(
        ("session_cookie" = [])
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = "Pages", description = "Landing page"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Sign in, sign out and franchisee registration"),
        (name = "Gifts", description = "Gift catalog"),
        (name = "Client", description = "Wishlist builder for couples"),
        (name = "Gift list", description = "Public gift lists for guests"),
        (name = "Admin", description = "Franchisee dashboard"),
        (name = "Invite", description = "Invitation acceptance"),
        (name = "Checkout", description = "Hosted payment checkout"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_the_public_list_route() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/list/{id}"));
        assert!(doc.paths.paths.contains_key("/admin/invites/{id}/resend"));
    }
}
