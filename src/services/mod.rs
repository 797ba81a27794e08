pub mod admin_service;
pub mod auth_service;
pub mod checkout_service;
pub mod invite_service;
pub mod registry_service;
pub mod wishlist_service;
