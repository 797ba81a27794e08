//! Clients for the third-party services the registry talks to.

pub mod email;
pub mod payments;
