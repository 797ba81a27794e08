pub mod audit;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod integrations;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
pub mod wishlist;
