pub mod api;
pub mod config;
pub mod crypto;
pub mod error;
pub mod store;
pub mod views;
