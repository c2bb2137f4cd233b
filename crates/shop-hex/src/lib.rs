//! shop-hex: application services and inbound HTTP adapters for the
//! user, product and order services.

pub mod config;
pub mod errors;

pub mod application;

pub use shop_types::{domain, ports};

pub mod inbound; // HTTP adapters (routers + handlers)
