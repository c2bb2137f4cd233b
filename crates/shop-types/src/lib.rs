//! shop-types: domain entities and port traits shared by the shop services.

pub mod domain;
pub mod ports;
