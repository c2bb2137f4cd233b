//! shop-repo: in-memory storage adapters for the shop services.
//!
//! Data lives for the lifetime of the process; every read returns an
//! independent copy of the stored entity.

pub mod orders;
pub mod products;
pub mod users;

pub use orders::InMemoryOrderRepo;
pub use products::InMemoryProductRepo;
pub use users::InMemoryUserRepo;
