pub mod order_repository;
pub mod product_repository;
pub mod user_repository;
pub mod validation;

/// Failures the storage adapters can report. Missing rows are not errors;
/// the traits express absence through `Option`/`bool` returns.
#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("{0}")]
    Duplicate(String),

    #[error("storage error: {0}")]
    Storage(String),
}
