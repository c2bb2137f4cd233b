use async_trait::async_trait;

use crate::domain::user::User;
use crate::ports::RepoError;

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Fails with `RepoError::Duplicate` when another user already holds
    /// the email address.
    async fn create(&self, user: User) -> Result<User, RepoError>;

    async fn get(&self, id: &str) -> Result<Option<User>, RepoError>;

    async fn update(&self, user: User) -> Result<Option<User>, RepoError>;

    async fn delete(&self, id: &str) -> Result<bool, RepoError>;

    async fn list(&self) -> Result<Vec<User>, RepoError>;
}
