use crate::errors::AppError;
use shop_types::domain::user::User;
use shop_types::ports::user_repository::UserRepository;

pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_user(&self, name: String, email: String) -> Result<User, AppError> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(AppError::BadRequest("Name and email are required".into()));
        }
        let user = User::new(name, email);
        Ok(self.repo.create(user).await?)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        match self.repo.get(id).await? {
            Some(user) => Ok(user),
            None => Err(AppError::NotFound("User not found".into())),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repo.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_repo::InMemoryUserRepo;

    fn service() -> UserService<InMemoryUserRepo> {
        UserService::new(InMemoryUserRepo::new())
    }

    #[tokio::test]
    async fn create_and_fetch_user() {
        let svc = service();
        let user = svc
            .create_user("Alice".into(), "alice@example.com".into())
            .await
            .unwrap();
        let fetched = svc.get_user(&user.id).await.unwrap();
        assert_eq!(fetched, user);
        assert_eq!(svc.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() {
        let svc = service();
        assert!(matches!(
            svc.create_user("".into(), "a@b.com".into()).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            svc.create_user("Alice".into(), "  ".into()).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let svc = service();
        svc.create_user("Alice".into(), "alice@example.com".into())
            .await
            .unwrap();
        let dup = svc
            .create_user("Another Alice".into(), "alice@example.com".into())
            .await;
        match dup {
            Err(AppError::Conflict(msg)) => {
                assert_eq!(msg, "user with this email already exists")
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.get_user("missing").await,
            Err(AppError::NotFound(_))
        ));
    }
}
