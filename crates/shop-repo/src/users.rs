use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use shop_types::domain::user::User;
use shop_types::ports::user_repository::UserRepository;
use shop_types::ports::RepoError;

/// User store guarded by a readers-writer lock: the duplicate-email scan
/// in `create` must be atomic with the insert that follows it.
#[derive(Clone)]
pub struct InMemoryUserRepo {
    map: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            map: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, User>>, RepoError> {
        self.map
            .read()
            .map_err(|_| RepoError::Storage("user store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, User>>, RepoError> {
        self.map
            .write()
            .map_err(|_| RepoError::Storage("user store lock poisoned".into()))
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        let mut map = self.write()?;
        if map.values().any(|existing| existing.email == user.email) {
            return Err(RepoError::Duplicate(
                "user with this email already exists".into(),
            ));
        }
        map.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get(&self, id: &str) -> Result<Option<User>, RepoError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn update(&self, user: User) -> Result<Option<User>, RepoError> {
        let mut map = self.write()?;
        if !map.contains_key(&user.id) {
            return Ok(None);
        }
        map.insert(user.id.clone(), user.clone());
        Ok(Some(user))
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        Ok(self.write()?.remove(id).is_some())
    }

    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let mut users: Vec<User> = self.read()?.values().cloned().collect();
        users.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(users)
    }
}
