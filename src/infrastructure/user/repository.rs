//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserProfile, UserRepository};
use crate::domain::DomainError;

/// Records plus lookup indexes, guarded together by one lock
#[derive(Debug)]
struct UserStore {
    /// Insertion order; ids are strictly increasing along the vector
    users: Vec<User>,
    next_id: UserId,
    /// Index for username -> user ID lookup
    username_index: HashMap<String, UserId>,
    /// Index for email -> user ID lookup
    email_index: HashMap<String, UserId>,
}

impl UserStore {
    fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: UserId::FIRST,
            username_index: HashMap::new(),
            email_index: HashMap::new(),
        }
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.binary_search_by_key(&id, |u| u.id()).ok()
    }

    /// Reject a profile whose username or email belongs to a user other than `owner`
    fn check_unique(&self, profile: &UserProfile, owner: Option<UserId>) -> Result<(), DomainError> {
        let taken_by_other = |holder: Option<&UserId>| match holder {
            Some(holder) => Some(*holder) != owner,
            None => false,
        };

        if taken_by_other(self.username_index.get(&profile.username)) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                profile.username
            )));
        }

        if taken_by_other(self.email_index.get(&profile.email)) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                profile.email
            )));
        }

        Ok(())
    }

    fn index(&mut self, user: &User) {
        self.username_index
            .insert(user.username().to_string(), user.id());
        self.email_index.insert(user.email().to_string(), user.id());
    }

    fn unindex(&mut self, user: &User) {
        self.username_index.remove(user.username());
        self.email_index.remove(user.email());
    }
}

fn not_found(id: UserId) -> DomainError {
    DomainError::not_found(format!("User with id {} not found", id))
}

/// In-memory implementation of UserRepository
///
/// Uniqueness checks and mutations run under a single write lock, so
/// concurrent requests cannot produce duplicate ids or duplicate values.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(UserStore::new())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.position(id).map(|pos| store.users[pos].clone()))
    }

    async fn create(&self, profile: UserProfile) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        store.check_unique(&profile, None)?;

        let id = store.next_id;
        store.next_id = id.next();

        let user = User::new(id, profile);
        store.index(&user);
        store.users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: UserId, profile: UserProfile) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        let pos = store.position(id).ok_or_else(|| not_found(id))?;
        store.check_unique(&profile, Some(id))?;

        let mut user = store.users[pos].clone();
        store.unindex(&user);
        user.apply_profile(profile);
        store.index(&user);
        store.users[pos] = user.clone();

        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;

        match store.position(id) {
            Some(pos) => {
                let user = store.users.remove(pos);
                store.unindex(&user);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<User>, DomainError> {
        let store = self.store.read().await;

        let result: Vec<User> = store.users.iter().skip(skip).take(limit).cloned().collect();

        Ok(result)
    }
}
