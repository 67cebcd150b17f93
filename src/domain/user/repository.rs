//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId, UserProfile};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations own identifier assignment and enforce username/email
/// uniqueness atomically with the mutation. Listing preserves insertion order.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Create a user with the next free identifier
    async fn create(&self, profile: UserProfile) -> Result<User, DomainError>;

    /// Replace the profile of an existing user
    async fn update(&self, id: UserId, profile: UserProfile) -> Result<User, DomainError>;

    /// Delete a user, returning whether it existed
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// List users in insertion order, skipping `skip` and returning at most `limit`
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<User>, DomainError>;
}
