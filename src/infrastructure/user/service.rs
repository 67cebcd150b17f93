//! User service for directory management

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    validate_email, validate_password, validate_username, User, UserId, UserProfile,
    UserRepository,
};
use crate::domain::DomainError;

/// Default page size for listing users
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    /// Checked for length, then dropped
    pub password: String,
    pub full_name: Option<String>,
}

/// Request for updating a user
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// User service for managing the directory
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_username(&request.username)?;
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        let CreateUserRequest {
            username,
            email,
            full_name,
            ..
        } = request;

        let user = self
            .repository
            .create(UserProfile::new(username, email, full_name))
            .await?;

        info!(id = %user.id(), username = %user.username(), "Created user");

        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User with id {} not found", id)))
    }

    /// List users in insertion order
    pub async fn list(&self, skip: usize, limit: usize) -> Result<Vec<User>, DomainError> {
        debug!(skip, limit, "Listing users");
        self.repository.list(skip, limit).await
    }

    /// Update a user's username, email and full name
    pub async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        validate_username(&request.username)?;
        validate_email(&request.email)?;

        let user = self
            .repository
            .update(
                id,
                UserProfile::new(request.username, request.email, request.full_name),
            )
            .await?;

        info!(id = %user.id(), username = %user.username(), "Updated user");

        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!(
                "User with id {} not found",
                id
            )));
        }

        info!(id = %id, "Deleted user");

        Ok(())
    }
}
