//! User domain
//!
//! This module provides domain types and traits for the user directory,
//! including the user entity, field validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId, UserProfile};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_password, validate_username, UserValidationError,
    MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
