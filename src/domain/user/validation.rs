//! User validation utilities

use thiserror::Error;
use validator::ValidateEmail;

use crate::domain::DomainError;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username is too short. Minimum length is {0} characters")]
    UsernameTooShort(usize),

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Email address '{0}' is not valid")]
    InvalidEmail(String),

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),
}

impl UserValidationError {
    /// Name of the request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::UsernameTooShort(_) | Self::UsernameTooLong(_) => "username",
            Self::InvalidEmail(_) => "email",
            Self::PasswordTooShort(_) => "password",
        }
    }
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::invalid_field(err.field(), err.to_string())
    }
}

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a username
///
/// Rules:
/// - Minimum 3 characters
/// - Maximum 50 characters
///
/// Lengths are counted in characters, not bytes. No character set is enforced.
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    let length = username.chars().count();

    if length < MIN_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooShort(MIN_USERNAME_LENGTH));
    }

    if length > MAX_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address (syntax only)
///
/// On top of the RFC syntax check, the domain must be a dotted host name:
/// bare hosts such as `localhost` and `[..]` address literals are refused.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !email.validate_email() || !has_dotted_domain(email) {
        return Err(UserValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

fn has_dotted_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };

    !domain.starts_with('[')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Validate a password
///
/// The password is only checked for length; it is never stored.
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}
