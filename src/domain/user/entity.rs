//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier - positive integer assigned by the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// First identifier handed out by an empty directory
    pub const FIRST: UserId = UserId(1);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Identifier that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable, user-supplied part of a user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl UserProfile {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            full_name,
        }
    }
}

/// User entity held by the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier, never reused
    id: UserId,
    username: String,
    email: String,
    full_name: Option<String>,
    /// Always true; no operation deactivates a user
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user stamped with the current time
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self {
            id,
            username: profile.username,
            email: profile.email,
            full_name: profile.full_name,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Mutators

    /// Replace username, email and full name. Identity fields are untouched.
    pub fn apply_profile(&mut self, profile: UserProfile) {
        self.username = profile.username;
        self.email = profile.email;
        self.full_name = profile.full_name;
    }
}
