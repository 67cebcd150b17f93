//! User infrastructure module
//!
//! This module provides the in-memory record store and the user service
//! that validates requests before delegating to it.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService, DEFAULT_LIST_LIMIT};
