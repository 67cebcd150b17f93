//! User Directory API
//!
//! An in-memory user directory served over HTTP, with:
//! - Create/read/update/delete/list of user records
//! - Username and email uniqueness
//! - A CLI client that exercises the API

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use axum::Router;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Create the application state backed by a fresh, empty directory
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository));

    AppState::new(user_service)
}

/// Create the HTTP application with its own empty directory
pub fn create_app() -> Router {
    api::create_router(create_app_state())
}
