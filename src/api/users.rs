//! User directory endpoints

use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path, Query};
use crate::domain::{User, UserId};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest, DEFAULT_LIST_LIMIT};

/// Request to create a new user
#[derive(Clone, Serialize, Deserialize)]
pub struct CreateUserApiRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl std::fmt::Debug for CreateUserApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserApiRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .finish()
    }
}

/// Request to replace a user's profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserApiRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Pagination parameters for listing users
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

/// User representation returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            full_name: user.full_name().map(String::from),
            is_active: user.is_active(),
            created_at: user.created_at(),
        }
    }
}

/// Ids are assigned from 1 upwards, so zero or negative path ids cannot match a record
fn to_user_id(raw: i64) -> Result<UserId, ApiError> {
    u64::try_from(raw)
        .ok()
        .filter(|id| *id > 0)
        .map(UserId::new)
        .ok_or_else(|| ApiError::not_found(format!("User with id {} not found", raw)))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(username = %request.username, "Creating user");

    let service_request = CreateUserRequest {
        username: request.username,
        email: request.email,
        password: request.password,
        full_name: request.full_name,
    };

    let user = state
        .user_service
        .create(service_request)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let users = state
        .user_service
        .list(skip, limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id, "Getting user");

    let user = state
        .user_service
        .get(to_user_id(user_id)?)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id, "Updating user");

    let service_request = UpdateUserRequest {
        username: request.username,
        email: request.email,
        full_name: request.full_name,
    };

    let user = state
        .user_service
        .update(to_user_id(user_id)?, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id, "Deleting user");

    state
        .user_service
        .delete(to_user_id(user_id)?)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
