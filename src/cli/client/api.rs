//! HTTP client for the User Directory API

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::health::HealthResponse;
use crate::api::users::{CreateUserApiRequest, UpdateUserApiRequest, UserResponse};

/// Errors returned by [`UserDirectoryClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Status code of a server-side rejection, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
        }
    }
}

/// Thin wrapper over the directory's HTTP interface
#[derive(Debug, Clone)]
pub struct UserDirectoryClient {
    base_url: String,
    http: Client,
}

impl UserDirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /health
    pub async fn health_check(&self) -> Result<HealthResponse, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        parse_json(response).await
    }

    /// POST /users
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<UserResponse, ClientError> {
        let body = CreateUserApiRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.map(String::from),
        };

        let response = self.http.post(self.url("/users")).json(&body).send().await?;
        parse_json(response).await
    }

    /// GET /users?skip=&limit=
    pub async fn list_users(&self, skip: usize, limit: usize) -> Result<Vec<UserResponse>, ClientError> {
        let response = self
            .http
            .get(self.url("/users"))
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        parse_json(response).await
    }

    /// GET /users/{id}
    pub async fn get_user(&self, id: u64) -> Result<UserResponse, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/users/{}", id)))
            .send()
            .await?;
        parse_json(response).await
    }

    /// PUT /users/{id}
    pub async fn update_user(
        &self,
        id: u64,
        username: &str,
        email: &str,
        full_name: Option<&str>,
    ) -> Result<UserResponse, ClientError> {
        let body = UpdateUserApiRequest {
            username: username.to_string(),
            email: email.to_string(),
            full_name: full_name.map(String::from),
        };

        let response = self
            .http
            .put(self.url(&format!("/users/{}", id)))
            .json(&body)
            .send()
            .await?;
        parse_json(response).await
    }

    /// DELETE /users/{id}; success carries no body
    pub async fn delete_user(&self, id: u64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/users/{}", id)))
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}
