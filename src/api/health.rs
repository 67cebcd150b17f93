//! Service information and health endpoints

use axum::{http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::Json;

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Health check status
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Payload returned at the service root
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub docs: String,
    pub health: String,
}

/// GET / - welcome message with pointers to the other entry points
pub async fn service_info() -> impl IntoResponse {
    let info = ServiceInfo {
        message: "Welcome to User Management API".to_string(),
        docs: "/docs".to_string(),
        health: "/health".to_string(),
    };

    (StatusCode::OK, Json(info))
}

/// GET /health - always healthy while the process is serving requests
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    };

    (StatusCode::OK, Json(response))
}
