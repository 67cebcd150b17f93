//! Custom JSON extractor that returns errors as JSON

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use super::error::{ApiError, ApiErrorType};

/// Custom JSON extractor that converts all rejection errors to JSON format
///
/// The Content-Type header is not checked. Bodies that fail to parse or do
/// not match the target type (wrong types, missing required fields) are
/// reported as 422 validation errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            ApiError::new(
                err.status(),
                ApiErrorType::ValidationError,
                format!("Failed to read request body: {}", err.body_text()),
            )
        })?;

        serde_json::from_slice(&bytes)
            .map(Json)
            .map_err(|err| parse_error_to_api_error(&err))
    }
}

fn parse_error_to_api_error(err: &serde_json::Error) -> ApiError {
    match err.classify() {
        Category::Data => {
            ApiError::validation(format!("Invalid JSON data: {}", err)).with_code("invalid_body")
        }
        Category::Syntax | Category::Eof | Category::Io => {
            ApiError::validation(format!("Invalid JSON syntax: {}", err))
                .with_code("json_parse_error")
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
