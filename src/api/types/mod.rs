//! API request/response plumbing shared by handlers

pub mod error;
pub mod json;
pub mod params;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use params::{Path, Query};
