//! Request handlers

pub mod admin;
pub mod health;
pub mod site;

use crate::error::ServerError;
use axum::http::Uri;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
