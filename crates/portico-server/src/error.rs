//! Server error types and handling

use crate::ui::page::{Page, escape_text};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Server result type
pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ServerError::NotFound(_) => "Page not found",
            _ => "Something went wrong",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Page::new(self.title())
            .with_body(format!(
                "<main><h1>{}</h1><p>{}</p></main>",
                escape_text(self.title()),
                escape_text(&self.to_string())
            ))
            .render();
        (status, Html(body)).into_response()
    }
}

/// Convert IO errors
impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {}", err))
    }
}
