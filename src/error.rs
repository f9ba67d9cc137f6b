use std::path::PathBuf;

use thiserror::Error;

/// Validation failures shown inline on the auth page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Username not found")]
    UsernameNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Fill all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Storage error on {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corrupt store {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode store {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Axum IntoResponse implementation for HTML error pages
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::response::Html;

        tracing::error!("❌ Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(crate::views::error_page(&self.to_string())),
        )
            .into_response()
    }
}
