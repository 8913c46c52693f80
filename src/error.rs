use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DexResult<T> = Result<T, DexError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Please set the MY_SECRET_TOKEN environment variable.")]
    MissingSecret,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error decoding request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Lookup table unavailable: {0}")]
    Dex(#[from] DexError),

    #[error("Pokemon not found: {0}")]
    NotFound(String),

    #[error("Malformed entry for {name}: {reason}")]
    MalformedEntry { name: String, reason: String },

    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Bodies are fixed strings; details only reach the log.
        let (status, msg) = match &self {
            AppError::Decode(e) => {
                tracing::debug!("Rejected request body: {}", e);
                (StatusCode::BAD_REQUEST, "Error decoding request body")
            }
            AppError::Dex(e) => {
                tracing::error!("Lookup table error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Pokemon not found"),
            AppError::MalformedEntry { name, reason } => {
                tracing::warn!("Malformed dex entry {:?}: {}", name, reason);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Pokemon entry is malformed",
                )
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        };

        (status, msg).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
