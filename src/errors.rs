// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Stored data is corrupted: {0}")]
    CorruptData(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Match not found")]
    MatchNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Match has already started")]
    MatchAlreadyStarted,

    #[error("Match is not open for predictions")]
    MatchHidden,

    #[error("Predictions are locked by the administrator")]
    PredictionsLocked,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string()),
            AppError::StorageError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string()),
            AppError::CorruptData(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Corrupted data".to_string()),
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "Validation failed".to_string()),
            AppError::MatchNotFound => (StatusCode::NOT_FOUND, "Match not found".to_string()),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            AppError::DuplicateEmail => (StatusCode::CONFLICT, "Duplicate entry".to_string()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Authentication failed".to_string()),
            AppError::MatchAlreadyStarted => (StatusCode::CONFLICT, "Match already started".to_string()),
            AppError::MatchHidden => (StatusCode::FORBIDDEN, "Match not visible".to_string()),
            AppError::PredictionsLocked => (StatusCode::LOCKED, "Predictions locked".to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
            "success": false,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

// Reading a persisted collection that fails to parse is data corruption,
// not caller input error; state is left as it was.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::CorruptData(format!("JSON parsing error: {}", err))
    }
}

// Helper conversion functions
impl AppError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::StorageError(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
