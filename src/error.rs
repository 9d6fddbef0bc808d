//! Application error type and its HTTP mapping.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn employee_not_found() -> Self {
        AppError::NotFound("Employee not found".to_string())
    }

    pub fn entry_not_found() -> Self {
        AppError::NotFound("Entry not found".to_string())
    }

    pub fn duplicate_employee() -> Self {
        AppError::Conflict("Employee ID already exists".to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // logged with its ids where the query failed
            AppError::Store(_) => "Internal Server Error".to_string(),
            AppError::Export(e) => {
                error!(error = %e, "CSV export failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
