use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type. Every failure that can reach the HTTP boundary
/// is one of these variants, each mapped to a JSON body and a status code so
/// handlers can simply `?` their way out.
#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Upstream Service Error: {0}")]
  Upstream(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Handlers occasionally `?` on anyhow-returning helpers; fold those into Internal.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return AppError::Sqlx(err.downcast::<sqlx::Error>().unwrap());
    }
    AppError::Internal(err.to_string())
  }
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
    AppError::Upstream(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it is turned into a response.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"status": "error", "error": m})),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"status": "error", "error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"status": "error", "error": m})),
      AppError::Upstream(m) => {
        HttpResponse::BadGateway().json(json!({"status": "error", "error": "Upstream service failed", "detail": m}))
      }
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"status": "error", "error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => {
        HttpResponse::InternalServerError().json(json!({"status": "error", "error": "Database operation failed"}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError()
          .json(json!({"status": "error", "error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

/// Result type alias for the application.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
