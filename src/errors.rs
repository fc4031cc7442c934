// src/errors.rs

use std::collections::BTreeMap;

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Input validation failed before the request reached a service.
  /// Maps each offending field name to its violation message.
  #[error("Validation failed for fields: {}", field_list(.0))]
  Validation(BTreeMap<String, String>),

  /// A requested entity id does not exist in the store. Also raised when a
  /// product write references a category id that is absent.
  #[error("{entity} not found with id: {id}")]
  NotFound { entity: &'static str, id: i64 },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  pub fn not_found(entity: &'static str, id: i64) -> Self {
    AppError::NotFound { entity, id }
  }
}

fn field_list(errors: &BTreeMap<String, String>) -> String {
  errors.keys().cloned().collect::<Vec<_>>().join(", ")
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in code using `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      match err.downcast::<sqlx::Error>() {
        Ok(sqlx_err) => AppError::Sqlx(sqlx_err),
        Err(other) => AppError::Internal(other.to_string()),
      }
    } else {
      AppError::Internal(err.to_string())
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    match self {
      // 400: JSON object mapping each offending field to its message.
      AppError::Validation(field_errors) => {
        tracing::warn!(fields = ?field_errors.keys(), "Rejecting request with validation errors");
        HttpResponse::BadRequest().json(field_errors)
      }
      // 404: plain-text body carrying the NotFound message verbatim.
      AppError::NotFound { .. } => {
        tracing::warn!(not_found = %self, "Responding with 404");
        HttpResponse::NotFound()
          .content_type("text/plain; charset=utf-8")
          .body(self.to_string())
      }
      AppError::Config(m) => {
        tracing::error!(detail = %m, "Configuration error surfaced in a response");
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue"}))
      }
      // Unexpected persistence failures surface as opaque server errors.
      AppError::Sqlx(e) => {
        tracing::error!(error = %e, "Database operation failed");
        HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
      }
      AppError::Internal(m) => {
        tracing::error!(detail = %m, "Internal error surfaced in a response");
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred"}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
