use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quiz_common::{ErrorKind, FieldError, ValidationErrors};
use sea_orm::DbErr;
use serde::Serialize;

use crate::models::page::Flash;
use crate::repository::RepoError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `NOT_FOUND`,
    /// `INTERNAL_ERROR`.
    pub code: &'static str,
    /// Human-readable error description.
    pub message: String,
    /// Field-level messages, present for validation errors only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    /// Messages for the failed request. The session is not saved on a server
    /// error, so they are delivered with the error itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationErrors),
    NotFound(String),
    Internal(String),
    /// Another error, shown together with flash messages.
    Flashed(Box<AppError>, Flash),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(errors) => errors.kind(),
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Internal(_) => ErrorKind::Infrastructure,
            AppError::Flashed(inner, _) => inner.kind(),
        }
    }

    /// Attach an error flash message to be shown on the error page.
    pub fn with_flash_error(self, message: impl Into<String>) -> Self {
        let (inner, mut flash) = match self {
            AppError::Flashed(inner, flash) => (inner, flash),
            other => (Box::new(other), Flash::default()),
        };
        flash.error.push(message.into());
        AppError::Flashed(inner, flash)
    }

    fn status_and_code(kind: ErrorKind) -> (StatusCode, &'static str) {
        match kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Infrastructure => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn into_body(self) -> ErrorBody {
        let (_, code) = Self::status_and_code(self.kind());
        match self {
            AppError::Flashed(inner, flash) => ErrorBody {
                flash: Some(flash),
                ..inner.into_body()
            },
            AppError::Validation(errors) => ErrorBody {
                code,
                message: errors.to_string(),
                errors: errors.iter().cloned().collect(),
                flash: None,
            },
            AppError::NotFound(message) => ErrorBody {
                code,
                message,
                errors: Vec::new(),
                flash: None,
            },
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorBody {
                    code,
                    message: "An unexpected error occurred".into(),
                    errors: Vec::new(),
                    flash: None,
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = Self::status_and_code(self.kind());
        (status, Json(self.into_body())).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(errors) => AppError::Validation(errors),
            RepoError::NotFound(id) => AppError::NotFound(format!("There is no quiz with id={id}")),
            RepoError::Storage(e) => AppError::from(e),
        }
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AppError::Internal(format!("Session error: {err}"))
    }
}
