use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::BackofficeError;
use crate::models::Invoice;

fn default_limit() -> i64 {
    100
}

fn default_offset() -> i64 {
    0
}

/// Query parameters for `GET /invoices`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetInvoicesParams {
    /// Number of invoices to fetch.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of invoices to skip.
    #[serde(default = "default_offset")]
    pub offset: i64,
}

/// Component for invoice-related data.
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceComponent {
    pub id: Uuid,
}

impl InvoiceComponent {
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self { id: invoice.id }
    }
}

/// Possible kinds of API errors, derived from the response status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    Authentication,
    Authorization,
    Forbidden,
    Internal,
    NotFound,
    Unknown,
    Validation,
}

impl ErrorKind {
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            401 => ErrorKind::Authentication,
            403 => ErrorKind::Authorization,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Forbidden,
            422 => ErrorKind::Validation,
            500 => ErrorKind::Internal,
            _ => ErrorKind::Unknown,
        }
    }
}

/// Exception details attached to internal error bodies.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExceptionDetails {
    pub class: String,
    pub message: String,
}

/// A single validation failure inside an error body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorItem {
    pub location: String,
    pub message: String,
    pub kind: String,
}

/// Error response body shared by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub kind: ErrorKind,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<ExceptionDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorItem>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        let kind = ErrorKind::from_status(status);
        let code = match kind {
            ErrorKind::Validation => "EV-422".to_string(),
            _ => format!("EH-{}", status.as_u16()),
        };
        ErrorResponse {
            code,
            message: message.into(),
            kind,
            status: status.as_u16(),
            exception: None,
            details: None,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Newtype wrapper for BackofficeError to implement IntoResponse.
pub struct ApiError(pub BackofficeError);

impl From<BackofficeError> for ApiError {
    fn from(err: BackofficeError) -> Self {
        ApiError(err)
    }
}

fn class_slug(err: &BackofficeError) -> &'static str {
    match err {
        BackofficeError::UserNotFound(_) => "user-not-found",
        BackofficeError::EmailAlreadyRegistered(_) => "email-already-registered",
        BackofficeError::InvalidInput(_) => "invalid-input",
        BackofficeError::DatabaseError(_) => "database-error",
        BackofficeError::InternalServerError(_) => "internal-server-error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            BackofficeError::UserNotFound(_) => StatusCode::NOT_FOUND,
            BackofficeError::EmailAlreadyRegistered(_) => StatusCode::CONFLICT,
            BackofficeError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BackofficeError::DatabaseError(_) | BackofficeError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let mut error = match &self.0 {
            BackofficeError::InvalidInput(message) => {
                let mut error = ErrorResponse::new(status, "input validation failure");
                error.details = Some(vec![ValidationErrorItem {
                    location: "query".to_string(),
                    message: message.to_lowercase(),
                    kind: "validation".to_string(),
                }]);
                error
            }
            other => ErrorResponse::new(status, other.to_string()),
        };

        if error.kind == ErrorKind::Internal {
            error.exception = Some(ExceptionDetails {
                class: class_slug(&self.0).to_string(),
                message: self.0.to_string().to_lowercase(),
            });
        }

        error.into_response()
    }
}
