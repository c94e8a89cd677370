//! Response construction and error mapping.
//!
//! # Responsibilities
//! - Map domain errors to HTTP status codes at one place
//! - Render errors as plain text, rejections with an empty body
//!
//! # Design Decisions
//! - Mapping keys on the error variant, never on the message text
//! - No structured error body: clients get the message as `text/plain`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::routing::Rejection;
use crate::users::UserError;

/// A failed action, ready to be written to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    error: UserError,
}

impl ApiError {
    /// Pair an error with an explicit status, overriding the default mapping.
    pub fn with_status(status: StatusCode, error: UserError) -> Self {
        Self { status, error }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &UserError {
        &self.error
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        let status = match error {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::IdMismatch => StatusCode::BAD_REQUEST,
            UserError::IdAssigned | UserError::Parse => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.error.to_string()).into_response()
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}
