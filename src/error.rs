//! Defines the app level error type and its translation to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur while serving requests.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested record could not be found.
    ///
    /// This is returned, never panicked on, from the get/update/delete paths
    /// so that callers can treat a missing record as ordinary control flow.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The store rejected a write because it violates a uniqueness, foreign
    /// key, check, or not-null constraint. The write was rolled back.
    #[error("the write violates a database constraint: {0}")]
    ConstraintViolation(String),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unexpected SQL error.
    ///
    /// The inner error is logged for debugging on the server. Clients only
    /// ever see a generic internal error message.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            // Primary code 19 covers UNIQUE, NOT NULL, CHECK and FOREIGN KEY
            // failures.
            rusqlite::Error::SqliteFailure(sql_error, ref description)
                if sql_error.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                let message = description
                    .clone()
                    .unwrap_or_else(|| sql_error.to_string());

                Error::ConstraintViolation(message)
            }
            error => {
                tracing::error!("an unhandled SQL error occurred: {error}");
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, detail) = match self {
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::ConstraintViolation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Any errors that are not handled above are not intended to be
            // shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred, check the server logs for more details".to_owned(),
                )
            }
        };

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}


#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn not_found_becomes_404() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn constraint_violation_becomes_400() {
        let response = Error::ConstraintViolation("NOT NULL constraint failed".to_owned())
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn lock_error_becomes_500() {
        let response = Error::DatabaseLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
