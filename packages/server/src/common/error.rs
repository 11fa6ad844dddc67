//! API error taxonomy and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// A single offending field in a validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced to API callers.
///
/// Validation failures are detected before any store interaction and are
/// never partially applied. `NotFound` covers missing ids, including
/// foreign-key failures translated on the worker/assignment path. Anything
/// else is an unexpected store failure: logged, surfaced as 500, not
/// retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }

    pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    kind: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a [FieldError]>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, fields) = match &self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation",
                Some(errors.as_slice()),
            ),
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found", None),
            ApiError::Internal(error) => {
                tracing::error!(error = %error, "unexpected store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", None)
            }
        };

        // Store failure details stay in the logs, not on the wire.
        let message = match &self {
            ApiError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        };

        (
            status,
            Json(ErrorBody {
                error: ErrorDetail {
                    kind,
                    message,
                    fields,
                },
            }),
        )
            .into_response()
    }
}

/// Translates a Postgres foreign-key violation into `NotFound`.
///
/// A job can be deleted between an existence check and the dependent
/// assignment insert; the store reports that as error 23503, which callers
/// of this helper surface as the missing entity instead of a raw store
/// error.
pub fn fk_violation_as_not_found(error: anyhow::Error, entity: &'static str, id: i64) -> ApiError {
    if let Some(sqlx::Error::Database(db)) = error.downcast_ref::<sqlx::Error>() {
        if db.code().as_deref() == Some("23503") {
            return ApiError::NotFound { entity, id };
        }
    }
    ApiError::Internal(error)
}
