use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    RequestParameterError(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ResourceConflict(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("failed to convert: {0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("not authenticated")]
    UnauthenticatedError,
    #[error("not allowed to perform this operation")]
    UnauthorizedError,
    #[error("{0}")]
    ForbiddenOperation(String),
    #[error("transaction failed")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("failed to convert entity: {0}")]
    ConversionEntityError(String),
    #[error("external service error: {0}")]
    ExternalServiceError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::RequestParameterError(_)
            | AppError::ValidationError(_)
            | AppError::ConvertToUuidError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedError | AppError::ForbiddenOperation(_) => StatusCode::FORBIDDEN,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ResourceConflict(_) => StatusCode::CONFLICT,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ref e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_)
            | AppError::ExternalServiceError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal details stay in the log; the client only sees the message.
        let message = match status_code {
            StatusCode::INTERNAL_SERVER_ERROR => "internal server error".to_string(),
            _ => self.to_string(),
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        let cases = [
            (
                AppError::RequestParameterError("bad".into()).into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::UnauthenticatedError.into_response(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::ForbiddenOperation("own experience".into()).into_response(),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::EntityNotFound("missing".into()).into_response(),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::ResourceConflict("already booked".into()).into_response(),
                StatusCode::CONFLICT,
            ),
            (
                AppError::UnprocessableEntity("not published".into()).into_response(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::NoRowsAffectedError("none".into()).into_response(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (response, expected) in cases {
            assert_eq!(response.status(), expected);
        }
    }
}
