use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{ "error": "<message>" }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx: connection failure, pool timeout, bad
    /// query or undecodable row.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, store_message(err))
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

/// The message reported by the store itself, unsanitized.
///
/// Errors raised by PostgreSQL carry their own text (e.g. `relation
/// "movie_hero" does not exist`) without sqlx's wrapper prefix. Pool and
/// connection failures have no such text and use sqlx's description.
fn store_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}
