use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::client::ClientError;

/// Application-level error type for HTTP handlers.
///
/// Renders as a short plain-text body. The underlying cause is logged, not
/// sent to the browser.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The call to the data service failed.
    #[error(transparent)]
    Backend(#[from] ClientError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::Backend(ClientError::Transport(err)) => {
                tracing::error!(error = %err, "Error making request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error making request to backend",
                )
            }
            // The backend's status code is passed through as-is.
            WebError::Backend(ClientError::Status(status)) => {
                tracing::error!(status = status.as_u16(), "Backend responded with error");
                (*status, "Backend responded with error")
            }
            WebError::Backend(ClientError::Decode(err)) => {
                tracing::error!(error = %err, "Backend sent an undecodable body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Invalid response from backend",
                )
            }
        };

        (status, message).into_response()
    }
}
