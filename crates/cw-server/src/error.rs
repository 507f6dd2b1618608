//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cw_content::ContentError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Request named a field, section, tab or kind that does not exist, or
    /// carried a value of the wrong shape.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// No top-level navigation item has this id.
    #[error("Navigation item not found: {0}")]
    ItemNotFound(String),

    /// The parent exists but has no child with this id.
    #[error("Navigation child not found: {parent}/{child}")]
    ChildNotFound { parent: String, child: String },

    /// No drag is in progress.
    #[error("No drag in progress")]
    NotDragging,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Content(ContentError::UnknownSection(_) | ContentError::UnknownTab(_))
            | Self::ItemNotFound(_)
            | Self::ChildNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Content(_) => StatusCode::BAD_REQUEST,
            Self::NotDragging => StatusCode::CONFLICT,
        };
        if status.is_client_error() {
            tracing::debug!(%status, "request rejected: {self}");
        }

        (status, axum::Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                ServerError::Content(ContentError::UnknownSection("x".to_owned())),
                StatusCode::NOT_FOUND,
            ),
            (
                ServerError::Content(ContentError::UnknownField("x".to_owned())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServerError::ItemNotFound("x".to_owned()),
                StatusCode::NOT_FOUND,
            ),
            (ServerError::NotDragging, StatusCode::CONFLICT),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
