//! API error type shared by all routes.

use applifique_common::{WaitlistRejected, validation_messages};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Payload failed shape or field validation.
    #[error("Invalid form data")]
    Validation(Vec<String>),

    /// The email is already present in the store.
    #[error("This email is already on our waitlist!")]
    DuplicateEmail,

    /// Anything unexpected. Logged here, reported generically to the caller.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(validation_messages(&err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Invalid form data".to_string(),
                Some(errors),
            ),
            ApiError::DuplicateEmail => (
                StatusCode::CONFLICT,
                "This email is already on our waitlist!".to_string(),
                None,
            ),
            ApiError::Internal(reason) => {
                tracing::error!(error = %reason, "Waitlist request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to join waitlist. Please try again.".to_string(),
                    None,
                )
            }
        };
        let body = WaitlistRejected {
            success: false,
            message,
            errors,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_errors() {
        let error = ApiError::Validation(vec!["email: Invalid email format".to_string()]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid form data");
        assert_eq!(body["errors"][0], "email: Invalid email format");
    }

    #[tokio::test]
    async fn duplicate_maps_to_409_without_errors() {
        let response = ApiError::DuplicateEmail.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "This email is already on our waitlist!");
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn internal_maps_to_500_and_hides_the_reason() {
        let response = ApiError::Internal("store exploded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to join waitlist. Please try again.");
        assert!(!body.to_string().contains("store exploded"));
    }
}
