//! The waitlist signup endpoint.

use applifique_common::{NewWaitlistSignup, WaitlistAccepted};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}

async fn join_waitlist(
    State(state): State<AppState>,
    payload: Result<Json<NewWaitlistSignup>, JsonRejection>,
) -> ApiResult<Json<WaitlistAccepted>> {
    // Unparseable bodies get the same envelope as field-level failures.
    let Json(payload) =
        payload.map_err(|rejection| ApiError::Validation(vec![rejection.body_text()]))?;
    payload.validate()?;

    let signup = state.store.create_signup(payload).await?;
    info!(id = signup.id, "waitlist signup recorded");

    Ok(Json(WaitlistAccepted {
        success: true,
        message: "Successfully joined the waitlist!".to_string(),
        id: signup.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::store::MemStore;

    fn build_test_router(store: Arc<MemStore>) -> Router<()> {
        router().with_state(AppState::new(store))
    }

    fn test_server(store: Arc<MemStore>) -> TestServer {
        TestServer::new(build_test_router(store)).unwrap()
    }

    // =========================================================================
    // POST /waitlist
    // =========================================================================

    #[tokio::test]
    async fn valid_signup_returns_success_envelope() {
        let store = Arc::new(MemStore::new());
        let server = test_server(store.clone());

        let response = server
            .post("/waitlist")
            .json(&json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "appType": "productivity",
                "description": "A planning tool"
            }))
            .await;

        response.assert_status(StatusCode::OK);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Successfully joined the waitlist!");
        assert_eq!(body["id"], 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn optional_fields_may_be_omitted() {
        let store = Arc::new(MemStore::new());
        let server = test_server(store);

        let response = server
            .post("/waitlist")
            .json(&json!({ "name": "Ada Lovelace", "email": "ada@example.com" }))
            .await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn ids_increase_across_signups() {
        let store = Arc::new(MemStore::new());
        let server = test_server(store);

        for (i, email) in ["a@example.com", "b@example.com", "c@example.com"]
            .iter()
            .enumerate()
        {
            let response = server
                .post("/waitlist")
                .json(&json!({ "name": "Ada Lovelace", "email": email }))
                .await;
            response.assert_status(StatusCode::OK);
            assert_eq!(response.json::<serde_json::Value>()["id"], i as u32 + 1);
        }
    }

    #[tokio::test]
    async fn duplicate_email_returns_conflict() {
        let store = Arc::new(MemStore::new());
        let server = test_server(store.clone());

        let first = server
            .post("/waitlist")
            .json(&json!({ "name": "Ada Lovelace", "email": "ada@example.com" }))
            .await;
        first.assert_status(StatusCode::OK);

        let second = server
            .post("/waitlist")
            .json(&json!({
                "name": "Someone Else",
                "email": "ada@example.com",
                "appType": "game"
            }))
            .await;

        second.assert_status(StatusCode::CONFLICT);
        let body = second.json::<serde_json::Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "This email is already on our waitlist!");
        assert!(body.get("errors").is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn missing_fields_return_validation_error_and_store_nothing() {
        let store = Arc::new(MemStore::new());
        let server = test_server(store.clone());

        let response = server.post("/waitlist").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid form data");
        assert!(!body["errors"].as_array().unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn malformed_email_returns_validation_error_and_stores_nothing() {
        let store = Arc::new(MemStore::new());
        let server = test_server(store.clone());

        let response = server
            .post("/waitlist")
            .json(&json!({ "name": "Ada Lovelace", "email": "notanemail" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["message"], "Invalid form data");
        assert_eq!(body["errors"][0], "email: Invalid email format");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn short_name_returns_validation_error() {
        let store = Arc::new(MemStore::new());
        let server = test_server(store.clone());

        let response = server
            .post("/waitlist")
            .json(&json!({ "name": "A", "email": "ada@example.com" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["errors"][0], "name: Name must be at least 2 characters");
        assert!(store.is_empty());
    }
}
