use axum::{Json, Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;

    use super::*;
    use crate::store::MemStore;

    #[tokio::test]
    async fn health_reports_ok() {
        let state = AppState::new(Arc::new(MemStore::new()));
        let server = TestServer::new(router().with_state(state)).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["status"], "ok");
    }
}
