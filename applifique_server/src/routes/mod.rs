//! HTTP routes, mounted under `/api`.

mod health;
mod waitlist;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(waitlist::router())
        .merge(health::router())
}
