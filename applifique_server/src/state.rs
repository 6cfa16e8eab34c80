//! Shared router state.

use std::sync::Arc;

use crate::store::WaitlistStore;

/// Everything the handlers need, injected at construction time.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WaitlistStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        Self { store }
    }
}
