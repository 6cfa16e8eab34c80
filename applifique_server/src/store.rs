//! Waitlist storage.
//!
//! One trait, one in-memory implementation. The store is constructor-injected
//! into the router state, so tests can hold a handle to the concrete store
//! and observe what a request actually persisted.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use applifique_common::{NewWaitlistSignup, WaitlistSignup};
use async_trait::async_trait;
use chrono::Utc;

use crate::error::{ApiError, ApiResult};

#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Inserts a signup, assigning the next id. Fails with
    /// [`ApiError::DuplicateEmail`] when the email is already present
    /// (case-sensitive comparison); a rejected insert consumes no id.
    async fn create_signup(&self, signup: NewWaitlistSignup) -> ApiResult<WaitlistSignup>;
}

/// Process-memory store. Everything is lost on restart.
pub struct MemStore {
    inner: Mutex<MemStoreInner>,
}

struct MemStoreInner {
    signups: HashMap<u32, WaitlistSignup>,
    next_id: u32,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemStoreInner {
                signups: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemStoreInner> {
        // A poisoning panic cannot leave the map half-written; keep serving.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl MemStore {
    /// Number of stored signups.
    pub(crate) fn len(&self) -> usize {
        self.lock().signups.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl WaitlistStore for MemStore {
    async fn create_signup(&self, signup: NewWaitlistSignup) -> ApiResult<WaitlistSignup> {
        let mut inner = self.lock();

        if inner
            .signups
            .values()
            .any(|existing| existing.email == signup.email)
        {
            return Err(ApiError::DuplicateEmail);
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let signup = WaitlistSignup {
            id,
            name: signup.name,
            email: signup.email,
            app_type: signup.app_type,
            description: signup.description,
            created_at: Utc::now(),
        };
        inner.signups.insert(id, signup.clone());
        Ok(signup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str) -> NewWaitlistSignup {
        NewWaitlistSignup {
            name: "Test User".to_string(),
            email: email.to_string(),
            app_type: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn assigns_strictly_increasing_ids_from_one() {
        let store = MemStore::new();
        let mut last_id = 0;
        for i in 0..5 {
            let signup = store
                .create_signup(payload(&format!("user{i}@example.com")))
                .await
                .unwrap();
            assert!(signup.id > last_id);
            last_id = signup.id;
        }
        assert_eq!(store.len(), 5);

        let first = store
            .create_signup(payload("late@example.com"))
            .await
            .unwrap();
        assert_eq!(first.id, 6);
    }

    #[tokio::test]
    async fn rejects_duplicate_email_regardless_of_other_fields() {
        let store = MemStore::new();
        store
            .create_signup(payload("ada@example.com"))
            .await
            .unwrap();

        let second = NewWaitlistSignup {
            name: "Different Name".to_string(),
            app_type: Some("game".to_string()),
            description: Some("Another idea entirely".to_string()),
            ..payload("ada@example.com")
        };
        let err = store.create_signup(second).await.unwrap_err();
        assert!(matches!(err, ApiError::DuplicateEmail));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn email_comparison_is_case_sensitive() {
        let store = MemStore::new();
        store
            .create_signup(payload("ada@example.com"))
            .await
            .unwrap();

        let signup = store
            .create_signup(payload("Ada@example.com"))
            .await
            .unwrap();
        assert_eq!(signup.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn rejected_insert_consumes_no_id() {
        let store = MemStore::new();
        store
            .create_signup(payload("first@example.com"))
            .await
            .unwrap();
        let _ = store.create_signup(payload("first@example.com")).await;

        let next = store
            .create_signup(payload("second@example.com"))
            .await
            .unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn preserves_optional_fields_and_sets_created_at() {
        let store = MemStore::new();
        let before = Utc::now();

        let signup = store
            .create_signup(NewWaitlistSignup {
                name: "Test User".to_string(),
                email: "full@example.com".to_string(),
                app_type: Some("fitness".to_string()),
                description: Some("Track my climbing".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(signup.app_type.as_deref(), Some("fitness"));
        assert_eq!(signup.description.as_deref(), Some("Track my climbing"));
        assert!(signup.created_at >= before);
    }
}
