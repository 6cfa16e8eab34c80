//! Waitlist wire schema.
//!
//! These types cross the wasm/native boundary, so they stay serde-only:
//!
//! - **camelCase on the wire** - the public API speaks `appType`/`createdAt`
//! - **Validated once, enforced twice** - the same `Validate` rules run in
//!   the browser before submit and on the server before insert

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// A stored waitlist signup.
///
/// Ids are process-local, assigned in insertion order starting at 1, and
/// never reused. Records are created once and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSignup {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub app_type: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload accepted by `POST /api/waitlist`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewWaitlistSignup {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: String,
    // validator's email rule accepts "", so required-ness needs its own rule
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[serde(default)]
    pub app_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Success envelope returned by the waitlist endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaitlistAccepted {
    pub success: bool,
    pub message: String,
    pub id: u32,
}

/// Failure envelope. `errors` carries per-field validation messages and is
/// omitted entirely for conflict and internal failures.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaitlistRejected {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Flattens `ValidationErrors` into sorted `"field: reason"` strings.
///
/// Sorted so the output is stable regardless of field iteration order.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let reason = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                format!("{field}: {reason}")
            })
        })
        .collect();
    messages.sort();
    messages
}
