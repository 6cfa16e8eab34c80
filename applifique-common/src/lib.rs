//! Shared types for the Applifique server and landing crates.
//!
//! This crate defines the waitlist wire schema used on both sides of the
//! `POST /api/waitlist` contract, including the validation rules the browser
//! form and the HTTP endpoint both enforce.

mod schema;

pub use schema::{
    NewWaitlistSignup, WaitlistAccepted, WaitlistRejected, WaitlistSignup, validation_messages,
};
