//! Native waitlist signup form.
//!
//! Fields validate against the shared schema before anything leaves the
//! browser, then the payload posts to the local API. Server-side rejections
//! render the same envelope the API returns.

use applifique_common::{NewWaitlistSignup, WaitlistAccepted, WaitlistRejected, validation_messages};
use gloo_net::http::Request;
use leptos::prelude::*;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;

/// Endpoint the form posts to.
const WAITLIST_ENDPOINT: &str = "/api/waitlist";

/// Submission lifecycle.
#[derive(Clone, Debug, PartialEq)]
enum SubmitState {
    Idle,
    Submitting,
    Accepted(String),
    Rejected { message: String, errors: Vec<String> },
}

#[component]
pub fn WaitlistForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (app_type, set_app_type) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (state, set_state) = signal(SubmitState::Idle);

    let submitting = move || state.with(|state| *state == SubmitState::Submitting);
    let error_message = move || {
        state.with(|state| match state {
            SubmitState::Rejected { message, .. } => Some(message.clone()),
            _ => None,
        })
    };
    let error_details = move || {
        state.with(|state| match state {
            SubmitState::Rejected { errors, .. } => errors.clone(),
            _ => Vec::new(),
        })
    };
    let success_message = move || {
        state.with(|state| match state {
            SubmitState::Accepted(message) => message.clone(),
            _ => String::new(),
        })
    };

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        if submitting() {
            return;
        }
        let payload = NewWaitlistSignup {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            app_type: none_if_empty(&app_type.get_untracked()),
            description: none_if_empty(&description.get_untracked()),
        };
        if let Err(errors) = payload.validate() {
            set_state.set(SubmitState::Rejected {
                message: "Invalid form data".to_string(),
                errors: validation_messages(&errors),
            });
            return;
        }
        set_state.set(SubmitState::Submitting);
        spawn_local(async move {
            set_state.set(submit_signup(payload).await);
        });
    };

    view! {
        <Show
            when=move || matches!(state.get(), SubmitState::Accepted(_))
            fallback=move || {
                view! {
                    <form class="waitlist-form" on:submit=on_submit>
                        <Show when=move || error_message().is_some()>
                            <div class="form-errors" role="alert">
                                <p class="form-errors-message">{error_message}</p>
                                <ul>
                                    {move || {
                                        error_details()
                                            .into_iter()
                                            .map(|error| view! { <li>{error}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                            </div>
                        </Show>

                        <div class="form-field">
                            <label for="waitlist-name">"Name"</label>
                            <input
                                id="waitlist-name"
                                type="text"
                                placeholder="Ada Lovelace"
                                prop:value=name
                                on:input=move |event| set_name.set(event_target_value(&event))
                            />
                        </div>

                        <div class="form-field">
                            <label for="waitlist-email">"Email"</label>
                            <input
                                id="waitlist-email"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=email
                                on:input=move |event| set_email.set(event_target_value(&event))
                            />
                        </div>

                        <div class="form-field">
                            <label for="waitlist-app-type">"App type (optional)"</label>
                            <input
                                id="waitlist-app-type"
                                type="text"
                                placeholder="productivity, social, games..."
                                prop:value=app_type
                                on:input=move |event| set_app_type.set(event_target_value(&event))
                            />
                        </div>

                        <div class="form-field">
                            <label for="waitlist-description">"Project description (optional)"</label>
                            <textarea
                                id="waitlist-description"
                                rows="3"
                                placeholder="Tell us what you want to build"
                                prop:value=description
                                on:input=move |event| {
                                    set_description.set(event_target_value(&event))
                                }
                            ></textarea>
                        </div>

                        <button type="submit" class="form-submit" disabled=submitting>
                            {move || if submitting() { "Joining..." } else { "Join the Waitlist" }}
                        </button>
                    </form>
                }
            }
        >
            <div class="form-success" role="status">
                <h3>"You're on the list!"</h3>
                <p>{success_message}</p>
            </div>
        </Show>
    }
}

async fn submit_signup(payload: NewWaitlistSignup) -> SubmitState {
    let request = match Request::post(WAITLIST_ENDPOINT).json(&payload) {
        Ok(request) => request,
        Err(_) => return network_failure(),
    };
    let response = match request.send().await {
        Ok(response) => response,
        Err(_) => return network_failure(),
    };
    if response.ok() {
        match response.json::<WaitlistAccepted>().await {
            Ok(accepted) => SubmitState::Accepted(accepted.message),
            Err(_) => network_failure(),
        }
    } else {
        match response.json::<WaitlistRejected>().await {
            Ok(rejected) => SubmitState::Rejected {
                message: rejected.message,
                errors: rejected.errors.unwrap_or_default(),
            },
            Err(_) => network_failure(),
        }
    }
}

fn network_failure() -> SubmitState {
    SubmitState::Rejected {
        message: "Failed to join waitlist. Please try again.".to_string(),
        errors: Vec::new(),
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_drop_whitespace_only_input() {
        assert_eq!(none_if_empty(""), None);
        assert_eq!(none_if_empty("   "), None);
        assert_eq!(none_if_empty("  games  "), Some("games".to_string()));
    }
}
