use leptos::prelude::*;

use super::{SECTION_CONTACT, SECTION_DEMO, SECTION_FEATURES};
use crate::scroll::SectionNav;

#[component]
pub fn Nav() -> impl IntoView {
    let nav = expect_context::<SectionNav>();
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="nav-brand">
                    <div class="nav-mark" aria-hidden="true">"A"</div>
                    <span class="nav-title">"Applifique"</span>
                </div>
                <div class="nav-links">
                    <button
                        class="nav-link"
                        on:click=move |_| nav.go_to(SECTION_FEATURES, "features")
                    >
                        "Features"
                    </button>
                    <button class="nav-link" on:click=move |_| nav.go_to(SECTION_DEMO, "demo")>
                        "Demo"
                    </button>
                    <button
                        class="nav-link"
                        on:click=move |_| nav.go_to(SECTION_CONTACT, "contact")
                    >
                        "Contact"
                    </button>
                    <button class="nav-cta" on:click=move |_| nav.go_to(SECTION_CONTACT, "contact")>
                        "Join Waitlist"
                    </button>
                </div>
            </div>
        </nav>
    }
}
