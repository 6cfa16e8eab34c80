use leptos::prelude::*;

use super::SECTION_DEMO;
use crate::scroll::SectionNav;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<SectionNav>();
    view! {
        <section id="hero" class="hero">
            // Architectural line work behind the title
            <div class="hero-ornaments" aria-hidden="true">
                <div class="hero-ornament-square"></div>
                <div class="hero-ornament-diamond"></div>
                <div class="hero-ornament-rule-h"></div>
                <div class="hero-ornament-rule-v"></div>
            </div>
            <div class="hero-inner">
                <h1 class="hero-title">"Applifique"</h1>
                <p class="hero-tagline">"c'est simply... magnifique"</p>
                <div class="hero-actions">
                    <button class="hero-cta" on:click=move |_| nav.go_to(SECTION_DEMO, "demo")>
                        "Discover More"
                    </button>
                    <div class="hero-scroll-cue" aria-hidden="true">"↓"</div>
                </div>
            </div>
        </section>
    }
}
