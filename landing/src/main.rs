// Applifique landing page, Leptos 0.8 CSR

mod mailer;
mod pager;
mod scroll;
mod sections;
mod waitlist_form;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use send_wrapper::SendWrapper;

use mailer::{SCRIPT_SRC, ScriptLoader};
use scroll::{ScrollSections, SectionNav};
use sections::{Nav, landing_sections};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(SendWrapper::new(ScriptLoader::new(SCRIPT_SRC)));
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Landing />
            </Routes>
        </Router>
    }
}

#[component]
fn Landing() -> impl IntoView {
    let sections = landing_sections();
    provide_context(SectionNav::for_viewport(sections.len()));
    view! {
        <Nav />
        <main>
            <ScrollSections sections=sections />
        </main>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1 class="not-found-title">"404"</h1>
            <p class="not-found-caption">"This corner of the blueprint is still blank."</p>
            <a href="/" class="not-found-link">"Back to the landing page"</a>
        </main>
    }
}
