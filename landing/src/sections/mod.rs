// Landing page sections

mod blueprint;
mod contact;
mod demo;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod nav;

pub use contact::Contact;
pub use demo::Demo;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;

use leptos::prelude::*;

use crate::scroll::Section;

/// Pager indexes for the sections that nav links and CTAs jump to.
pub const SECTION_DEMO: usize = 1;
pub const SECTION_FEATURES: usize = 2;
pub const SECTION_CONTACT: usize = 4;

/// The landing page sections, in scroll order.
pub fn landing_sections() -> Vec<Section> {
    vec![
        Section {
            label: "Welcome",
            render: || view! { <Hero /> }.into_any(),
        },
        Section {
            label: "Demo",
            render: || view! { <Demo /> }.into_any(),
        },
        Section {
            label: "Features",
            render: || view! { <Features /> }.into_any(),
        },
        Section {
            label: "How It Works",
            render: || view! { <HowItWorks /> }.into_any(),
        },
        Section {
            label: "Join the Waitlist",
            render: || view! { <Contact /> }.into_any(),
        },
        Section {
            label: "Footer",
            render: || view! { <Footer /> }.into_any(),
        },
    ]
}
