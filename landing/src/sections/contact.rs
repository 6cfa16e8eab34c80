use leptos::prelude::*;

use crate::mailer::MailerEmbed;
use crate::waitlist_form::WaitlistForm;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="contact-panel">
                    <div class="contact-content">
                        <h2 class="section-title">"Join the Architecture"</h2>
                        <div class="section-rule"></div>
                        <p class="section-description">
                            "Be among the first to experience precision-engineered development planning."
                        </p>
                        <ul class="contact-benefits">
                            <li>"Early access to all premium features"</li>
                            <li>"Direct feedback channel to our development team"</li>
                            <li>"Lifetime discount on future premium plans"</li>
                        </ul>
                        <WaitlistForm />
                    </div>
                    <div class="contact-newsletter">
                        <h3 class="contact-newsletter-title">"Prefer Email Updates?"</h3>
                        <p class="contact-newsletter-caption">
                            "Progress notes and early previews, straight from the drawing board."
                        </p>
                        <MailerEmbed />
                        <p class="contact-privacy">
                            "Confidential and secure. No unsolicited communications."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
