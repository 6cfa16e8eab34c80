use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="footer" class="footer">
            <div class="container">
                <div class="footer-row">
                    <div class="footer-brand">
                        <div class="footer-mark" aria-hidden="true">"A"</div>
                        <div>
                            <span class="footer-title">"Applifique"</span>
                            <p class="footer-subtitle">"Blueprint your app development"</p>
                        </div>
                    </div>
                    <div class="footer-links">
                        <a href="#" class="footer-link">"Twitter"</a>
                        <a href="#" class="footer-link">"GitHub"</a>
                        <a href="#" class="footer-link">"Discord"</a>
                        <a href="#" class="footer-link">"LinkedIn"</a>
                    </div>
                </div>
                <p class="footer-copyright">
                    "© 2024 Applifique. All rights reserved. Built with passion for developers."
                </p>
            </div>
        </footer>
    }
}
