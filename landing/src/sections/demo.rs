use leptos::prelude::*;

use super::blueprint::Blueprint;

#[component]
pub fn Demo() -> impl IntoView {
    view! {
        <section id="demo" class="demo">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Architecture in Motion"</h2>
                    <div class="section-rule"></div>
                    <p class="section-description">
                        "Experience the precision of automated blueprint generation "
                        "through intelligent architectural planning."
                    </p>
                </div>
                <div class="demo-panel">
                    <div class="demo-panel-header">
                        <h3 class="demo-panel-title">"Application Architecture"</h3>
                        <p class="demo-panel-caption">
                            "Watch as the Applifique blueprint takes shape through intelligent component mapping"
                        </p>
                    </div>
                    <Blueprint />
                </div>
            </div>
        </section>
    }
}
