use leptos::prelude::*;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "How "
                        <span class="accent">"Applifique"</span>
                        " Works"
                    </h2>
                    <p class="section-description">
                        "From concept to blueprint in three simple steps. Our AI-powered "
                        "process turns your app idea into a structured development plan."
                    </p>
                </div>
                <div class="steps">
                    <div class="steps-connector" aria-hidden="true"></div>
                    <StepCard
                        number="1"
                        title="Describe Your App"
                        description="Simply tell our AI what you want to build. Describe features, target users, and your vision. No technical jargon required."
                    />
                    <StepCard
                        number="2"
                        title="AI Generates Blueprint"
                        description="Our advanced AI analyzes your requirements and creates a comprehensive blueprint with file structure, documentation, and implementation guides."
                    />
                    <StepCard
                        number="3"
                        title="Start Building"
                        description="Export your blueprint as starter code, documentation, or project roadmap. Begin development with confidence and clarity."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="step">
            <div class="step-badge">{number}</div>
            <h3 class="step-title">{title}</h3>
            <p class="step-description">{description}</p>
        </div>
    }
}
