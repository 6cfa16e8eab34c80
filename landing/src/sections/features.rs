use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Why Choose "
                        <span class="accent">"Applifique?"</span>
                    </h2>
                    <p class="section-description">
                        "Stop wrestling with scattered ideas and incomplete planning. "
                        "Our AI-powered blueprint system transforms chaos into clarity."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        marker="01"
                        title="AI-Powered Planning"
                        description="Let our advanced AI analyze your app concept and generate comprehensive architectural blueprints with detailed component structures."
                    />
                    <FeatureCard
                        marker="02"
                        title="Visual Architecture"
                        description="Transform abstract ideas into clear, visual component hierarchies that your entire team can understand and build from."
                    />
                    <FeatureCard
                        marker="03"
                        title="Rapid Prototyping"
                        description="Generate detailed documentation, file structures, and implementation guides in minutes, not weeks."
                    />
                    <FeatureCard
                        marker="04"
                        title="Team Collaboration"
                        description="Share blueprints with stakeholders, get feedback, and iterate on your app structure before writing a single line of code."
                    />
                    <FeatureCard
                        marker="05"
                        title="Version Control"
                        description="Track changes to your blueprint over time, compare versions, and maintain a clear evolution of your app architecture."
                    />
                    <FeatureCard
                        marker="06"
                        title="Export Ready"
                        description="Export your blueprints as starter code, documentation, or development roadmaps in multiple formats."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    marker: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-marker">{marker}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
