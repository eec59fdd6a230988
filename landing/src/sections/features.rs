use bankfront::content::FEATURES;
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="container">
                <div class="section-header">
                    <span class="section-label">"Why Meridian"</span>
                    <h2 class="section-title">"Banking built around your day"</h2>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-icon">{feature.icon}</div>
                                    <h3 class="feature-title">{feature.title}</h3>
                                    <p class="feature-description">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
