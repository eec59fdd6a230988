use bankfront::content::STATS;
use leptos::prelude::*;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="section stats">
            <div class="container stats-grid">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <span class="stat-value">{stat.value}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
