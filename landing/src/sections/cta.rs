use leptos::prelude::*;

#[component]
pub fn CallToAction(support_phone: String) -> impl IntoView {
    let tel = format!("tel:{}", support_phone.replace('-', ""));
    view! {
        <section class="section cta">
            <div class="container cta-inner">
                <h2 class="cta-title">"Ready to switch banks?"</h2>
                <p class="cta-description">
                    "Open an account online in about five minutes. We move your direct deposits for you."
                </p>
                <div class="cta-actions">
                    <a href="/login" class="btn btn-primary">"Get started"</a>
                    <a href=tel class="btn btn-secondary">"Call " {support_phone}</a>
                </div>
            </div>
        </section>
    }
}
