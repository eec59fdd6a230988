use bankfront::content::FOOTER_COLUMNS;
use leptos::prelude::*;

#[component]
pub fn Footer(app_name: String, tagline: String) -> impl IntoView {
    let copyright = format!("© 2025 {app_name}. Member FDIC. Equal Housing Lender.");
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-about">
                        <div class="footer-brand">
                            <span class="footer-logo">"◆"</span>
                            <span class="footer-title">{app_name}</span>
                        </div>
                        <p class="footer-tagline">{tagline}</p>
                    </div>
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="footer-column">
                                    <h4 class="footer-heading">{column.heading}</h4>
                                    {column
                                        .links
                                        .iter()
                                        .map(|link| {
                                            view! { <a href=link.href class="footer-link">{link.label}</a> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
