// Meridian Bank landing page - Leptos 0.8 Edition
// Developed by the Meridian Web Team (c)2025

mod interaction;
mod logging;
mod pages;
mod sections;
mod styles;

use bankfront::AppConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{HomePage, LoginPage, NotFound};
use styles::LANDING_CSS;
use tracing::{debug, info};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.debug_logging());
    info!(
        app = config.app_name(),
        version = config.app_version(),
        environment = config.environment(),
        api = config.api_base_url(),
        request_timeout_ms = config.request_timeout().as_millis() as u64,
        analytics = config.enable_analytics() && config.google_analytics_id().is_some(),
        error_tracking = config.enable_error_tracking() && config.sentry_dsn().is_some(),
        hotjar = config.hotjar_id().is_some(),
        "starting landing page"
    );
    if config.is_development() {
        debug!(
            accounts = %config.api_url(config.accounts_api()),
            transactions = %config.api_url(config.transactions_api()),
            cards = %config.api_url(config.cards_api()),
            loans = %config.api_url(config.loans_api()),
            "api endpoints"
        );
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: AppConfig) -> impl IntoView {
    let home_config = config.clone();
    let login_config = config;

    view! {
        <style>{LANDING_CSS}</style>
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route
                    path=path!("/")
                    view=move || view! { <HomePage config=home_config.clone() /> }
                />
                <Route
                    path=path!("/login")
                    view=move || view! { <LoginPage config=login_config.clone() /> }
                />
            </Routes>
        </Router>
    }
}
