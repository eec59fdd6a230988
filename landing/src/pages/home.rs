// Home page - header menus, hero carousel and highlights
use bankfront::AppConfig;
use bankfront::content::SLIDES;
use bankfront::controller::ControllerSettings;
use leptos::prelude::*;

use crate::interaction::use_interaction;
use crate::sections::{CallToAction, Features, Footer, HeroCarousel, Nav, Stats};

#[component]
pub fn HomePage(config: AppConfig) -> impl IntoView {
    let interaction = use_interaction(SLIDES.len(), ControllerSettings::from(&config));
    let app_name = config.app_name().to_string();

    let nav = interaction.map(|interaction| {
        view! { <Nav interaction=interaction app_name=app_name.clone() /> }
    });
    let hero = interaction.map(|interaction| view! { <HeroCarousel interaction=interaction /> });

    view! {
        {nav}
        <main>
            {hero}
            <Features />
            <Stats />
            <CallToAction support_phone=config.support_phone().to_string() />
        </main>
        <Footer app_name=app_name tagline=config.app_description().to_string() />
    }
}
