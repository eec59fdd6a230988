use bankfront::content::SLIDES;
use bankfront::types::Slide;
use leptos::prelude::*;

use crate::interaction::InteractionHandle;

#[component]
pub fn HeroCarousel(interaction: InteractionHandle) -> impl IntoView {
    let current = Memo::new(move |_| interaction.current_index());
    let accent = move || SLIDES.get(current.get()).map(|slide| slide.accent);
    let progress_width = move || format!("{:.2}%", interaction.progress() * 100.0);

    view! {
        <section class="hero" aria-roledescription="carousel">
            <div class="hero-track">
                {SLIDES
                    .iter()
                    .enumerate()
                    .map(move |(index, slide)| {
                        view! { <SlidePanel slide=slide active=Signal::derive(move || current.get() == index) /> }
                    })
                    .collect_view()}
            </div>

            <button class="carousel-arrow prev" on:click=move |_| interaction.retreat()>
                "‹"
            </button>
            <button class="carousel-arrow next" on:click=move |_| interaction.advance()>
                "›"
            </button>

            <div class="carousel-dots">
                {(0..interaction.slide_count())
                    .map(move |index| {
                        let class = move || match accent() {
                            Some(accent) => accent.indicator_class(current.get() == index),
                            None => "carousel-dot".to_string(),
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| interaction.go_to(index)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="carousel-progress" aria-hidden="true">
                <div class="carousel-progress-fill" style:width=progress_width></div>
            </div>
        </section>
    }
}

#[component]
fn SlidePanel(slide: &'static Slide, active: Signal<bool>) -> impl IntoView {
    view! {
        <article class=move || {
            if active.get() {
                format!("hero-slide {} active", slide.bg_color)
            } else {
                format!("hero-slide {}", slide.bg_color)
            }
        }>
            <div class="container hero-grid">
                <div class="hero-content">
                    <div class="hero-badge">{slide.subtitle}</div>
                    <h1 class="hero-title">{slide.title}</h1>
                    <p class="hero-description">{slide.description}</p>
                    <div class="hero-actions">
                        <a href=slide.cta_href class=slide.accent.button_class()>
                            {slide.cta_label}
                        </a>
                    </div>
                </div>
                <div class="hero-image" aria-hidden="true">{slide.image}</div>
            </div>
        </article>
    }
}
