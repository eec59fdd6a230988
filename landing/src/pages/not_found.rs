use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <div class="container">
                <h1 class="page-title">"Page not found"</h1>
                <p class="page-description">"The page you are looking for has moved or never existed."</p>
                <a href="/" class="btn btn-primary">"Back to home"</a>
            </div>
        </main>
    }
}
