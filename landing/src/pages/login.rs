// Login page - client-side form state only, nothing leaves the browser
use bankfront::AppConfig;
use bankfront::login::{LoginField, LoginForm, LoginSubmission};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::debug;

#[component]
pub fn LoginPage(config: AppConfig) -> impl IntoView {
    let form = RwSignal::new(LoginForm::new());
    let auth_url = config.api_url(config.auth_api());
    let session_minutes = config.session_timeout().as_secs() / 60;
    let last_submission = RwSignal::new(None::<LoginSubmission>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = form.with_untracked(|form| form.submit());
        debug!(endpoint = %auth_url, "sign-in not sent, api not connected");
        last_submission.set(Some(submission));
    };

    view! {
        <header class="login-header">
            <a href="/" class="nav-brand">
                <span class="nav-logo">"◆"</span>
                <span class="nav-title">{config.app_name().to_string()}</span>
            </a>
        </header>
        <main class="login-main">
            <form class="login-card" on:submit=on_submit>
                <h1 class="login-title">"Sign in to online banking"</h1>

                <label class="login-label" for="username">"Username"</label>
                <input
                    id="username"
                    class="login-input"
                    type="text"
                    autocomplete="username"
                    prop:value=move || form.with(|form| form.username().to_string())
                    on:input=move |ev| {
                        form.update(|form| form.set_field(LoginField::Username, event_target_value(&ev)))
                    }
                />

                <label class="login-label" for="password">"Password"</label>
                <div class="login-password">
                    <input
                        id="password"
                        class="login-input"
                        type=move || form.with(|form| form.password_input_type())
                        autocomplete="current-password"
                        prop:value=move || form.with(|form| form.password().to_string())
                        on:input=move |ev| {
                            form.update(|form| form.set_field(LoginField::Password, event_target_value(&ev)))
                        }
                    />
                    <button
                        type="button"
                        class="login-toggle"
                        on:click=move |_| form.update(|form| form.toggle_password_visibility())
                    >
                        {move || if form.with(|form| form.show_password()) { "Hide" } else { "Show" }}
                    </button>
                </div>

                <label class="login-remember">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|form| form.remember_me())
                        on:change=move |ev| {
                            form.update(|form| form.set_remember_me(event_target_checked(&ev)))
                        }
                    />
                    " Remember me"
                </label>

                <button type="submit" class="btn btn-primary login-submit">"Sign in"</button>

                {move || {
                    last_submission
                        .get()
                        .map(|submission| {
                            view! {
                                <p class="login-status">
                                    "Sign-in request recorded for "
                                    <strong>{submission.username}</strong>
                                    ". Online banking is not connected in this preview."
                                </p>
                            }
                        })
                }}

                <p class="login-help">
                    "For your security you are signed out after " {session_minutes}
                    " minutes of inactivity."
                </p>
                <p class="login-help">
                    "Trouble signing in? Call " {config.support_phone().to_string()}
                </p>
            </form>
        </main>
    }
}
