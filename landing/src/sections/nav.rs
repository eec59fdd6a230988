use bankfront::content::nav_menu;
use bankfront::types::{MenuId, NavLink, NavMenu};
use leptos::prelude::*;

use crate::interaction::InteractionHandle;

#[component]
pub fn Nav(interaction: InteractionHandle, app_name: String) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"◆"</span>
                    <span class="nav-title">{app_name}</span>
                </a>
                <ul class="nav-menus">
                    {MenuId::ALL
                        .into_iter()
                        .filter_map(nav_menu)
                        .map(move |menu| view! { <MenuTrigger menu=menu interaction=interaction /> })
                        .collect_view()}
                </ul>
                <a href="/login" class="nav-cta">"Sign in"</a>
            </div>
        </nav>
    }
}

/// One header entry plus its dropdown. Hovering the trigger or the panel keeps
/// the menu open; leaving either starts the close debounce.
#[component]
fn MenuTrigger(menu: &'static NavMenu, interaction: InteractionHandle) -> impl IntoView {
    let id = menu.id;
    let open = Memo::new(move |_| interaction.is_open(id));

    view! {
        <li
            class=move || if open.get() { "nav-menu open" } else { "nav-menu" }
            on:mouseenter=move |_| interaction.open_menu(id)
            on:mouseleave=move |_| interaction.schedule_close_menu()
        >
            <button class="nav-trigger" id=format!("menu-trigger-{id}")>
                {id.label()}
                <span class="nav-caret">"▾"</span>
            </button>
            <Show when=move || open.get()>
                <div
                    class="nav-panel"
                    on:mouseenter=move |_| interaction.open_menu(id)
                    on:mouseleave=move |_| interaction.schedule_close_menu()
                >
                    {menu
                        .links
                        .iter()
                        .map(move |link| view! { <PanelLink link=link interaction=interaction /> })
                        .collect_view()}
                </div>
            </Show>
        </li>
    }
}

#[component]
fn PanelLink(link: &'static NavLink, interaction: InteractionHandle) -> impl IntoView {
    view! {
        <a
            href=link.href
            class="nav-panel-link"
            on:click=move |_| interaction.close_menu_now()
        >
            <span class="nav-panel-label">{link.label}</span>
            <span class="nav-panel-desc">{link.description}</span>
        </a>
    }
}
