//! Application chrome: sidebar navigation, header, toast and account dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every routed page. The header search box writes
//! `UiState::search_query`, which the home page watches to refetch.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::login_dialog::LoginDialog;
use crate::components::profile_dialog::ProfileDialog;
use crate::config::AppConfig;
use crate::net::MuseumApi;
use crate::state::auth::AuthState;
use crate::state::ui::{LOGOUT_TOAST_MS, UiState};

/// Show `message` in the toast banner and hide it after `duration_ms`.
///
/// A newer toast is never hidden by an older timer.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn flash_toast(ui: RwSignal<UiState>, message: impl Into<String>, duration_ms: u32) {
    let Some(seq) = ui.try_update(|u| u.show_toast(message)) else {
        return;
    };

    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(duration_ms, move || ui.update(|u| u.hide_toast(seq))).forget();
}

/// Page frame shared by all routes.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="app-shell" class:app-shell--collapsed=move || ui.with(|u| u.sidebar_collapsed)>
            <Sidebar/>
            <div class="app-shell__main">
                <Header/>
                <main class="app-shell__content">{children()}</main>
            </div>
            <ToastBanner/>
            <Show when=move || ui.with(|u| u.login_open)>
                <LoginDialog/>
            </Show>
            <Show when=move || ui.with(|u| u.profile_open)>
                <ProfileDialog/>
            </Show>
        </div>
    }
}

const NAV_LINKS: [(&str, &str); 8] = [
    ("/", "Home"),
    ("/favorites", "Favorites"),
    ("/browsing-history", "History"),
    ("/3d-artifacts", "3D Artifacts"),
    ("/ai-assistant", "AI Guide"),
    ("/map-exploration", "Map"),
    ("/settings", "Settings"),
    ("/about", "About"),
];

#[component]
fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AppConfig>();

    let is_admin = move || auth.with(|a| a.email().is_some_and(|email| config.is_admin(email)));

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"🏛"</span>
                <Show when=move || !ui.with(|u| u.sidebar_collapsed)>
                    <span class="sidebar__title">"Digital Museum"</span>
                </Show>
            </div>
            {NAV_LINKS
                .into_iter()
                .map(|(href, label)| {
                    view! {
                        <A href=href attr:class="sidebar__link">
                            {label}
                        </A>
                    }
                })
                .collect_view()}
            <Show when=is_admin>
                <A href="/admin" attr:class="sidebar__link sidebar__link--admin">
                    "Admin"
                </A>
            </Show>
            <button
                class="sidebar__collapse"
                title="Toggle sidebar"
                on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
            >
                {move || if ui.with(|u| u.sidebar_collapsed) { "»" } else { "«" }}
            </button>
        </nav>
    }
}

#[component]
fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<MuseumApi>();

    let on_logout = move |_| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.logout().await {
                Ok(()) => {
                    auth.update(|a| a.user = None);
                    ui.update(|u| u.profile_open = false);
                    flash_toast(ui, "Signed out", LOGOUT_TOAST_MS);
                }
                Err(e) => {
                    leptos::logging::warn!("logout failed: {e}");
                    flash_toast(ui, format!("Sign out failed: {e}"), LOGOUT_TOAST_MS);
                }
            }
        });
    };

    view! {
        <header class="header">
            <input
                class="header__search"
                type="search"
                placeholder="Search artifacts, dynasties, categories..."
                prop:value=move || ui.with(|u| u.search_query.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ui.update(|u| u.search_query = value);
                }
            />
            <div class="header__account">
                {move || {
                    if auth.with(|a| a.loading) {
                        return view! { <span class="header__pending">"..."</span> }.into_any();
                    }
                    match auth.with(|a| a.username().map(str::to_owned)) {
                        Some(name) => {
                            let on_logout = on_logout.clone();
                            view! {
                                <button
                                    class="header__user"
                                    title="Edit profile"
                                    on:click=move |_| ui.update(|u| u.profile_open = true)
                                >
                                    {name}
                                </button>
                                <button class="btn" on:click=on_logout>
                                    "Sign out"
                                </button>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.login_open = true)>
                                    "Sign in"
                                </button>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </header>
    }
}

#[component]
fn ToastBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.with(|u| u.toast.as_ref().map(|t| t.message.clone()))
            .map(|message| view! { <div class="toast" role="status">{message}</div> })
    }
}
