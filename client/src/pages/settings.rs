//! Preferences: theme, toggles, storage usage, backup and reset.
//!
//! ERROR HANDLING
//! ==============
//! Import, export and reset outcomes are reported in a status line on the
//! page; nothing here is fatal.

use leptos::prelude::*;

use crate::app::SharedStorage;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::state::settings::{EXPORT_FILENAME, Settings, Toggle, format_usage, reset_app_data, storage_usage};
use crate::util::dom;
use crate::util::theme::{self, Theme};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<Settings>>();
    let storage = expect_context::<SharedStorage>();
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let status = RwSignal::new(None::<String>);
    // Bumped after every write so the usage figure recomputes.
    let revision = RwSignal::new(0_u32);

    let usage = {
        let storage = storage.clone();
        move || {
            revision.track();
            format_usage(storage_usage(&*storage))
        }
    };

    let set_theme = {
        let storage = storage.clone();
        move |next: Theme| {
            settings.update(|s| s.set_theme(next, &*storage));
            theme::apply(next);
            revision.update(|r| *r += 1);
        }
    };

    let set_toggle = {
        let storage = storage.clone();
        move |toggle: Toggle, value: bool| {
            settings.update(|s| s.set(toggle, value, &*storage));
            revision.update(|r| *r += 1);
        }
    };

    let on_export = move |_| {
        let outcome = settings
            .get_untracked()
            .export_json()
            .map_err(|e| e.to_string())
            .and_then(|json| dom::download_json(EXPORT_FILENAME, &json));
        match outcome {
            Ok(()) => status.set(Some("Settings exported".to_owned())),
            Err(message) => {
                leptos::logging::warn!("settings export failed: {message}");
                status.set(Some(format!("Export failed: {message}")));
            }
        }
    };

    let on_import = {
        let storage = storage.clone();
        move |ev: leptos::ev::Event| {
            let storage = storage.clone();
            leptos::task::spawn_local(async move {
                let text = match dom::read_selected_file(&ev).await {
                    Ok(Some(text)) => text,
                    Ok(None) => return,
                    Err(message) => {
                        status.set(Some(format!("Import failed: {message}")));
                        return;
                    }
                };
                match settings.get_untracked().merge_json(&text) {
                    Ok(merged) => {
                        merged.save(&*storage);
                        settings.set(merged);
                        theme::apply(merged.theme);
                        revision.update(|r| *r += 1);
                        status.set(Some("Settings imported".to_owned()));
                    }
                    Err(e) => {
                        leptos::logging::warn!("settings import failed: {e}");
                        status.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    let on_reset = move |_| {
        if !dom::confirm("Reset all app data? This signs you out and restores default settings.") {
            return;
        }
        let defaults = reset_app_data(&*storage, &session);
        settings.set(defaults);
        auth.update(|a| a.user = None);
        theme::apply(defaults.theme);
        revision.update(|r| *r += 1);
        status.set(Some("App data reset".to_owned()));
    };

    view! {
        <div class="settings-page">
            <h1 class="page-title">"Settings"</h1>

            <section class="settings-section">
                <h2>"Appearance"</h2>
                <div class="settings-section__choices">
                    {Theme::ALL
                        .into_iter()
                        .map(|option| {
                            let set_theme = set_theme.clone();
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || settings.with(|s| s.theme == option)
                                    on:click=move |_| set_theme(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="settings-section">
                <h2>"Preferences"</h2>
                {Toggle::ALL
                    .into_iter()
                    .map(|toggle| {
                        let set_toggle = set_toggle.clone();
                        view! {
                            <label class="settings-toggle">
                                <div>
                                    <span class="settings-toggle__label">{toggle.label()}</span>
                                    <p class="settings-toggle__description">{toggle.description()}</p>
                                </div>
                                <input
                                    type="checkbox"
                                    prop:checked=move || settings.with(|s| s.get(toggle))
                                    on:change=move |ev| set_toggle(toggle, event_target_checked(&ev))
                                />
                            </label>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="settings-section">
                <h2>"Data"</h2>
                <p class="settings-section__usage">"Local storage used: " {usage}</p>
                <div class="settings-section__actions">
                    <button class="btn" on:click=on_export>
                        "Export settings"
                    </button>
                    <label class="btn">
                        "Import settings"
                        <input class="visually-hidden" type="file" accept="application/json,.json" on:change=on_import/>
                    </label>
                    <button class="btn btn--danger" on:click=on_reset>
                        "Reset app data"
                    </button>
                </div>
                <Show when=move || status.get().is_some()>
                    <p class="settings-section__status">{move || status.get().unwrap_or_default()}</p>
                </Show>
            </section>
        </div>
    }
}
