//! Account profile editor opened from the header user name.

use leptos::prelude::*;

use crate::components::shell::flash_toast;
use crate::net::MuseumApi;
use crate::state::auth::AuthState;
use crate::state::ui::{PROFILE_TOAST_MS, UiState};
use crate::util::validate::{ProfileForm, validate_profile};

#[component]
pub fn ProfileDialog() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<MuseumApi>();

    let initial = auth.with_untracked(|a| a.user.as_ref().map(ProfileForm::from_user)).unwrap_or_default();
    let username = RwSignal::new(initial.username);
    let email = RwSignal::new(initial.email);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let close = move || ui.update(|u| u.profile_open = false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(current) = auth.with_untracked(|a| a.user.clone()) else {
            close();
            return;
        };
        let form = ProfileForm { username: username.get_untracked(), email: email.get_untracked() };
        let update = match validate_profile(&form, &current) {
            Ok(update) => update,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        busy.set(true);
        error.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.update_profile(&update).await;
            busy.set(false);
            match result {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user));
                    ui.update(|u| u.profile_open = false);
                    flash_toast(ui, "Profile updated", PROFILE_TOAST_MS);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--profile"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        close();
                    }
                }
            >
                <h2 class="dialog__title">"Profile"</h2>
                <form class="dialog__form" on:submit=on_submit>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
