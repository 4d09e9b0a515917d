//! Sign-in / registration modal.
//!
//! Input is validated locally before anything is dispatched; backend
//! rejections are shown inline with the backend's own message.

use catalog::{LoginRequest, RegisterRequest};
use leptos::prelude::*;

use crate::components::shell::flash_toast;
use crate::net::MuseumApi;
use crate::state::auth::AuthState;
use crate::state::ui::{LOGIN_TOAST_MS, UiState};
use crate::util::validate::{LoginForm, RegisterForm, validate_login, validate_register};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

enum Submission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

#[component]
pub fn LoginDialog() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<MuseumApi>();

    let mode = RwSignal::new(Mode::Login);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let close = move || ui.update(|u| u.login_open = false);

    let switch_mode = move |next: Mode| {
        mode.set(next);
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let api = api.clone();
        let current = mode.get_untracked();
        let submission = match current {
            Mode::Login => validate_login(&LoginForm { email: email.get_untracked(), password: password.get_untracked() })
                .map(Submission::Login),
            Mode::Register => validate_register(&RegisterForm {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm.get_untracked(),
            })
            .map(Submission::Register),
        };
        let submission = match submission {
            Ok(submission) => submission,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = match &submission {
                Submission::Login(request) => api.login(request).await,
                Submission::Register(request) => api.register(request).await,
            };
            busy.set(false);
            match result {
                Ok(response) => {
                    auth.set(AuthState { user: Some(response.user), loading: false });
                    ui.update(|u| u.login_open = false);
                    let message = if current == Mode::Login { "Signed in" } else { "Account created" };
                    flash_toast(ui, message, LOGIN_TOAST_MS);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--login"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        close();
                    }
                }
            >
                <div class="dialog__tabs">
                    <button
                        class="dialog__tab"
                        class:dialog__tab--active=move || mode.get() == Mode::Login
                        on:click=move |_| switch_mode(Mode::Login)
                    >
                        "Sign in"
                    </button>
                    <button
                        class="dialog__tab"
                        class:dialog__tab--active=move || mode.get() == Mode::Register
                        on:click=move |_| switch_mode(Mode::Register)
                    >
                        "Register"
                    </button>
                </div>
                <form class="dialog__form" on:submit=on_submit>
                    <Show when=move || mode.get() == Mode::Register>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="dialog__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == Mode::Register>
                        <input
                            class="dialog__input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || match (busy.get(), mode.get()) {
                                (true, _) => "Please wait...",
                                (false, Mode::Login) => "Sign in",
                                (false, Mode::Register) => "Create account",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
