//! Admin console: create, edit and delete catalogue artifacts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the configured admin account sees the console. The backend enforces
//! the same rule, so every write failure is reported with a message naming
//! that account.

use catalog::{ArtifactWithFavorite, SearchParams};
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::MuseumApi;
use crate::state::admin::{
    AdminState, Field, LOAD_FAILED, Lookup, delete_failed_message, forbidden_message, save_failed_message,
};
use crate::state::auth::AuthState;
use crate::util::dom;
use crate::util::validate::validate_artifact_input;

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = expect_context::<MuseumApi>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AppConfig>();

    let artifacts = RwSignal::new(Vec::<ArtifactWithFavorite>::new());
    let loading = RwSignal::new(false);
    let admin = RwSignal::new(AdminState::default());
    let lookup = RwSignal::new(String::new());

    let is_admin = {
        let config = config.clone();
        move || auth.with(|a| a.email().is_some_and(|email| config.is_admin(email)))
    };

    let reload = {
        let api = api.clone();
        move || {
            loading.set(true);
            admin.update(|s| s.error = None);
            let api = api.clone();
            let wanted = Lookup::parse(&lookup.get_untracked());
            leptos::task::spawn_local(async move {
                let result: Result<Vec<ArtifactWithFavorite>, _> = match wanted {
                    Lookup::All => api.get_artifacts(&SearchParams::default()).await,
                    Lookup::ById(id) => api.get_artifact_by_id(id).await.map(|found| found.into_iter().collect()),
                    Lookup::Keyword(query) => api.search_artifacts(&query).await,
                };
                match result {
                    Ok(list) => artifacts.set(list),
                    Err(e) => {
                        leptos::logging::warn!("admin list failed: {e}");
                        admin.update(|s| s.error = Some(LOAD_FAILED.to_owned()));
                    }
                }
                loading.set(false);
            });
        }
    };

    {
        let reload = reload.clone();
        reload();
    }

    let on_save = {
        let api = api.clone();
        let reload = reload.clone();
        let admin_email = config.admin_email.clone();
        move |_| {
            let payload = admin.with_untracked(AdminState::payload);
            if let Err(e) = validate_artifact_input(&payload) {
                admin.update(|s| s.error = Some(e.to_string()));
                return;
            }
            let editing = admin.with_untracked(|s| s.editing);
            admin.update(|s| {
                s.busy = true;
                s.error = None;
            });
            let api = api.clone();
            let reload = reload.clone();
            let admin_email = admin_email.clone();
            leptos::task::spawn_local(async move {
                let result = if editing {
                    api.update_artifact(&payload).await
                } else {
                    api.create_artifact(&payload).await
                };
                admin.update(|s| s.busy = false);
                match result {
                    Ok(_) => {
                        admin.update(AdminState::reset);
                        reload();
                    }
                    Err(e) => {
                        leptos::logging::warn!("artifact save failed: {e}");
                        admin.update(|s| s.error = Some(save_failed_message(&admin_email)));
                    }
                }
            });
        }
    };

    let on_delete = {
        let reload = reload.clone();
        let admin_email = config.admin_email.clone();
        move |id: i64| {
            if !dom::confirm("Delete this artifact?") {
                return;
            }
            let api = api.clone();
            let reload = reload.clone();
            let admin_email = admin_email.clone();
            leptos::task::spawn_local(async move {
                match api.delete_artifact(id).await {
                    Ok(_) => {
                        admin.update(|s| s.forget(id));
                        reload();
                    }
                    Err(e) => {
                        leptos::logging::warn!("artifact delete failed: {e}");
                        admin.update(|s| s.error = Some(delete_failed_message(&admin_email)));
                    }
                }
            });
        }
    };

    let forbidden = forbidden_message(&config.admin_email);

    view! {
        <Show
            when=is_admin
            fallback=move || view! { <div class="page-error page-error--forbidden">{forbidden.clone()}</div> }
        >
            <div class="admin-page">
                <header class="admin-page__header">
                    <div>
                        <h1 class="page-title">"Admin Console"</h1>
                        <p class="admin-page__subtitle">"Add, edit, delete and look up artifact cards"</p>
                    </div>
                    <form class="admin-page__lookup" on:submit={
                        let reload = reload.clone();
                        move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            reload();
                        }
                    }>
                        <input
                            class="admin-page__lookup-input"
                            type="search"
                            placeholder="ID or keyword"
                            prop:value=move || lookup.get()
                            on:input=move |ev| lookup.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit" disabled=move || loading.get()>
                            "Refresh"
                        </button>
                    </form>
                </header>

                <Show when=move || admin.with(|s| s.error.is_some())>
                    <p class="page-error">{move || admin.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>

                <section class="admin-form">
                    <h2>{move || if admin.with(|s| s.editing) { "Edit artifact" } else { "New artifact" }}</h2>
                    <div class="admin-form__fields">
                        {Field::ALL
                            .into_iter()
                            .map(|field| {
                                let value = move || admin.with(|s| field.get(&s.form).to_owned());
                                let input = if field.multiline() {
                                    view! {
                                        <textarea
                                            class="admin-form__input"
                                            rows="3"
                                            prop:value=value
                                            on:input=move |ev| {
                                                let text = event_target_value(&ev);
                                                admin.update(|s| field.set(&mut s.form, text));
                                            }
                                        ></textarea>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <input
                                            class="admin-form__input"
                                            type="text"
                                            prop:value=value
                                            on:input=move |ev| {
                                                let text = event_target_value(&ev);
                                                admin.update(|s| field.set(&mut s.form, text));
                                            }
                                        />
                                    }
                                        .into_any()
                                };
                                view! {
                                    <label class="admin-form__field" class:admin-form__field--wide={field.multiline()}>
                                        <span>{field.label()}</span>
                                        {input}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="admin-form__actions">
                        <button class="btn" on:click=move |_| admin.update(AdminState::reset)>
                            "Clear"
                        </button>
                        <button class="btn btn--primary" disabled=move || admin.with(|s| s.busy) on:click=on_save.clone()>
                            {move || if admin.with(|s| s.editing) { "Save changes" } else { "Create" }}
                        </button>
                    </div>
                </section>

                <section class="admin-list">
                    <h2>{move || format!("Artifacts ({})", artifacts.with(Vec::len))}</h2>
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Title"</th>
                                <th>"Dynasty"</th>
                                <th>"Category"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let on_delete = on_delete.clone();
                                move || {
                                    artifacts
                                        .get()
                                        .into_iter()
                                        .map(|item| {
                                            let id = item.id();
                                            let on_delete = on_delete.clone();
                                            let title = item.title.clone();
                                            let dynasty = item.dynasty.clone();
                                            let category = item.category.clone();
                                            view! {
                                                <tr>
                                                    <td>{id}</td>
                                                    <td>{title}</td>
                                                    <td>{dynasty}</td>
                                                    <td>{category}</td>
                                                    <td class="admin-table__actions">
                                                        <button class="btn btn--small" on:click=move |_| admin.update(|s| s.edit(&item))>
                                                            "Edit"
                                                        </button>
                                                        <button class="btn btn--small btn--danger" on:click=move |_| on_delete(id)>
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }
                            }
                        </tbody>
                    </table>
                </section>
            </div>
        </Show>
    }
}
