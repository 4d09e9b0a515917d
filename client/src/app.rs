//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads its collaborators from context: `AppConfig`,
//! `MuseumApi`, `Session`, the durable `Storage`, and one `RwSignal` per
//! state domain. They are created once here.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::shell::AppShell;
use crate::config::AppConfig;
use crate::net::MuseumApi;
use crate::net::transport::DefaultTransport;
use crate::pages::{
    about::AboutPage, admin::AdminPage, assistant::AssistantPage, favorites::FavoritesPage, history::HistoryPage,
    home::HomePage, map::MapPage, settings::SettingsPage, viewer::ViewerPage,
};
use crate::state::{
    auth::AuthState, chat::ChatState, session::Session, settings::Settings, ui::UiState,
};
use crate::util::storage::{DefaultStorage, Storage};
use crate::util::theme;

/// Durable store handle as provided through context.
pub type SharedStorage = Arc<dyn Storage>;

/// Root application component.
///
/// Provides all shared contexts, applies the saved theme, resolves the
/// signed-in user and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let storage: SharedStorage = Arc::new(DefaultStorage::default());
    let session = Session::new(storage.clone());
    let api = MuseumApi::new(Arc::new(DefaultTransport::default()), session.clone());

    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    let settings = RwSignal::new(Settings::load(storage.as_ref()));

    // A privileged call without a token means the session is gone: drop the
    // user and ask them to sign in.
    session.set_on_unauthorized(move || {
        auth.update(|a| a.user = None);
        ui.update(|u| u.login_open = true);
    });

    theme::apply(settings.get_untracked().theme);

    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.get_current_user().await {
                Ok(user) => auth.set(AuthState { user, loading: false }),
                Err(e) => {
                    leptos::logging::warn!("current user check failed: {e}");
                    api.session().clear_token();
                    auth.set(AuthState::default());
                }
            }
        });
    }

    provide_context(config);
    provide_context(storage);
    provide_context(session);
    provide_context(api);
    provide_context(auth);
    provide_context(ui);
    provide_context(chat);
    provide_context(settings);

    view! {
        <Title text="Digital Artifact Museum"/>

        <Router>
            <AppShell>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("favorites") view=FavoritesPage/>
                    <Route path=StaticSegment("browsing-history") view=HistoryPage/>
                    <Route path=StaticSegment("3d-artifacts") view=ViewerPage/>
                    <Route path=StaticSegment("ai-assistant") view=AssistantPage/>
                    <Route path=StaticSegment("map-exploration") view=MapPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </AppShell>
        </Router>
    }
}
