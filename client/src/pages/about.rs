//! Static project overview.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    ("3D artifacts", "Inspect digitised artifacts from every angle with zoom and auto-rotate."),
    ("Map exploration", "Browse excavation sites on a map and jump to where each find was made."),
    ("AI guide", "Ask about artifacts, dynasties and museums in plain language."),
];

const STACK: [(&str, &[&str]); 2] = [
    ("Front end", &["Rust + Leptos (WebAssembly)", "Desktop shell webview", "External 3D and map renderers"]),
    ("Back end", &["Rust command handlers", "SQLite catalogue", "Hosted language model for the guide"]),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <header class="about-page__hero">
                <h1>"About the Digital Artifact Museum"</h1>
                <p>"Explore, discover, pass on: bringing artifacts to life."</p>
            </header>

            <section class="about-page__section">
                <h2>"Features"</h2>
                <div class="about-page__features">
                    {FEATURES
                        .iter()
                        .map(|(title, text)| view! {
                            <div class="feature-card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about-page__section">
                <h2>"Built with"</h2>
                <div class="about-page__stack">
                    {STACK
                        .iter()
                        .map(|(side, items)| view! {
                            <div class="stack-column">
                                <h3>{*side}</h3>
                                <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
