//! Static cards interleaved into the gallery grid.

use catalog::FunctionCard;
use leptos::prelude::*;

const TRENDING: [&str; 5] = [
    "Bronze appreciation",
    "Tang dynasty exhibition",
    "New archaeological finds",
    "Digital museums",
    "Conservation technology",
];

const TOPICS: [&str; 8] = ["Bronze", "Ceramics", "Painting", "Jade", "Gold & Silver", "Buddhist Statues", "Stone Carving", "Lacquer"];

const GUIDE: [(&str, &str); 4] = [
    ("Opening hours", "9:00-17:00"),
    ("Suggested visit", "2-3 hours"),
    ("Best route", "Chronological"),
    ("Popular hall", "Bronze Hall"),
];

const NEWS: [(&str, &str); 4] = [
    ("New exhibition: Silk Road treasures", "2 hours ago"),
    ("Han tomb excavation yields new finds", "1 day ago"),
    ("Evening opening hours announced", "2 days ago"),
    ("Restoration results on display", "3 days ago"),
];

#[component]
pub fn FunctionCardView(card: FunctionCard) -> impl IntoView {
    let body = match card {
        FunctionCard::Trending => view! {
            <h3 class="function-card__title">"Trending"</h3>
            <ol class="function-card__list">
                {TRENDING.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ol>
        }
        .into_any(),
        FunctionCard::Topics => view! {
            <h3 class="function-card__title">"Hot Topics"</h3>
            <div class="function-card__tags">
                {TOPICS.iter().map(|topic| view! { <span class="tag">{format!("#{topic}")}</span> }).collect_view()}
            </div>
        }
        .into_any(),
        FunctionCard::Guide => view! {
            <h3 class="function-card__title">"Visitor Guide"</h3>
            <dl class="function-card__facts">
                {GUIDE
                    .iter()
                    .map(|(label, value)| view! {
                        <dt>{*label}</dt>
                        <dd>{*value}</dd>
                    })
                    .collect_view()}
            </dl>
        }
        .into_any(),
        FunctionCard::News => view! {
            <h3 class="function-card__title">"Latest News"</h3>
            <ul class="function-card__list">
                {NEWS
                    .iter()
                    .map(|(title, when)| view! {
                        <li>
                            <span>{*title}</span>
                            <small class="function-card__time">{*when}</small>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! { <section class=format!("function-card function-card--{}", card.key())>{body}</section> }
}
