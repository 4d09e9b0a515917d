//! Browsing-history filtering.
//!
//! The backend returns the full log newest first; search and time range are
//! applied client-side over that list.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use catalog::HistoryItem;

use crate::util::time::parse_rfc3339_ms;

const DAY_MS: i64 = 86_400_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl TimeRange {
    pub const ALL: [Self; 4] = [Self::All, Self::Today, Self::Week, Self::Month];

    /// Look-back window; `None` means unbounded.
    pub fn window_ms(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Today => Some(DAY_MS),
            Self::Week => Some(7 * DAY_MS),
            Self::Month => Some(30 * DAY_MS),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All time",
            Self::Today => "Today",
            Self::Week => "Past week",
            Self::Month => "Past month",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|r| r.as_str() == raw).unwrap_or_default()
    }
}

/// Case-insensitive match on title, dynasty or category.
pub fn matches_search(item: &HistoryItem, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let artifact = &item.artifact;
    [&artifact.title, &artifact.dynasty, &artifact.category]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Whether `viewed_at` falls strictly inside the window ending at `now_ms`.
/// Unparseable timestamps only pass the unbounded range.
pub fn within_range(viewed_at: &str, range: TimeRange, now_ms: i64) -> bool {
    let Some(window) = range.window_ms() else {
        return true;
    };
    parse_rfc3339_ms(viewed_at).is_some_and(|viewed| viewed > now_ms - window)
}

pub fn filter_history<'a>(items: &'a [HistoryItem], search: &str, range: TimeRange, now_ms: i64) -> Vec<&'a HistoryItem> {
    items
        .iter()
        .filter(|item| matches_search(item, search) && within_range(&item.viewed_at, range, now_ms))
        .collect()
}
