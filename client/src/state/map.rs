//! Find-site catalogue and filters for the map explorer.
//!
//! The sites are static; only the map itself is drawn by the external
//! renderer, driven through [`MapCommand`]s.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use serde::Serialize;

/// Initial map centre (lat, lng) and zoom.
pub const MAP_CENTER: (f64, f64) = (34.3416, 108.9402);
pub const DEFAULT_ZOOM: u8 = 5;
/// Zoom used when focusing a single site.
pub const FOCUS_ZOOM: u8 = 12;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FindSite {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub dynasty: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub lat: f64,
    pub lng: f64,
}

pub const FIND_SITES: [FindSite; 6] = [
    FindSite {
        id: 1,
        title: "Houmuwu Ding",
        category: "Bronze",
        dynasty: "Shang",
        location: "Yinxu, Anyang, Henan",
        description: "The largest surviving ancient Chinese bronze",
        lat: 36.0671,
        lng: 114.3524,
    },
    FindSite {
        id: 2,
        title: "Four-Ram Square Zun",
        category: "Bronze",
        dynasty: "Shang",
        location: "Ningxiang, Hunan",
        description: "Late Shang bronze ritual vessel",
        lat: 28.2534,
        lng: 112.5459,
    },
    FindSite {
        id: 3,
        title: "Mawangdui Silk Banner",
        category: "Painting",
        dynasty: "Han",
        location: "Mawangdui, Changsha, Hunan",
        description: "Masterpiece of Han dynasty painting",
        lat: 28.2282,
        lng: 112.9388,
    },
    FindSite {
        id: 4,
        title: "Sancai Camel Carrying Musicians",
        category: "Ceramics",
        dynasty: "Tang",
        location: "Xi'an, Shaanxi",
        description: "Signature piece of Tang ceramic art",
        lat: 34.3416,
        lng: 108.9402,
    },
    FindSite {
        id: 5,
        title: "Along the River During the Qingming Festival",
        category: "Painting",
        dynasty: "Northern Song",
        location: "Kaifeng, Henan",
        description: "One of the ten most celebrated Chinese paintings",
        lat: 34.7971,
        lng: 114.3479,
    },
    FindSite {
        id: 6,
        title: "Jade Burial Suit Sewn with Gold Thread",
        category: "Jade",
        dynasty: "Han",
        location: "Mancheng Han Tombs, Hebei",
        description: "Finest example of a Han jade burial suit",
        lat: 38.9537,
        lng: 115.4712,
    },
];

/// `"all"` followed by each distinct site category in catalogue order.
pub fn categories() -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for site in &FIND_SITES {
        if !out.contains(&site.category) {
            out.push(site.category);
        }
    }
    out
}

pub fn site(id: u32) -> Option<&'static FindSite> {
    FIND_SITES.iter().find(|s| s.id == id)
}

/// Sites whose title or location contains `query` (case-insensitive) and
/// whose category matches, `"all"` matching everything.
pub fn filter_sites(query: &str, category: &str) -> Vec<&'static FindSite> {
    let needle = query.trim().to_lowercase();
    FIND_SITES
        .iter()
        .filter(|s| {
            needle.is_empty() || s.title.to_lowercase().contains(&needle) || s.location.to_lowercase().contains(&needle)
        })
        .filter(|s| category == ALL_CATEGORIES || s.category == category)
        .collect()
}

/// Instructions for the external map renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapCommand {
    /// Replace all markers.
    SetMarkers { sites: Vec<FindSite> },
    /// Centre on a point and open its popup.
    Focus { id: u32, lat: f64, lng: f64, zoom: u8 },
}

impl MapCommand {
    pub fn markers(sites: &[&FindSite]) -> Self {
        Self::SetMarkers { sites: sites.iter().map(|s| **s).collect() }
    }

    pub fn focus(site: &FindSite) -> Self {
        Self::Focus { id: site.id, lat: site.lat, lng: site.lng, zoom: FOCUS_ZOOM }
    }
}

/// Mount configuration handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapConfig<'a> {
    pub api_key: Option<&'a str>,
    pub center: [f64; 2],
    pub zoom: u8,
}

impl<'a> MapConfig<'a> {
    pub fn new(api_key: Option<&'a str>) -> Self {
        Self { api_key, center: [MAP_CENTER.0, MAP_CENTER.1], zoom: DEFAULT_ZOOM }
    }
}

#[derive(Clone, Debug)]
pub struct MapState {
    pub query: String,
    pub category: &'static str,
    pub selected: Option<u32>,
}

impl Default for MapState {
    fn default() -> Self {
        Self { query: String::new(), category: ALL_CATEGORIES, selected: None }
    }
}

impl MapState {
    pub fn visible(&self) -> Vec<&'static FindSite> {
        filter_sites(&self.query, self.category)
    }
}
