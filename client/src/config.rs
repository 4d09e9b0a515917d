//! Application configuration resolved at build time.
//!
//! The desktop bundle has no process environment at runtime, so values are
//! baked in with `option_env!` when the WASM is compiled. Parsing goes
//! through [`AppConfig::from_lookup`] so tests can feed arbitrary maps.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_IMAGES_DIR: &str = catalog::IMAGES_DIR;
pub const DEFAULT_ADMIN_EMAIL: &str = "yi@example.com";
pub const DEFAULT_CHAT_HISTORY_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Key for the map tile provider. The map page shows a notice without it.
    pub map_api_key: Option<String>,
    pub images_dir: String,
    /// Account allowed onto the admin page.
    pub admin_email: String,
    /// Prior chat messages sent along with each assistant prompt.
    pub chat_history_window: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_api_key: None,
            images_dir: DEFAULT_IMAGES_DIR.to_owned(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_owned(),
            chat_history_window: DEFAULT_CHAT_HISTORY_WINDOW,
        }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `MUSEUM_MAP_KEY` (falls back to `VITE_AMAP_KEY`)
    /// - `MUSEUM_IMAGES_DIR`: default `/images`
    /// - `MUSEUM_ADMIN_EMAIL`: default `yi@example.com`
    /// - `MUSEUM_CHAT_WINDOW`: default 5
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "MUSEUM_MAP_KEY" => option_env!("MUSEUM_MAP_KEY"),
                "VITE_AMAP_KEY" => option_env!("VITE_AMAP_KEY"),
                "MUSEUM_IMAGES_DIR" => option_env!("MUSEUM_IMAGES_DIR"),
                "MUSEUM_ADMIN_EMAIL" => option_env!("MUSEUM_ADMIN_EMAIL"),
                "MUSEUM_CHAT_WINDOW" => option_env!("MUSEUM_CHAT_WINDOW"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let map_api_key = get("MUSEUM_MAP_KEY").or_else(|| get("VITE_AMAP_KEY"));
        let images_dir = get("MUSEUM_IMAGES_DIR")
            .unwrap_or_else(|| DEFAULT_IMAGES_DIR.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let admin_email = get("MUSEUM_ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_owned());
        let chat_history_window = get("MUSEUM_CHAT_WINDOW")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_CHAT_HISTORY_WINDOW);

        Self { map_api_key, images_dir, admin_email, chat_history_window }
    }

    /// Whether `email` belongs to the admin account. Case-insensitive.
    pub fn is_admin(&self, email: &str) -> bool {
        email.trim().eq_ignore_ascii_case(&self.admin_email)
    }
}
