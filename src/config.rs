//! App Configuration
//!
//! Read once at startup from `<meta name="todo-...">` tags in the host page.

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Which list variant to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    /// Server-side pagination, items in server order
    #[default]
    Paged,
    /// Whole collection at once, sorted on the client
    Flat,
}

impl ListMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paged" => Some(ListMode::Paged),
            "flat" => Some(ListMode::Flat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL the `/todos` paths are appended to
    pub api_base: String,
    pub page_size: u32,
    pub mode: ListMode,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            mode: ListMode::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build a config from a key lookup, keeping defaults for missing or bad values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup("todo-api-base") {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                config.api_base = base.to_string();
            }
        }
        if let Some(size) = lookup("todo-page-size").and_then(|s| s.trim().parse::<u32>().ok()) {
            if size > 0 {
                config.page_size = size;
            }
        }
        if let Some(mode) = lookup("todo-list-mode").and_then(|s| ListMode::parse(&s)) {
            config.mode = mode;
        }
        if let Some(level) = lookup("todo-log-level").and_then(|s| s.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }

    /// Read `<meta name=... content=...>` tags from the current document
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_lookup(|name| {
            let document = document.as_ref()?;
            document
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        })
    }
}
