use leptos::prelude::*;
use site_core::config::SiteConfig;
use site_core::routes::Route;

use crate::browser::dom;

const BUNDLED_CONFIG: &str = include_str!("../site.json");

/// Bundled `site.json`, with `MAPS_API_KEY` from the build environment on top.
pub fn load_config() -> SiteConfig {
    let config = match SiteConfig::from_json(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("site.json unreadable, using defaults: {e}");
            SiteConfig::default()
        }
    };
    config.with_maps_key(option_env!("MAPS_API_KEY"))
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub route: RwSignal<Route>,
    pub config: StoredValue<SiteConfig>,
    /// Transient message shown in the corner toast.
    pub status_message: RwSignal<Option<String>>,
    pub mobile_menu_open: RwSignal<bool>,
    pub preloading: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            route: RwSignal::new(Route::parse(&dom::current_hash())),
            config: StoredValue::new(config),
            status_message: RwSignal::new(None),
            mobile_menu_open: RwSignal::new(false),
            preloading: RwSignal::new(true),
        }
    }

    pub fn notify(&self, message: impl Into<String>) {
        self.status_message.set(Some(message.into()));
    }
}
