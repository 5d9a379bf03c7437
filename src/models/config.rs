//! UI settings loaded from configuration files and the environment.

use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

use crate::pagination::PageWindow;

/// Element id the portal attaches flyouts to when nothing else is configured.
pub const DEFAULT_PORTAL_ROOT_ID: &str = "portal-root";
/// Client list page size when nothing else is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
/// Page links shown at each end of the page strip.
pub const DEFAULT_PAGE_LINKS_EDGE: usize = 2;
/// Page links shown on each side of the current page.
pub const DEFAULT_PAGE_LINKS_AROUND: usize = 2;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings shared by the client pages.
pub struct UiConfig {
    pub portal_root_id: String,
    pub items_per_page: usize,
    pub page_links_edge: usize,
    pub page_links_around: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            portal_root_id: DEFAULT_PORTAL_ROOT_ID.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page_links_edge: DEFAULT_PAGE_LINKS_EDGE,
            page_links_around: DEFAULT_PAGE_LINKS_AROUND,
        }
    }
}

impl UiConfig {
    /// Shape of the page strip under the client list.
    pub fn page_window(&self) -> PageWindow {
        PageWindow {
            edge: self.page_links_edge,
            around: self.page_links_around,
        }
    }

    /// Loads `./config` using the profile named by `APP_ENV` (`local` if unset).
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());
        Self::load_from(Path::new("config"), &app_env)
    }

    /// Loads `default` and `{app_env}` from `dir`, then `APP_*` variables.
    pub fn load_from(dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(dir, app_env, None)
    }

    /// Like [`UiConfig::load_from`], reading variables from `vars` instead of
    /// the process environment when given.
    pub fn load_with_env(
        dir: &Path,
        app_env: &str,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("portal_root_id", DEFAULT_PORTAL_ROOT_ID)?
            .set_default("items_per_page", DEFAULT_ITEMS_PER_PAGE as i64)?
            .set_default("page_links_edge", DEFAULT_PAGE_LINKS_EDGE as i64)?
            .set_default("page_links_around", DEFAULT_PAGE_LINKS_AROUND as i64)?
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(app_env).to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let ui_config = settings.try_deserialize::<Self>()?;
        log::info!(
            "UI config loaded: portal root #{}, {} items per page",
            ui_config.portal_root_id,
            ui_config.items_per_page
        );
        Ok(ui_config)
    }
}
