use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8085";
pub const DEFAULT_PAGE_SIZE: usize = 8;
pub const DEFAULT_MAX_VISIBLE_BUTTONS: usize = 10;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub views: ViewSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
}

/// Pagination settings applied to every list view of a session.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub page_size: usize,
    pub max_visible_buttons: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_buttons: DEFAULT_MAX_VISIBLE_BUTTONS,
        }
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(Config::builder()
        .set_default("backend.base_url", DEFAULT_BASE_URL)?
        .set_default("views.page_size", DEFAULT_PAGE_SIZE as i64)?
        .set_default("views.max_visible_buttons", DEFAULT_MAX_VISIBLE_BUTTONS as i64)?)
}

/// Defaults, then `config/maintenance.*` if present, then `MAINTENANCE__*` env vars.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(File::with_name("config/maintenance").required(false))
        .add_source(Environment::with_prefix("MAINTENANCE").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Defaults overlaid with an inline TOML document.
pub fn load_config_from_str(toml: &str) -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}
