use crate::domain::a001_schema::ui::workspace::SchemaView;
use crate::shared::tab_host::{ConfigError, TabDescriptor, ViewRegistry};
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown values fall back to `Debug`
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// One `[[tabs]]` entry. Name and view are required, the rest is decoration.
#[derive(Debug, Deserialize, Clone)]
pub struct TabConfig {
    pub name: Option<String>,
    pub view: Option<SchemaView>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tooltip: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "/api"

[logging]
level = "debug"

[[tabs]]
name = "Entities"
view = "entities"
icon = "list"
tooltip = "Записи схемы"

[[tabs]]
name = "Edit"
view = "edit"
icon = "edit"
tooltip = "Редактировать схему"

[[tabs]]
name = "Add"
view = "add"
icon = "add"
tooltip = "Добавить запись"

[[tabs]]
name = "Permissions"
view = "permissions"
icon = "lock"
tooltip = "Права доступа"

[[tabs]]
name = "History"
view = "history"
icon = "history"
tooltip = "История изменений"
"#;

impl AppConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("failed to parse application config")
    }

    /// Builds the workspace tab registry from `[[tabs]]`
    pub fn registry(&self) -> Result<ViewRegistry<SchemaView>, ConfigError> {
        let tabs = self
            .tabs
            .iter()
            .enumerate()
            .map(|(position, tab)| {
                let name = tab
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or(ConfigError::MissingName { position })?;
                let view = tab.view.ok_or_else(|| ConfigError::MissingView {
                    name: name.to_string(),
                })?;
                Ok(TabDescriptor::new(name, view, &tab.icon, &tab.tooltip))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        ViewRegistry::new(tabs)
    }
}

/// Load the embedded application configuration
pub fn load_config() -> anyhow::Result<AppConfig> {
    AppConfig::from_toml(DEFAULT_CONFIG)
}
