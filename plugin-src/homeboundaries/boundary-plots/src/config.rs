//! Plugin configuration: loaded from `config.toml` in the data folder.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct PlotsConfig {
    pub plots: PlotSettings,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlotSettings {
    #[serde(default = "default_file")]
    pub file: String,
    #[serde(default = "default_tool_label")]
    pub tool_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub broadcast: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_file() -> String {
    "coordinates.json".into()
}

fn default_tool_label() -> String {
    "Plotting Axe".into()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { broadcast: true }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PlotsConfig {
    fn default() -> Self {
        Self {
            plots: PlotSettings {
                file: default_file(),
                tool_label: default_tool_label(),
            },
            notifications: NotificationConfig::default(),
            webhook: WebhookConfig::default(),
        }
    }
}

impl WebhookConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl PlotsConfig {
    /// Load config from a TOML file, writing the bundled default first if absent.
    pub fn load(path: &Path) -> Result<Self, String> {
        boundary_store::load_or_create_config(path, DEFAULT_CONFIG).map_err(|e| e.to_string())
    }
}
