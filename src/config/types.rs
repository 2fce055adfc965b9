//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::NavigationOptions;
use crate::domain::entities::MenuTree;
use crate::error::ConsoleResult;
use crate::infrastructure::client::DEFAULT_SERVICE_PREFIX;

use super::defaults::default_menu;
use super::loader::{self, ConfigWarning};

/// Route and selection settings for the operation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,

    #[serde(default = "default_key")]
    pub default_key: String,

    /// Location the interactive console opens at (defaults to `base_path`)
    #[serde(default)]
    pub start_path: Option<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            default_key: default_key(),
            start_path: None,
        }
    }
}

impl NavigationConfig {
    pub fn options(&self) -> NavigationOptions {
        NavigationOptions::new(self.base_path.clone(), self.default_key.clone())
    }

    pub fn start_path(&self) -> &str {
        self.start_path.as_deref().unwrap_or(&self.base_path)
    }
}

fn default_base_path() -> String {
    "/apis".to_string()
}

fn default_key() -> String {
    "NIMInit".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Demo client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Services the demo client answers for must start with this prefix
    #[serde(default = "default_service_prefix")]
    pub service_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_prefix: default_service_prefix(),
        }
    }
}

fn default_service_prefix() -> String {
    DEFAULT_SERVICE_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default = "default_menu")]
    pub menu: MenuTree,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            output: OutputConfig::default(),
            client: ClientConfig::default(),
            menu: default_menu(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ConsoleResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings
    pub fn load_with_warnings(path: &Path) -> ConsoleResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
