//! Configuration module for apiconsole
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APICONSOLE_*)
//! 3. Project config (./apiconsole.toml)
//! 4. User config (<config dir>/apiconsole/config.toml)
//! 5. Built-in defaults (lowest priority)

mod defaults;
mod loader;
mod types;

pub use defaults::default_menu;
pub use loader::{
    load, load_with_warnings, resolve_config_path, with_env_overrides, ConfigWarning,
    LoadedConfig, WarningKind, CONFIG_ENV, PROJECT_CONFIG_FILE,
};
pub use types::{ClientConfig, ColorMode, ConsoleConfig, NavigationConfig, OutputConfig};
