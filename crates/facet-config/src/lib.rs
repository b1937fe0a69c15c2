//! facet configuration system.
//!
//! Provides TOML-based configuration with live reload and full
//! validation. All config sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use facet_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

// Re-export core types for convenience
pub use reload::ConfigReloader;
pub use schema::{FacetConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use facet_common::ConfigError;
use std::path::{Path, PathBuf};

/// Where the config lives: `override_path` if given, else the platform default.
pub fn resolve_config_path(override_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => toml_loader::default_config_path(),
    }
}

/// Load and validate the config.
///
/// With `override_path` the file must exist. Without it, the platform
/// default is used and created with a commented template when missing.
pub fn load_config(override_path: Option<&Path>) -> Result<FacetConfig, ConfigError> {
    let config = match override_path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FacetConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
