//! Config hot reload for the render loop.
//!
//! [`ConfigReloader`] pairs a started [`ConfigWatcher`] with the loader:
//! the app calls [`ConfigReloader::poll`] once per frame and receives a
//! freshly validated config after each debounced change.

use crate::schema::FacetConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::{ConfigChanges, ConfigWatcher};
use facet_common::ConfigError;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::warn;

pub struct ConfigReloader {
    changes: ConfigChanges,
}

impl ConfigReloader {
    /// Start watching `config_path`.
    pub fn start(config_path: PathBuf) -> Result<Self, ConfigError> {
        let changes = ConfigWatcher::new(config_path)?.start()?;
        Ok(Self { changes })
    }

    pub fn from_changes(changes: ConfigChanges) -> Self {
        Self { changes }
    }

    pub fn path(&self) -> &Path {
        self.changes.path()
    }

    /// Reloaded config once a change has settled. Configs that fail to
    /// parse or validate are logged and skipped.
    pub fn poll(&mut self, now: Instant) -> Option<FacetConfig> {
        if !self.changes.poll(now) {
            return None;
        }
        match reload_config(self.changes.path()) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("config reload failed: {e}");
                None
            }
        }
    }
}

/// Load and strictly validate a config file.
pub fn reload_config(path: &Path) -> Result<FacetConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
