//! Full configuration validation.
//!
//! Validates numeric ranges, colors and keybind uniqueness. Each domain
//! has its own submodule; this orchestrator calls them all and collects
//! errors into a single `ConfigError`.

mod helpers;
mod lighting;
mod scenes;

#[cfg(test)]
mod tests;

pub use lighting::MAX_CONFIG_LIGHTS;

use crate::keybinds;
use crate::schema::FacetConfig;
use facet_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FacetConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Keybind duplicates
    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    scenes::validate_window(&mut errors, config);
    scenes::validate_triangle(&mut errors, config);
    scenes::validate_sphere(&mut errors, config);
    scenes::validate_viewer(&mut errors, config);
    lighting::validate_material(&mut errors, config);
    lighting::validate_lights(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
