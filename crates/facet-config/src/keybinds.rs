//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use facet_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&'static str, &str)> {
    vec![
        ("subdivide_more", &config.subdivide_more),
        ("subdivide_less", &config.subdivide_less),
        ("twist_ccw", &config.twist_ccw),
        ("twist_cw", &config.twist_cw),
        ("grid_x_more", &config.grid_x_more),
        ("grid_x_less", &config.grid_x_less),
        ("grid_y_more", &config.grid_y_more),
        ("grid_y_less", &config.grid_y_less),
        ("zoom_in", &config.zoom_in),
        ("zoom_out", &config.zoom_out),
        ("reset_view", &config.reset_view),
        ("quit", &config.quit),
    ]
}

fn pick<'a>(binds: &[(&'static str, &'a str)], names: &[&str]) -> Vec<(&'static str, &'a str)> {
    binds
        .iter()
        .filter(|(name, _)| names.contains(name))
        .copied()
        .collect()
}

/// Bindings that are live at the same time, grouped by scene.
pub fn scene_groups(config: &KeybindConfig) -> Vec<(&'static str, Vec<(&'static str, &str)>)> {
    let binds = all_keybinds(config);
    vec![
        (
            "triangle",
            pick(
                &binds,
                &["subdivide_more", "subdivide_less", "twist_ccw", "twist_cw", "quit"],
            ),
        ),
        (
            "sphere",
            pick(
                &binds,
                &["grid_x_more", "grid_x_less", "grid_y_more", "grid_y_less", "quit"],
            ),
        ),
        (
            "mesh",
            pick(
                &binds,
                &[
                    "grid_x_more",
                    "grid_x_less",
                    "grid_y_more",
                    "grid_y_less",
                    "zoom_in",
                    "zoom_out",
                    "reset_view",
                    "quit",
                ],
            ),
        ),
    ]
}

/// Validate that no two keybinds of one scene share a key and none is empty.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    for (name, binding) in all_keybinds(config) {
        if binding.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "keybind '{name}' is empty"
            )));
        }
    }

    for (scene, binds) in scene_groups(config) {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (name, binding) in binds {
            let key = binding.trim().to_ascii_lowercase();
            if let Some(existing_name) = seen.get(&key) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate keybind '{binding}' in {scene} scene: assigned to both '{existing_name}' and '{name}'"
                )));
            }
            seen.insert(key, name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        let config = KeybindConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn all_keybinds_returns_12_entries() {
        let config = KeybindConfig::default();
        assert_eq!(all_keybinds(&config).len(), 12);
    }

    #[test]
    fn same_key_in_different_scenes_is_allowed() {
        let config = KeybindConfig::default();
        // "9" twists the triangle and shrinks the sphere grid
        assert_eq!(config.twist_ccw, config.grid_x_less);
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn detects_duplicate_within_a_scene() {
        let config = KeybindConfig {
            zoom_in: "Z".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("mesh scene"));
        assert!(err.contains("zoom_in"));
    }

    #[test]
    fn duplicate_check_ignores_case() {
        let config = KeybindConfig {
            zoom_in: "z".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn empty_binding_is_rejected() {
        let config = KeybindConfig {
            quit: " ".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("'quit' is empty"));
    }

    #[test]
    fn scene_groups_cover_every_scene() {
        let config = KeybindConfig::default();
        let groups = scene_groups(&config);
        let names: Vec<&str> = groups.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["triangle", "sphere", "mesh"]);
        assert_eq!(groups[2].1.len(), 8);
    }
}
