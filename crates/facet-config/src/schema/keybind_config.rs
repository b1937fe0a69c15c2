//! Keyboard shortcut configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Key names for every scene action.
///
/// Format: a single key name as winit reports it ("2", "X", "Space",
/// "Escape"). Letters are matched case-insensitively. The same key may
/// drive different actions in different scenes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeybindConfig {
    pub subdivide_more: String,
    pub subdivide_less: String,
    pub twist_ccw: String,
    pub twist_cw: String,
    pub grid_x_more: String,
    pub grid_x_less: String,
    pub grid_y_more: String,
    pub grid_y_less: String,
    pub zoom_in: String,
    pub zoom_out: String,
    pub reset_view: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            subdivide_more: "2".into(),
            subdivide_less: "1".into(),
            twist_ccw: "9".into(),
            twist_cw: "0".into(),
            grid_x_more: "0".into(),
            grid_x_less: "9".into(),
            grid_y_more: "2".into(),
            grid_y_less: "1".into(),
            zoom_in: "X".into(),
            zoom_out: "Z".into(),
            reset_view: "Space".into(),
            quit: "Escape".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keybind_defaults() {
        let config = KeybindConfig::default();
        assert_eq!(config.twist_ccw, "9");
        assert_eq!(config.grid_x_more, "0");
        assert_eq!(config.reset_view, "Space");
        assert_eq!(config.quit, "Escape");
    }

    #[test]
    fn keybind_partial_toml() {
        let config: KeybindConfig = toml::from_str("quit = \"Q\"\n").unwrap();
        assert_eq!(config.quit, "Q");
        assert_eq!(config.zoom_in, "X");
    }
}
