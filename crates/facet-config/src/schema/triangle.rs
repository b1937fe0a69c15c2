//! Twisted triangle scene configuration.

use serde::{Deserialize, Serialize};

/// How the triangle scene feeds vertices to the GPU.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TriangleStyle {
    /// Regenerate and upload every frame.
    #[default]
    Immediate,
    /// Upload once, rebuild only after a parameter change.
    Buffered,
    /// Parameters owned by a `TwistTriangle` with a dirty flag.
    Object,
}

impl TriangleStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleStyle::Immediate => "immediate",
            TriangleStyle::Buffered => "buffered",
            TriangleStyle::Object => "object",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TriangleConfig {
    pub style: TriangleStyle,
    /// Starting subdivision level.
    pub subdivisions: u32,
    /// Upper clamp for the subdivision level (valid range: 0-10).
    pub max_subdivisions: u32,
    /// Starting twist in degrees per unit distance.
    pub twist_degrees: f32,
    /// Degrees added or removed per key press.
    pub twist_step: f32,
    /// Color of upward-pointing triangles.
    pub up_color: String,
    /// Color of downward-pointing triangles.
    pub down_color: String,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            style: TriangleStyle::Immediate,
            subdivisions: 0,
            max_subdivisions: 10,
            twist_degrees: 0.0,
            twist_step: 5.0,
            up_color: "#ff0000".into(),
            down_color: "#00ff00".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_config_defaults() {
        let config = TriangleConfig::default();
        assert_eq!(config.style, TriangleStyle::Immediate);
        assert_eq!(config.subdivisions, 0);
        assert_eq!(config.max_subdivisions, 10);
        assert_eq!(config.twist_step, 5.0);
        assert_eq!(config.up_color, "#ff0000");
        assert_eq!(config.down_color, "#00ff00");
    }

    #[test]
    fn style_serialization() {
        let json = serde_json::to_string(&TriangleStyle::Buffered).unwrap();
        assert_eq!(json, "\"buffered\"");
        let style: TriangleStyle = serde_json::from_str("\"object\"").unwrap();
        assert_eq!(style, TriangleStyle::Object);
        assert_eq!(style.as_str(), "object");
    }

    #[test]
    fn triangle_config_partial_toml() {
        let config: TriangleConfig = toml::from_str("style = \"object\"\nsubdivisions = 4\n").unwrap();
        assert_eq!(config.style, TriangleStyle::Object);
        assert_eq!(config.subdivisions, 4);
        assert_eq!(config.twist_step, 5.0);
    }
}
