//! Material and light configuration types.

use serde::{Deserialize, Serialize};

/// Phong material shared by the shaded scenes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaterialConfig {
    /// Reflectance components, each channel in 0.0-1.0.
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    /// Specular exponent (valid range: 1-1000).
    pub shininess: f32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            ambient: [0.8, 0.8, 0.0],
            diffuse: [0.8, 0.8, 0.0],
            specular: [0.5, 0.5, 0.5],
            shininess: 50.0,
        }
    }
}

/// One point light, given in world space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub intensity: [f32; 3],
    pub ambient: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            intensity: [10.0, 10.0, 10.0],
            ambient: [0.01, 0.01, 0.01],
        }
    }
}

/// The three-light rig used when `[[lights]]` is absent.
pub fn default_lights() -> Vec<LightConfig> {
    [
        ([2.0, 2.0, 4.0], [10.0, 10.0, 10.0]),
        ([-1.0, -4.0, 1.0], [7.0, 2.0, 2.0]),
        ([-2.0, 4.0, 1.0], [0.0, 5.0, 2.0]),
    ]
    .into_iter()
    .map(|(position, intensity)| LightConfig {
        position,
        intensity,
        ..LightConfig::default()
    })
    .collect()
}
