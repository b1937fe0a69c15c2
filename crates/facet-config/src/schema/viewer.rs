//! Mesh viewer configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Starting camera distance along +z (valid range: 0.01-1000).
    pub camera_z: f32,
    /// Model rotation per dragged pixel (valid range: 0.01-10).
    pub degrees_per_pixel: f32,
    /// Meshes opened when `facet mesh` gets no `-m` arguments.
    pub meshes: Vec<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            camera_z: 2.0,
            degrees_per_pixel: 1.0,
            meshes: Vec::new(),
        }
    }
}
