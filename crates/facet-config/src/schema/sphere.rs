//! Sphere scene configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SphereConfig {
    /// Longitude steps (valid range: 3-1024).
    pub grid_nx: u32,
    /// Latitude steps (valid range: 3-1024).
    pub grid_ny: u32,
    pub radius: f32,
    /// Spin the sphere over time.
    pub animate: bool,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            grid_nx: 10,
            grid_ny: 10,
            radius: 1.0,
            animate: true,
        }
    }
}
