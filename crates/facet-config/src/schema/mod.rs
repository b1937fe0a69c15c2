//! Configuration schema types for facet.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the examples start from.

mod colors;
mod keybind_config;
mod lighting;
mod logging;
mod sphere;
mod triangle;
mod viewer;
mod window;

pub use colors::*;
pub use keybind_config::*;
pub use lighting::*;
pub use logging::*;
pub use sphere::*;
pub use triangle::*;
pub use viewer::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FacetConfig {
    pub window: WindowConfig,
    pub colors: ColorConfig,
    pub triangle: TriangleConfig,
    pub sphere: SphereConfig,
    pub viewer: ViewerConfig,
    pub material: MaterialConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
    #[serde(default = "default_lights")]
    pub lights: Vec<LightConfig>,
}

impl Default for FacetConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            colors: ColorConfig::default(),
            triangle: TriangleConfig::default(),
            sphere: SphereConfig::default(),
            viewer: ViewerConfig::default(),
            material: MaterialConfig::default(),
            keybinds: KeybindConfig::default(),
            logging: LoggingConfig::default(),
            lights: default_lights(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
