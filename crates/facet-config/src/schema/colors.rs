//! Color configuration types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    /// Framebuffer clear color, `#rrggbb` or `#rrggbbaa`.
    pub clear: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            clear: "#000000".into(),
        }
    }
}
