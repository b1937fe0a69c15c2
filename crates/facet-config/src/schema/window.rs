//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window size, title and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Base title; each scene appends its own name.
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 64-16384).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 64-16384).
    pub height: u32,
    /// Wait for vertical blank before presenting.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "facet".into(),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
