//! Material and light validation.

use super::helpers::{validate_range_f32, validate_rgb};
use crate::schema::FacetConfig;

/// Lights beyond this are rejected rather than silently dropped.
pub const MAX_CONFIG_LIGHTS: usize = 8;

pub(super) fn validate_material(errors: &mut Vec<String>, config: &FacetConfig) {
    let m = &config.material;
    validate_rgb(errors, "material.ambient", m.ambient, 0.0, 1.0);
    validate_rgb(errors, "material.diffuse", m.diffuse, 0.0, 1.0);
    validate_rgb(errors, "material.specular", m.specular, 0.0, 1.0);
    validate_range_f32(errors, "material.shininess", m.shininess, 1.0, 1000.0);
}

pub(super) fn validate_lights(errors: &mut Vec<String>, config: &FacetConfig) {
    if config.lights.len() > MAX_CONFIG_LIGHTS {
        errors.push(format!(
            "lights: {} configured, at most {MAX_CONFIG_LIGHTS} supported",
            config.lights.len()
        ));
    }
    for (i, light) in config.lights.iter().enumerate() {
        validate_rgb(errors, &format!("lights[{i}].intensity"), light.intensity, 0.0, 1.0e4);
        validate_rgb(errors, &format!("lights[{i}].ambient"), light.ambient, 0.0, 1.0);
        if light.position.iter().any(|c| !c.is_finite()) {
            errors.push(format!("lights[{i}].position is not finite"));
        }
    }
}
