//! Config values to geometry types.

use facet_common::Color;
use facet_config::schema::{LightConfig, MaterialConfig};
use facet_geometry::{PhongMaterial, PointLight};

pub fn material_from_config(config: &MaterialConfig) -> PhongMaterial {
    PhongMaterial {
        ambient: config.ambient,
        diffuse: config.diffuse,
        specular: config.specular,
        shininess: config.shininess,
    }
}

pub fn lights_from_config(config: &[LightConfig]) -> Vec<PointLight> {
    config
        .iter()
        .map(|l| PointLight {
            position: l.position,
            intensity: l.intensity,
            ambient: l.ambient,
        })
        .collect()
}

/// RGB in `[0, 1]` from a hex string, `fallback` when it does not parse.
pub fn rgb_from_hex(hex: &str, fallback: [f32; 3]) -> [f32; 3] {
    match Color::from_hex(hex) {
        Some(c) => [c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0],
        None => {
            tracing::warn!("invalid color '{hex}', using fallback");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_config::schema::default_lights;

    #[test]
    fn default_material_matches_geometry_default() {
        assert_eq!(
            material_from_config(&MaterialConfig::default()),
            PhongMaterial::default()
        );
    }

    #[test]
    fn default_lights_match_geometry_rig() {
        assert_eq!(
            lights_from_config(&default_lights()),
            facet_geometry::lighting::default_lights()
        );
    }

    #[test]
    fn hex_colors() {
        assert_eq!(rgb_from_hex("#ff0000", [0.0; 3]), [1.0, 0.0, 0.0]);
        assert_eq!(rgb_from_hex("00ff00", [0.0; 3]), [0.0, 1.0, 0.0]);
        assert_eq!(rgb_from_hex("nope", [0.5; 3]), [0.5; 3]);
    }

    #[test]
    fn vertex_and_clear_colors_share_one_convention() {
        let hex = "#808080";
        let vertex = rgb_from_hex(hex, [0.0; 3]);
        let clear = facet_renderer::render_state::clear_color(&Color::from_hex(hex).unwrap());
        assert!((vertex[0] as f64 - clear.r).abs() < 1e-6);
        assert!((vertex[2] as f64 - clear.b).abs() < 1e-6);
    }
}
