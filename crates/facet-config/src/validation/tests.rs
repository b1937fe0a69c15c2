//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = FacetConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_tiny_window() {
    let mut config = FacetConfig::default();
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_bad_clear_color() {
    let mut config = FacetConfig::default();
    config.colors.clear = "black".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("colors.clear"));
}

#[test]
fn catches_subdivisions_above_limit() {
    let mut config = FacetConfig::default();
    config.triangle.max_subdivisions = 4;
    config.triangle.subdivisions = 6;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("triangle.subdivisions"));
    assert!(!err.contains("triangle.max_subdivisions"));
}

#[test]
fn catches_max_subdivisions_too_large() {
    let mut config = FacetConfig::default();
    config.triangle.max_subdivisions = 14;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("triangle.max_subdivisions"));
}

#[test]
fn catches_zero_twist_step() {
    let mut config = FacetConfig::default();
    config.triangle.twist_step = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("triangle.twist_step"));
}

#[test]
fn catches_bad_triangle_color() {
    let mut config = FacetConfig::default();
    config.triangle.down_color = "#00ff0".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("triangle.down_color"));
}

#[test]
fn catches_sphere_grid_too_coarse() {
    let mut config = FacetConfig::default();
    config.sphere.grid_nx = 2;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sphere.grid_nx"));
}

#[test]
fn catches_negative_radius() {
    let mut config = FacetConfig::default();
    config.sphere.radius = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sphere.radius"));
}

#[test]
fn catches_viewer_camera_at_origin() {
    let mut config = FacetConfig::default();
    config.viewer.camera_z = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("viewer.camera_z"));
}

#[test]
fn catches_material_out_of_range() {
    let mut config = FacetConfig::default();
    config.material.specular = [2.0, 0.5, 0.5];
    config.material.shininess = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("material.specular.r"));
    assert!(err.contains("material.shininess"));
}

#[test]
fn catches_too_many_lights() {
    let mut config = FacetConfig::default();
    config.lights = vec![LightConfig::default(); MAX_CONFIG_LIGHTS + 1];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("at most 8"));
}

#[test]
fn catches_negative_light_intensity() {
    let mut config = FacetConfig::default();
    config.lights[1].intensity = [-1.0, 0.0, 0.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("lights[1].intensity.r"));
}

#[test]
fn no_lights_is_valid() {
    let mut config = FacetConfig::default();
    config.lights.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_duplicate_keybinds() {
    let mut config = FacetConfig::default();
    config.keybinds.twist_cw = "9".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate keybind"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = FacetConfig::default();
    config.window.height = 1;
    config.sphere.grid_ny = 5000;
    config.viewer.degrees_per_pixel = 100.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"));
    assert!(err.contains("sphere.grid_ny"));
    assert!(err.contains("viewer.degrees_per_pixel"));
    assert_eq!(err.matches("; ").count(), 2);
}
