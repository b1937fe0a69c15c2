//! Triangle, sphere and viewer validation.

use super::helpers::{validate_color, validate_range, validate_range_f32};
use crate::schema::FacetConfig;

pub(super) fn validate_window(errors: &mut Vec<String>, config: &FacetConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 16384);
    validate_range(errors, "window.height", config.window.height, 64, 16384);
    validate_color(errors, "colors.clear", &config.colors.clear);
}

pub(super) fn validate_triangle(errors: &mut Vec<String>, config: &FacetConfig) {
    let t = &config.triangle;
    validate_range(errors, "triangle.max_subdivisions", t.max_subdivisions, 0, 10);
    validate_range(errors, "triangle.subdivisions", t.subdivisions, 0, t.max_subdivisions);
    validate_range_f32(errors, "triangle.twist_step", t.twist_step, 0.01, 180.0);
    validate_range_f32(errors, "triangle.twist_degrees", t.twist_degrees, -3600.0, 3600.0);
    validate_color(errors, "triangle.up_color", &t.up_color);
    validate_color(errors, "triangle.down_color", &t.down_color);
}

pub(super) fn validate_sphere(errors: &mut Vec<String>, config: &FacetConfig) {
    let s = &config.sphere;
    validate_range(errors, "sphere.grid_nx", s.grid_nx, 3, 1024);
    validate_range(errors, "sphere.grid_ny", s.grid_ny, 3, 1024);
    validate_range_f32(errors, "sphere.radius", s.radius, 0.001, 1000.0);
}

pub(super) fn validate_viewer(errors: &mut Vec<String>, config: &FacetConfig) {
    let v = &config.viewer;
    validate_range_f32(errors, "viewer.camera_z", v.camera_z, 0.01, 1000.0);
    validate_range_f32(errors, "viewer.degrees_per_pixel", v.degrees_per_pixel, 0.01, 10.0);
}
