//! Phong materials and point lights.

use crate::matrix::{transform_point, Mat4};
use crate::vector::{dot, length, normalize, sub, Vec3};

/// Maximum number of lights a draw call can carry.
pub const MAX_LIGHTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ambient: [0.8, 0.8, 0.0],
            diffuse: [0.8, 0.8, 0.0],
            specular: [0.5, 0.5, 0.5],
            shininess: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: Vec3,
    pub ambient: Vec3,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: Vec3) -> Self {
        Self {
            position,
            intensity,
            ambient: [0.01, 0.01, 0.01],
        }
    }

    /// Same light with its position carried into camera space.
    pub fn to_camera_space(&self, view: &Mat4) -> Self {
        Self {
            position: transform_point(view, self.position),
            ..*self
        }
    }
}

/// The three-light rig shared by the sphere and mesh viewer scenes.
pub fn default_lights() -> Vec<PointLight> {
    vec![
        PointLight::new([2.0, 2.0, 4.0], [10.0, 10.0, 10.0]),
        PointLight::new([-1.0, -4.0, 1.0], [7.0, 2.0, 2.0]),
        PointLight::new([-2.0, 4.0, 1.0], [0.0, 5.0, 2.0]),
    ]
}

/// Clamp a light list to [`MAX_LIGHTS`], warning about the excess.
pub fn limit_lights(lights: &[PointLight]) -> &[PointLight] {
    if lights.len() > MAX_LIGHTS {
        tracing::warn!(
            "{} lights configured, only the first {} are used",
            lights.len(),
            MAX_LIGHTS
        );
        &lights[..MAX_LIGHTS]
    } else {
        lights
    }
}

/// Reference evaluation of the shaders' lighting at one camera-space point.
///
/// `normal` must be unit length. The eye sits at the origin.
pub fn shade(point: Vec3, normal: Vec3, material: &PhongMaterial, lights: &[PointLight]) -> Vec3 {
    let view_dir = normalize(sub([0.0; 3], point));
    let mut color = [0.0f32; 3];
    for light in limit_lights(lights) {
        let to_light = sub(light.position, point);
        let d = length(to_light);
        let l = normalize(to_light);
        let h = normalize([l[0] + view_dir[0], l[1] + view_dir[1], l[2] + view_dir[2]]);
        let diffuse = dot(normal, l).max(0.0);
        let specular = dot(normal, h).max(0.0).powf(material.shininess);
        let falloff = if d > 0.0 { 1.0 / (d * d) } else { 0.0 };
        for c in 0..3 {
            color[c] += light.ambient[c] * material.ambient[c]
                + light.intensity[c]
                    * falloff
                    * (material.diffuse[c] * diffuse + material.specular[c] * specular);
        }
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{look_at, translate};

    #[test]
    fn default_material_is_yellow() {
        let m = PhongMaterial::default();
        assert_eq!(m.ambient, [0.8, 0.8, 0.0]);
        assert_eq!(m.diffuse, m.ambient);
        assert_eq!(m.specular, [0.5, 0.5, 0.5]);
        assert_eq!(m.shininess, 50.0);
    }

    #[test]
    fn default_rig_has_three_lights() {
        let lights = default_lights();
        assert_eq!(lights.len(), 3);
        assert_eq!(lights[0].position, [2.0, 2.0, 4.0]);
        assert_eq!(lights[1].intensity, [7.0, 2.0, 2.0]);
        assert!(lights.iter().all(|l| l.ambient == [0.01; 3]));
    }

    #[test]
    fn lights_move_into_camera_space() {
        let view = look_at([0.0, 0.0, 8.0], [0.0; 3], [0.0, 1.0, 0.0]);
        let light = PointLight::new([2.0, 2.0, 4.0], [1.0; 3]).to_camera_space(&view);
        assert!((light.position[2] - (-4.0)).abs() < 1e-5);
        assert_eq!(light.intensity, [1.0; 3]);

        let moved = PointLight::new([0.0; 3], [1.0; 3]).to_camera_space(&translate(1.0, 0.0, 0.0));
        assert_eq!(moved.position, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn excess_lights_are_dropped() {
        let lights = vec![PointLight::new([0.0; 3], [1.0; 3]); MAX_LIGHTS + 3];
        assert_eq!(limit_lights(&lights).len(), MAX_LIGHTS);
        assert_eq!(limit_lights(&lights[..2]).len(), 2);
    }

    #[test]
    fn head_on_light_matches_formula() {
        let material = PhongMaterial {
            ambient: [0.0; 3],
            diffuse: [1.0; 3],
            specular: [0.0; 3],
            shininess: 1.0,
        };
        // point at z=-2 facing the eye, light at the eye: d = 2, n·l = 1
        let light = PointLight {
            position: [0.0; 3],
            intensity: [4.0; 3],
            ambient: [0.0; 3],
        };
        let c = shade([0.0, 0.0, -2.0], [0.0, 0.0, 1.0], &material, &[light]);
        assert!(c.iter().all(|v| (v - 1.0).abs() < 1e-5));
    }

    #[test]
    fn back_facing_gets_only_ambient() {
        let material = PhongMaterial::default();
        let light = PointLight::new([0.0, 0.0, 5.0], [10.0; 3]);
        let c = shade([0.0; 3], [0.0, 0.0, -1.0], &material, &[light]);
        assert!((c[0] - 0.01 * 0.8).abs() < 1e-6);
        assert_eq!(c[2], 0.0);
    }
}
