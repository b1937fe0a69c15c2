//! Camera and model-placement helpers used by the scenes.

use crate::matrix::{
    degrees_to_radians, look_at, mul_all, orthographic, perspective, rotate_x, rotate_y, rotate_z,
    scale, scale_xyz, translate, Mat4,
};
use crate::trimesh::Aabb;

// =============================================================================
// Triangle (orthographic)
// =============================================================================

/// Half extents of an orthographic box that keeps a unit square visible
/// at any aspect ratio.
pub fn ortho_extent(width: u32, height: u32) -> (f32, f32) {
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    if aspect > 1.0 {
        (aspect, 1.0)
    } else {
        (1.0, 1.0 / aspect)
    }
}

pub fn triangle_view() -> Mat4 {
    look_at([0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0])
}

pub fn triangle_projection(width: u32, height: u32) -> Mat4 {
    let (x, y) = ortho_extent(width, height);
    orthographic(-x, x, -y, y, -1.0, 1.0)
}

// =============================================================================
// Rotating sphere (perspective)
// =============================================================================

pub const SPHERE_EYE: [f32; 3] = [0.0, 0.0, 8.0];
pub const SPHERE_FOV_DEGREES: f32 = 60.0;
pub const NEAR: f32 = 0.01;
pub const FAR: f32 = 50.0;

/// Degrees per second around Y and Z.
const SPIN_Y: f32 = 90.0;
const SPIN_Z: f32 = 30.0;

/// Model matrix of the animated sphere `seconds` after start:
/// stretched 2× along x, spun around Y then Z.
pub fn sphere_model_at(seconds: f32) -> Mat4 {
    mul_all(&[
        rotate_z(degrees_to_radians(SPIN_Z * seconds)),
        rotate_y(degrees_to_radians(SPIN_Y * seconds)),
        scale_xyz(2.0, 1.0, 1.0),
    ])
}

pub fn sphere_view() -> Mat4 {
    look_at(SPHERE_EYE, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0])
}

pub fn perspective_projection(width: u32, height: u32) -> Mat4 {
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    perspective(degrees_to_radians(SPHERE_FOV_DEGREES), aspect, NEAR, FAR)
}

// =============================================================================
// Mesh row layout
// =============================================================================

/// Placement of one mesh in a row of `count` meshes spanning `[-1, 1]` in x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSlot {
    pub scale: f32,
    pub center: [f32; 3],
    pub x_shift: f32,
}

impl RowSlot {
    /// `rotation · translate(x_shift) · scale · translate(-center)`: the
    /// drag rotation turns the whole row about the origin.
    pub fn model(&self, rotation: &Mat4) -> Mat4 {
        mul_all(&[
            *rotation,
            translate(self.x_shift, 0.0, 0.0),
            scale(self.scale),
            translate(-self.center[0], -self.center[1], -self.center[2]),
        ])
    }
}

/// Scale a mesh so its largest extent is `2 / count`, center it, and move
/// it into slot `index`.
pub fn fit_in_row(bbox: &Aabb, index: usize, count: usize) -> RowSlot {
    let count = count.max(1) as f32;
    let extent = bbox.max_extent();
    let scale = if extent > f32::EPSILON {
        2.0 / extent / count
    } else {
        1.0
    };
    RowSlot {
        scale,
        center: bbox.center(),
        x_shift: index as f32 * (2.0 / count) + 1.0 / count - 1.0,
    }
}

// =============================================================================
// Mesh viewer camera
// =============================================================================

pub const DEFAULT_CAMERA_Z: f32 = 2.0;
const ZOOM_IN: f32 = 0.9;
const ZOOM_OUT: f32 = 1.1;
const MIN_CAMERA_Z: f32 = 0.01;

/// Camera distance plus the model rotation accumulated from mouse drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerCamera {
    pub z: f32,
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub degrees_per_pixel: f32,
}

impl Default for ViewerCamera {
    fn default() -> Self {
        Self {
            z: DEFAULT_CAMERA_Z,
            yaw_degrees: 0.0,
            pitch_degrees: 0.0,
            degrees_per_pixel: 1.0,
        }
    }
}

impl ViewerCamera {
    pub fn zoom_in(&mut self) {
        if self.z >= MIN_CAMERA_Z {
            self.z *= ZOOM_IN;
        }
    }

    pub fn zoom_out(&mut self) {
        self.z *= ZOOM_OUT;
    }

    /// Accumulate a drag of `dx`, `dy` pixels: x spins around Y, y around X.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.yaw_degrees += dx as f32 * self.degrees_per_pixel;
        self.pitch_degrees += dy as f32 * self.degrees_per_pixel;
    }

    pub fn reset(&mut self) {
        self.z = DEFAULT_CAMERA_Z;
        self.yaw_degrees = 0.0;
        self.pitch_degrees = 0.0;
    }

    pub fn view(&self) -> Mat4 {
        look_at([0.0, 0.0, self.z], [0.0, 0.0, -2.0], [0.0, 1.0, 0.0])
    }

    pub fn rotation(&self) -> Mat4 {
        mul_all(&[
            rotate_y(degrees_to_radians(self.yaw_degrees)),
            rotate_x(degrees_to_radians(self.pitch_degrees)),
        ])
    }
}

// =============================================================================
// Tests
// =============================================================================
