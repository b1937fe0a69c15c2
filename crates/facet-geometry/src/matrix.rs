//! Column-major 4×4 transforms for the model, view and projection stages.
//!
//! Layout matches WGSL `mat4x4<f32>`. Projections follow the
//! GL clip convention (`z` in `[-1, 1]`); [`to_wgpu_depth`] remaps them for
//! wgpu's `[0, 1]` depth range.

use crate::vector::{cross, dot, normalize, Vec3};

/// Sixteen floats, one column after another.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// GL-style perspective frustum.
///
/// `fov_y` is in radians; `near` and `far` are positive distances.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        (far + near) * range_inv,
        -1.0,
        0.0,
        0.0,
        2.0 * far * near * range_inv,
        0.0,
    ]
}

/// Orthographic projection onto the box `[left, right] × [bottom, top] × [near, far]`.
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;
    [
        2.0 / w,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 / h,
        0.0,
        0.0,
        0.0,
        0.0,
        -2.0 / d,
        0.0,
        -(right + left) / w,
        -(top + bottom) / h,
        -(far + near) / d,
        1.0,
    ]
}

/// Right-handed view matrix looking from `eye` towards `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = normalize([target[0] - eye[0], target[1] - eye[1], target[2] - eye[2]]);
    let s = normalize(cross(f, up));
    let u = cross(s, f);
    [
        s[0],
        u[0],
        -f[0],
        0.0,
        s[1],
        u[1],
        -f[1],
        0.0,
        s[2],
        u[2],
        -f[2],
        0.0,
        -dot(s, eye),
        -dot(u, eye),
        dot(f, eye),
        1.0,
    ]
}

/// Counter-clockwise turn about +X by `angle` radians.
pub fn rotate_x(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Counter-clockwise turn about +Y.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Counter-clockwise turn about +Z.
pub fn rotate_z(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Uniform scale matrix.
pub fn scale(s: f32) -> Mat4 {
    scale_xyz(s, s, s)
}

/// Per-axis scale matrix.
pub fn scale_xyz(x: f32, y: f32, z: f32) -> Mat4 {
    [
        x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// `a · b`: applying the result applies `b` first.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Product of a chain of matrices, left to right.
pub fn mul_all(chain: &[Mat4]) -> Mat4 {
    chain.iter().fold(IDENTITY, |acc, m| mul(&acc, m))
}

pub fn transpose(m: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            out[row * 4 + col] = m[col * 4 + row];
        }
    }
    out
}

/// General inverse via cofactor expansion. `None` for singular matrices.
pub fn inverse(m: &Mat4) -> Option<Mat4> {
    let mut inv = [0.0f32; 16];

    inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
        + m[9] * m[7] * m[14]
        + m[13] * m[6] * m[11]
        - m[13] * m[7] * m[10];
    inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
        - m[8] * m[7] * m[14]
        - m[12] * m[6] * m[11]
        + m[12] * m[7] * m[10];
    inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
        + m[8] * m[7] * m[13]
        + m[12] * m[5] * m[11]
        - m[12] * m[7] * m[9];
    inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
        - m[8] * m[6] * m[13]
        - m[12] * m[5] * m[10]
        + m[12] * m[6] * m[9];
    inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
        - m[9] * m[3] * m[14]
        - m[13] * m[2] * m[11]
        + m[13] * m[3] * m[10];
    inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
        + m[8] * m[3] * m[14]
        + m[12] * m[2] * m[11]
        - m[12] * m[3] * m[10];
    inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
        - m[8] * m[3] * m[13]
        - m[12] * m[1] * m[11]
        + m[12] * m[3] * m[9];
    inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
        + m[8] * m[2] * m[13]
        + m[12] * m[1] * m[10]
        - m[12] * m[2] * m[9];
    inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
        + m[5] * m[3] * m[14]
        + m[13] * m[2] * m[7]
        - m[13] * m[3] * m[6];
    inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
        - m[4] * m[3] * m[14]
        - m[12] * m[2] * m[7]
        + m[12] * m[3] * m[6];
    inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
        + m[4] * m[3] * m[13]
        + m[12] * m[1] * m[7]
        - m[12] * m[3] * m[5];
    inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
        - m[4] * m[2] * m[13]
        - m[12] * m[1] * m[6]
        + m[12] * m[2] * m[5];
    inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
        - m[5] * m[3] * m[10]
        - m[9] * m[2] * m[7]
        + m[9] * m[3] * m[6];
    inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
        + m[4] * m[3] * m[10]
        + m[8] * m[2] * m[7]
        - m[8] * m[3] * m[6];
    inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
        - m[4] * m[3] * m[9]
        - m[8] * m[1] * m[7]
        + m[8] * m[3] * m[5];
    inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
        + m[4] * m[2] * m[9]
        + m[8] * m[1] * m[6]
        - m[8] * m[2] * m[5];

    let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
    if det.abs() < f32::EPSILON * f32::EPSILON {
        return None;
    }

    let det_inv = 1.0 / det;
    for v in inv.iter_mut() {
        *v *= det_inv;
    }
    Some(inv)
}

/// Matrix that carries normals through `mv`: transpose(inverse(mv)).
///
/// Falls back to identity when `mv` is singular.
pub fn normal_matrix(mv: &Mat4) -> Mat4 {
    inverse(mv).map(|inv| transpose(&inv)).unwrap_or(IDENTITY)
}

/// Transform a point (w = 1) and drop the w component.
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    [
        m[0] * p[0] + m[4] * p[1] + m[8] * p[2] + m[12],
        m[1] * p[0] + m[5] * p[1] + m[9] * p[2] + m[13],
        m[2] * p[0] + m[6] * p[1] + m[10] * p[2] + m[14],
    ]
}

/// Remap a GL-convention projection's depth from `[-1, 1]` to `[0, 1]`.
pub fn to_wgpu_depth(proj: &Mat4) -> Mat4 {
    const GL_TO_WGPU: Mat4 = [
        1.0, 0.0, 0.0, 0.0, // col 0
        0.0, 1.0, 0.0, 0.0, // col 1
        0.0, 0.0, 0.5, 0.0, // col 2
        0.0, 0.0, 0.5, 1.0, // col 3
    ];
    mul(&GL_TO_WGPU, proj)
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Mat4, b: &Mat4, tol: f32) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < tol)
    }

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn identity_is_neutral() {
        let m = rotate_x(0.25);
        assert!(approx_eq(&mul(&IDENTITY, &m), &m, 1e-6));
        assert!(approx_eq(&mul(&m, &IDENTITY), &m, 1e-6));
    }

    #[test]
    fn translate_moves_point() {
        let t = translate(1.0, 2.0, 3.0);
        assert!(approx_vec(transform_point(&t, [1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]));
    }

    #[test]
    fn scale_xyz_stretches_x_only() {
        let s = scale_xyz(2.0, 1.0, 1.0);
        assert!(approx_vec(transform_point(&s, [1.0, 1.0, 1.0]), [2.0, 1.0, 1.0]));
    }

    #[test]
    fn quarter_turn_about_x() {
        let r = rotate_x(std::f32::consts::FRAC_PI_2);
        // Y axis maps to Z axis
        assert!(approx_vec(transform_point(&r, [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn quarter_turn_about_y() {
        let r = rotate_y(std::f32::consts::FRAC_PI_2);
        // Z axis maps to X axis
        assert!(approx_vec(transform_point(&r, [0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]));
    }

    #[test]
    fn quarter_turn_about_z() {
        let r = rotate_z(std::f32::consts::FRAC_PI_2);
        // X axis maps to Y axis (counter-clockwise)
        assert!(approx_vec(transform_point(&r, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]));
    }

    #[test]
    fn mul_applies_right_operand_first() {
        let m = mul(&translate(1.0, 0.0, 0.0), &scale(2.0));
        assert!(approx_vec(transform_point(&m, [1.0, 0.0, 0.0]), [3.0, 0.0, 0.0]));
    }

    #[test]
    fn mul_all_matches_pairwise() {
        let a = rotate_z(0.3);
        let b = rotate_y(1.1);
        let c = scale_xyz(2.0, 1.0, 1.0);
        let chained = mul_all(&[a, b, c]);
        let pairwise = mul(&mul(&a, &b), &c);
        assert!(approx_eq(&chained, &pairwise, 1e-6));
    }

    #[test]
    fn perspective_focal_terms() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 * 0.5).tan();
        assert!((p[0] - f / (16.0 / 9.0)).abs() < 1e-5);
        assert!((p[5] - f).abs() < 1e-5);
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn orthographic_maps_box_corners() {
        let o = orthographic(-2.0, 2.0, -1.0, 1.0, -1.0, 1.0);
        assert!(approx_vec(transform_point(&o, [2.0, 1.0, 0.0]), [1.0, 1.0, 0.0]));
        assert!(approx_vec(transform_point(&o, [-2.0, -1.0, 0.0]), [-1.0, -1.0, 0.0]));
        // z is flipped: near plane (-1 in eye space looking down -z) maps to -1
        assert!(approx_vec(transform_point(&o, [0.0, 0.0, 1.0]), [0.0, 0.0, -1.0]));
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let v = look_at([0.0, 0.0, 8.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(approx_vec(transform_point(&v, [0.0, 0.0, 8.0]), [0.0, 0.0, 0.0]));
        // target lies straight ahead on -z
        assert!(approx_vec(transform_point(&v, [0.0, 0.0, 0.0]), [0.0, 0.0, -8.0]));
    }

    #[test]
    fn inverse_of_translation() {
        let t = translate(3.0, -2.0, 5.0);
        let inv = inverse(&t).unwrap();
        assert!(approx_eq(&mul(&t, &inv), &IDENTITY, 1e-5));
    }

    #[test]
    fn inverse_of_composite_transform() {
        let m = mul_all(&[
            translate(0.5, 1.0, -3.0),
            rotate_y(0.7),
            rotate_x(-0.4),
            scale_xyz(2.0, 1.0, 0.5),
        ]);
        let inv = inverse(&m).unwrap();
        assert!(approx_eq(&mul(&inv, &m), &IDENTITY, 1e-4));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(inverse(&scale_xyz(1.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn normal_matrix_of_rotation_is_rotation() {
        let r = rotate_y(0.9);
        assert!(approx_eq(&normal_matrix(&r), &r, 1e-5));
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        // A normal of a plane x = y must stay perpendicular after scaling x by 2.
        let s = scale_xyz(2.0, 1.0, 1.0);
        let n = normal_matrix(&s);
        let tangent = transform_point(&s, [1.0, 1.0, 0.0]);
        let normal = transform_point(&n, [1.0, -1.0, 0.0]);
        assert!(dot(tangent, normal).abs() < 1e-5);
    }

    #[test]
    fn transpose_twice_is_identity_operation() {
        let m = mul(&rotate_x(0.2), &translate(1.0, 2.0, 3.0));
        assert!(approx_eq(&transpose(&transpose(&m)), &m, 1e-6));
    }

    #[test]
    fn wgpu_depth_maps_near_and_far() {
        let p = to_wgpu_depth(&perspective(1.0, 1.0, 1.0, 10.0));
        let clip = |z: f32| {
            let z_clip = p[2] * 0.0 + p[6] * 0.0 + p[10] * z + p[14];
            let w_clip = p[3] * 0.0 + p[7] * 0.0 + p[11] * z + p[15];
            z_clip / w_clip
        };
        assert!(clip(-1.0).abs() < 1e-5);
        assert!((clip(-10.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn degrees_conversion() {
        assert!((degrees_to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
    }
}
