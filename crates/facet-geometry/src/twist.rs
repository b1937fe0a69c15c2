//! Recursive subdivision of a triangle with a distance-dependent twist.
//!
//! Every subdivision level splits a triangle into four by its edge
//! midpoints. At the leaves each corner is rotated around a fixed center by
//! an angle proportional to its distance from that center, which turns the
//! flat Sierpinski-like pattern into a swirl.

use bytemuck::{Pod, Zeroable};

use crate::vector::{centroid, length, midpoint, sub, Vec3};

/// Interleaved position + color, as consumed by the flat pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

pub const DEFAULT_CORNERS: [Vec3; 3] = [[0.0, 0.75, 0.0], [0.65, -0.375, 0.0], [-0.65, -0.375, 0.0]];
pub const UP_COLOR: Vec3 = [1.0, 0.0, 0.0];
pub const DOWN_COLOR: Vec3 = [0.0, 1.0, 0.0];
pub const DEFAULT_MAX_SUBDIVISIONS: u32 = 10;

/// Rotate `point` about `center` in the XY plane by
/// `twist_degrees * |point - center|` degrees. Z is left untouched.
pub fn twist_point(point: Vec3, center: Vec3, twist_degrees: f32) -> Vec3 {
    let offset = sub(point, center);
    let angle = (twist_degrees * length(offset)).to_radians();
    let (s, c) = angle.sin_cos();
    [
        c * offset[0] - s * offset[1] + center[0],
        s * offset[0] + c * offset[1] + center[1],
        point[2],
    ]
}

/// Subdivide `(p0, p1, p2)` `level` times and append the twisted leaf
/// triangles to `out`. Corner triangles keep `color_a`; the inverted
/// middle triangle swaps the colors.
#[allow(clippy::too_many_arguments)]
pub fn subdivide(
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    level: u32,
    color_a: Vec3,
    color_b: Vec3,
    twist_degrees: f32,
    center: Vec3,
    out: &mut Vec<ColorVertex>,
) {
    if level == 0 {
        for p in [p0, p1, p2] {
            out.push(ColorVertex {
                position: twist_point(p, center, twist_degrees),
                color: color_a,
            });
        }
        return;
    }

    let p01 = midpoint(p0, p1);
    let p02 = midpoint(p0, p2);
    let p12 = midpoint(p1, p2);
    let next = level - 1;

    subdivide(p0, p01, p02, next, color_a, color_b, twist_degrees, center, out);
    subdivide(p01, p1, p12, next, color_a, color_b, twist_degrees, center, out);
    subdivide(p02, p12, p2, next, color_a, color_b, twist_degrees, center, out);
    subdivide(p01, p12, p02, next, color_b, color_a, twist_degrees, center, out);
}

/// Number of vertices `subdivide` emits for a given level.
pub fn vertex_count(level: u32) -> usize {
    3 * 4usize.pow(level)
}

/// Subdivide the default triangle around its own centroid.
pub fn twisted_triangle(level: u32, twist_degrees: f32) -> Vec<ColorVertex> {
    let [p0, p1, p2] = DEFAULT_CORNERS;
    let mut out = Vec::with_capacity(vertex_count(level));
    subdivide(
        p0,
        p1,
        p2,
        level,
        UP_COLOR,
        DOWN_COLOR,
        twist_degrees,
        centroid(p0, p1, p2),
        &mut out,
    );
    out
}

/// A twisted triangle that owns its parameters and tracks whether its
/// vertex data needs rebuilding.
#[derive(Debug, Clone)]
pub struct TwistTriangle {
    corners: [Vec3; 3],
    colors: (Vec3, Vec3),
    subdivisions: u32,
    max_subdivisions: u32,
    twist_degrees: f32,
    dirty: bool,
}

impl TwistTriangle {
    pub fn new(subdivisions: u32) -> Self {
        Self::with_limit(subdivisions, DEFAULT_MAX_SUBDIVISIONS)
    }

    pub fn with_limit(subdivisions: u32, max_subdivisions: u32) -> Self {
        let mut triangle = Self {
            corners: DEFAULT_CORNERS,
            colors: (UP_COLOR, DOWN_COLOR),
            subdivisions: 0,
            max_subdivisions,
            twist_degrees: 0.0,
            dirty: true,
        };
        triangle.set_subdivisions(subdivisions);
        triangle
    }

    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    pub fn max_subdivisions(&self) -> u32 {
        self.max_subdivisions
    }

    pub fn twist_degrees(&self) -> f32 {
        self.twist_degrees
    }

    /// Clamp to `[0, max_subdivisions]` and mark dirty.
    pub fn set_subdivisions(&mut self, subdivisions: u32) {
        self.subdivisions = subdivisions.min(self.max_subdivisions);
        self.dirty = true;
    }

    /// Step the subdivision level; decrements stop at zero.
    pub fn step_subdivisions(&mut self, delta: i32) {
        let next = self.subdivisions.saturating_add_signed(delta);
        self.set_subdivisions(next);
    }

    pub fn set_twist_degrees(&mut self, twist_degrees: f32) {
        self.twist_degrees = twist_degrees;
        self.dirty = true;
    }

    pub fn set_colors(&mut self, up: Vec3, down: Vec3) {
        self.colors = (up, down);
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Report the dirty flag and clear it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn vertex_count(&self) -> usize {
        vertex_count(self.subdivisions)
    }

    /// Regenerate the twisted, subdivided vertex list.
    pub fn vertices(&self) -> Vec<ColorVertex> {
        let [p0, p1, p2] = self.corners;
        let mut out = Vec::with_capacity(self.vertex_count());
        subdivide(
            p0,
            p1,
            p2,
            self.subdivisions,
            self.colors.0,
            self.colors.1,
            self.twist_degrees,
            centroid(p0, p1, p2),
            &mut out,
        );
        out
    }
}

impl Default for TwistTriangle {
    fn default() -> Self {
        Self::new(0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn color_vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<ColorVertex>(), 24);
    }

    #[test]
    fn level_zero_emits_input_corners() {
        let out = twisted_triangle(0, 0.0);
        assert_eq!(out.len(), 3);
        for (v, corner) in out.iter().zip(DEFAULT_CORNERS.iter()) {
            assert!(approx(v.position, *corner));
            assert_eq!(v.color, UP_COLOR);
        }
    }

    #[test]
    fn vertex_count_grows_by_four() {
        for level in 0..6 {
            assert_eq!(twisted_triangle(level, 15.0).len(), vertex_count(level));
        }
        assert_eq!(vertex_count(3), 192);
    }

    #[test]
    fn level_one_layout_and_colors() {
        let out = twisted_triangle(1, 0.0);
        assert_eq!(out.len(), 12);
        let [p0, p1, p2] = DEFAULT_CORNERS;
        let p01 = midpoint(p0, p1);
        let p02 = midpoint(p0, p2);
        let p12 = midpoint(p1, p2);

        assert!(approx(out[0].position, p0));
        assert!(approx(out[1].position, p01));
        assert!(approx(out[2].position, p02));
        // middle triangle is last and inverted
        assert!(approx(out[9].position, p01));
        assert!(approx(out[10].position, p12));
        assert!(approx(out[11].position, p02));

        assert!(out[..9].iter().all(|v| v.color == UP_COLOR));
        assert!(out[9..].iter().all(|v| v.color == DOWN_COLOR));
    }

    #[test]
    fn level_two_middle_of_middle_is_up_colored() {
        let out = twisted_triangle(2, 0.0);
        // last block of 3 comes from the middle child of the middle triangle
        assert!(out[45..].iter().all(|v| v.color == UP_COLOR));
        // first three children of the middle triangle flip to the down color
        assert!(out[36..45].iter().all(|v| v.color == DOWN_COLOR));
    }

    #[test]
    fn twist_leaves_center_fixed() {
        let c = [0.1, -0.2, 0.3];
        assert!(approx(twist_point(c, c, 90.0), c));
    }

    #[test]
    fn twist_rotates_counter_clockwise_by_distance() {
        // distance 1 at 90 deg/unit → quarter turn
        let p = twist_point([1.0, 0.0, 0.0], [0.0, 0.0, 0.0], 90.0);
        assert!(approx(p, [0.0, 1.0, 0.0]));
        // distance 2 at 45 deg/unit → also a quarter turn
        let p = twist_point([2.0, 0.0, 0.0], [0.0, 0.0, 0.0], 45.0);
        assert!(approx(p, [0.0, 2.0, 0.0]));
    }

    #[test]
    fn twist_angle_uses_full_3d_distance() {
        // |(1, 0, 0.5)| = sqrt(1.25), so the turn is a bit more than 90 deg
        let p = twist_point([1.0, 0.0, 0.5], [0.0, 0.0, 0.0], 90.0);
        let angle = (90.0 * 1.25f32.sqrt()).to_radians();
        assert!(approx(p, [angle.cos(), angle.sin(), 0.5]));
        assert!(p[0] < 0.0);
    }

    #[test]
    fn twist_preserves_distance_to_center() {
        let center = centroid(DEFAULT_CORNERS[0], DEFAULT_CORNERS[1], DEFAULT_CORNERS[2]);
        let flat = twisted_triangle(3, 0.0);
        let twisted = twisted_triangle(3, 37.0);
        for (a, b) in flat.iter().zip(twisted.iter()) {
            let da = length(sub(a.position, center));
            let db = length(sub(b.position, center));
            assert!((da - db).abs() < 1e-5);
        }
    }

    #[test]
    fn zero_twist_is_identity() {
        let p = [0.3, 0.4, 0.0];
        assert!(approx(twist_point(p, [0.0; 3], 0.0), p));
    }

    #[test]
    fn subdivisions_are_clamped() {
        let mut t = TwistTriangle::new(42);
        assert_eq!(t.subdivisions(), DEFAULT_MAX_SUBDIVISIONS);
        t.step_subdivisions(-100);
        assert_eq!(t.subdivisions(), 0);
        t.step_subdivisions(1);
        assert_eq!(t.subdivisions(), 1);
    }

    #[test]
    fn custom_limit_is_respected() {
        let mut t = TwistTriangle::with_limit(2, 4);
        t.step_subdivisions(5);
        assert_eq!(t.subdivisions(), 4);
        assert_eq!(t.vertices().len(), vertex_count(4));
    }

    #[test]
    fn dirty_flag_tracks_changes() {
        let mut t = TwistTriangle::default();
        assert!(t.take_dirty());
        assert!(!t.take_dirty());

        t.set_twist_degrees(5.0);
        assert!(t.is_dirty());
        assert!(t.take_dirty());
        assert!(!t.is_dirty());

        t.set_subdivisions(3);
        assert!(t.take_dirty());
    }

    #[test]
    fn object_matches_free_function() {
        let mut t = TwistTriangle::new(3);
        t.set_twist_degrees(-20.0);
        assert_eq!(t.vertices(), twisted_triangle(3, -20.0));
    }
}
