//! Watertight UV sphere.
//!
//! Longitude rings share vertices across the seam and the poles are single
//! vertices, so the result is a closed 2-manifold with outward winding.

use std::f32::consts::PI;

use facet_common::GeometryError;

use crate::mesh::IndexedMesh;
use crate::vector::{add, normalize, Vec3};

pub const MIN_GRID: u32 = 3;

/// Build a sphere with `grid_nx` longitude steps and `grid_ny` latitude
/// steps. Vertex count is `(grid_ny - 1) * grid_nx + 2`, triangle count
/// `2 * grid_nx * (grid_ny - 1)`.
pub fn build_watertight_sphere(
    center: Vec3,
    radius: f32,
    grid_nx: u32,
    grid_ny: u32,
) -> Result<IndexedMesh, GeometryError> {
    if grid_nx < 1 || grid_ny < 1 {
        return Err(GeometryError::InvalidGrid {
            nx: grid_nx,
            ny: grid_ny,
        });
    }

    let nx = grid_nx as usize;
    let ny = grid_ny as usize;
    let ring_count = ny - 1;
    let vertex_total = ring_count * nx + 2;

    let mut mesh = IndexedMesh {
        positions: Vec::with_capacity(vertex_total),
        normals: Vec::with_capacity(vertex_total),
        indices: Vec::with_capacity(2 * nx * ring_count * 3),
    };

    let push_vertex = |mesh: &mut IndexedMesh, offset: Vec3| -> u32 {
        let index = mesh.positions.len() as u32;
        mesh.positions.push(add(center, offset));
        mesh.normals.push(normalize(offset));
        index
    };

    // rings[j - 1][i] holds the vertex at latitude j, longitude i
    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(ring_count);
    for j in 1..ny {
        let theta = PI * j as f32 / ny as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        let ring = (0..nx)
            .map(|i| {
                let phi = 2.0 * PI * i as f32 / nx as f32;
                let (sin_p, cos_p) = phi.sin_cos();
                push_vertex(
                    &mut mesh,
                    [radius * cos_p * sin_t, radius * sin_p * sin_t, -radius * cos_t],
                )
            })
            .collect();
        rings.push(ring);
    }

    for pair in rings.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        for i in 0..nx {
            let next = (i + 1) % nx;
            mesh.indices
                .extend_from_slice(&[lower[i], lower[next], upper[next]]);
            mesh.indices
                .extend_from_slice(&[lower[i], upper[next], upper[i]]);
        }
    }

    let bottom = push_vertex(&mut mesh, [0.0, 0.0, -radius]);
    if let Some(first) = rings.first() {
        for i in 0..nx {
            let next = (i + 1) % nx;
            mesh.indices.extend_from_slice(&[bottom, first[next], first[i]]);
        }
    }

    let top = push_vertex(&mut mesh, [0.0, 0.0, radius]);
    if let Some(last) = rings.last() {
        for i in 0..nx {
            let next = (i + 1) % nx;
            mesh.indices.extend_from_slice(&[top, last[i], last[next]]);
        }
    }

    Ok(mesh)
}

/// Sphere parameters with a dirty flag for lazy rebuilding.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    grid_nx: u32,
    grid_ny: u32,
    dirty: bool,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, grid_nx: u32, grid_ny: u32) -> Self {
        Self {
            center,
            radius,
            grid_nx: grid_nx.max(MIN_GRID),
            grid_ny: grid_ny.max(MIN_GRID),
            dirty: true,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn grid_size(&self) -> (u32, u32) {
        (self.grid_nx, self.grid_ny)
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
        self.dirty = true;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.dirty = true;
    }

    /// Each dimension is clamped to at least 3.
    pub fn set_grid_size(&mut self, grid_nx: u32, grid_ny: u32) {
        self.grid_nx = grid_nx.max(MIN_GRID);
        self.grid_ny = grid_ny.max(MIN_GRID);
        self.dirty = true;
    }

    pub fn step_grid(&mut self, dx: i32, dy: i32) {
        self.set_grid_size(
            self.grid_nx.saturating_add_signed(dx),
            self.grid_ny.saturating_add_signed(dy),
        );
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn build(&self) -> Result<IndexedMesh, GeometryError> {
        build_watertight_sphere(self.center, self.radius, self.grid_nx, self.grid_ny)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new([0.0; 3], 1.0, 10, 10)
    }
}

// =============================================================================
// Tests
// =============================================================================
