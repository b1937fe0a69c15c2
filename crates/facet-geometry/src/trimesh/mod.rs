//! Indexed triangle meshes loaded from OBJ and PLY files.
//!
//! Faces are stored as a flat triangle list. Polygons in the input are
//! fan-triangulated on load. Normals are computed from the faces when the
//! file does not carry any.

mod load;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use facet_common::MeshError;

use crate::mesh::IndexedMesh;
use crate::vector::{add, cross, normalize, sub, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn size(&self) -> Vec3 {
        sub(self.max, self.min)
    }

    pub fn center(&self) -> Vec3 {
        crate::vector::midpoint(self.min, self.max)
    }

    /// Largest extent along any axis.
    pub fn max_extent(&self) -> f32 {
        let s = self.size();
        s[0].max(s[1]).max(s[2])
    }
}

#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    pub name: String,
    pub path: PathBuf,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub face_normals: Vec<Vec3>,
    pub texcoords: Option<Vec<[f32; 2]>>,
    pub indices: Vec<u32>,
}

impl TriMesh {
    /// Load a mesh, choosing the parser by file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MeshError> {
        let path = path.as_ref();
        tracing::info!("loading {}...", path.display());

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let mut mesh = match extension.as_deref() {
            Some("obj") => load::read_obj(path)?,
            Some("ply") => load::read_ply(path)?,
            _ => return Err(MeshError::UnsupportedFormat(path.to_path_buf())),
        };

        mesh.path = path.to_path_buf();
        mesh.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        mesh.finish()?;

        tracing::info!(
            "done. ({} vertices, {} edges, {} faces)",
            mesh.vertex_count(),
            mesh.edge_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }

    /// Build a mesh from raw buffers, validating indices and filling in
    /// normals when `normals` is empty.
    pub fn from_buffers(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        let mut mesh = Self {
            positions,
            normals,
            indices,
            ..Self::default()
        };
        mesh.finish()?;
        Ok(mesh)
    }

    fn finish(&mut self) -> Result<(), MeshError> {
        if self.indices.len() < 3 {
            return Err(MeshError::Empty(self.path.clone()));
        }
        self.indices.truncate(self.indices.len() - self.indices.len() % 3);

        let count = self.positions.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= count) {
            return Err(MeshError::InvalidIndex { index, count });
        }

        self.compute_face_normals();
        if self.normals.len() != count {
            if !self.normals.is_empty() {
                tracing::warn!(
                    "{}: {} normals for {} vertices, recomputing",
                    self.path.display(),
                    self.normals.len(),
                    count
                );
            }
            self.compute_vertex_normals();
        }
        if let Some(tex) = &self.texcoords {
            if tex.len() != count {
                tracing::warn!("{}: dropping mismatched texture coordinates", self.path.display());
                self.texcoords = None;
            }
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn has_texcoords(&self) -> bool {
        self.texcoords.is_some()
    }

    pub fn faces(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|f| [f[0], f[1], f[2]])
    }

    /// Number of unique undirected edges.
    pub fn edge_count(&self) -> usize {
        let mut edges = HashSet::with_capacity(self.indices.len());
        for [a, b, c] in self.faces() {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                edges.insert((u.min(v), u.max(v)));
            }
        }
        edges.len()
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        let first = *self.positions.first()?;
        let bbox = self.positions.iter().fold(
            Aabb {
                min: first,
                max: first,
            },
            |mut bbox, p| {
                for axis in 0..3 {
                    bbox.min[axis] = bbox.min[axis].min(p[axis]);
                    bbox.max[axis] = bbox.max[axis].max(p[axis]);
                }
                bbox
            },
        );
        Some(bbox)
    }

    /// Unit normal of every face, `(p1 - p0) × (p2 - p0)`.
    pub fn compute_face_normals(&mut self) {
        self.face_normals = self
            .faces()
            .map(|[a, b, c]| {
                let p0 = self.positions[a as usize];
                let p1 = self.positions[b as usize];
                let p2 = self.positions[c as usize];
                normalize(cross(sub(p1, p0), sub(p2, p0)))
            })
            .collect();
    }

    /// Vertex normals as the normalized sum of adjacent face normals.
    pub fn compute_vertex_normals(&mut self) {
        if self.face_normals.len() != self.face_count() {
            self.compute_face_normals();
        }
        let mut normals = vec![[0.0f32; 3]; self.positions.len()];
        for (face, n) in self.faces().zip(self.face_normals.iter()) {
            for v in face {
                normals[v as usize] = add(normals[v as usize], *n);
            }
        }
        self.normals = normals.into_iter().map(normalize).collect();
    }

    /// Positions, normals and indices for GPU upload.
    pub fn to_indexed(&self) -> IndexedMesh {
        IndexedMesh {
            positions: self.positions.clone(),
            normals: self.normals.clone(),
            indices: self.indices.clone(),
        }
    }
}
