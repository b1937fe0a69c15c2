//! Indexed triangle meshes ready for upload.

use bytemuck::{Pod, Zeroable};

/// Interleaved position + normal, as consumed by the shaded pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct NormalVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Positions and normals with a flat triangle-list index buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }

    /// Vertices in upload layout. Missing normals are zero-filled.
    pub fn interleave(&self) -> Vec<NormalVertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &position)| NormalVertex {
                position,
                normal: self.normals.get(i).copied().unwrap_or([0.0; 3]),
            })
            .collect()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<NormalVertex>(), 24);
    }

    #[test]
    fn interleave_pairs_positions_with_normals() {
        let mesh = IndexedMesh {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]; 2],
            indices: vec![0, 1, 2],
        };
        let verts = mesh.interleave();
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[1].normal, [0.0, 0.0, 1.0]);
        assert_eq!(verts[2].normal, [0.0; 3]);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles().next(), Some([0, 1, 2]));
    }

    #[test]
    fn default_is_empty() {
        assert!(IndexedMesh::default().is_empty());
    }
}
