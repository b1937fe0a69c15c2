use facet_geometry::IndexedMesh;
use wgpu::util::DeviceExt;

/// Vertex and index buffers of one uploaded mesh.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload `mesh`. Returns `None` for a mesh with nothing to draw.
    pub fn new(device: &wgpu::Device, mesh: &IndexedMesh, label: &str) -> Option<Self> {
        if mesh.is_empty() {
            tracing::debug!("skipping upload of empty mesh {label}");
            return None;
        }

        let vertices = mesh.interleave();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vertices")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} indices")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        tracing::debug!(
            "uploaded {label}: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Some(Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        })
    }
}
