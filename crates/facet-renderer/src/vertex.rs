//! wgpu vertex buffer layouts for the geometry crate's vertex types.

use facet_geometry::{ColorVertex, NormalVertex};

/// A `Pod` vertex with a fixed wgpu buffer layout.
pub trait VertexLayout: bytemuck::Pod {
    const LAYOUT: wgpu::VertexBufferLayout<'static>;
}

impl VertexLayout for ColorVertex {
    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ColorVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // color: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

impl VertexLayout for NormalVertex {
    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<NormalVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute_end(layout: &wgpu::VertexBufferLayout<'_>) -> u64 {
        layout
            .attributes
            .iter()
            .map(|a| a.offset + a.format.size())
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn color_vertex_layout_covers_stride() {
        let layout = ColorVertex::LAYOUT;
        assert_eq!(layout.array_stride, 24);
        assert_eq!(attribute_end(&layout), layout.array_stride);
    }

    #[test]
    fn normal_vertex_layout_covers_stride() {
        let layout = NormalVertex::LAYOUT;
        assert_eq!(layout.array_stride, 24);
        assert_eq!(attribute_end(&layout), layout.array_stride);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }
}
