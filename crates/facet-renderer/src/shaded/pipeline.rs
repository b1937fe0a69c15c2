use facet_geometry::NormalVertex;

use super::mesh::GpuMesh;
use super::uniforms::ShadedUniforms;
use crate::render_state::DEPTH_FORMAT;
use crate::vertex::VertexLayout;

const LIGHTING_WGSL: &str = include_str!("../shaders/lighting.wgsl");
const GOURAUD_WGSL: &str = include_str!("../shaders/gouraud.wgsl");
const PHONG_WGSL: &str = include_str!("../shaders/phong.wgsl");

/// Where the lights are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingModel {
    /// Per vertex, colors interpolated.
    Gouraud,
    /// Per fragment, normals interpolated.
    Phong,
}

impl ShadingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadingModel::Gouraud => "gouraud",
            ShadingModel::Phong => "phong",
        }
    }

    /// Full WGSL source: shared lighting block followed by the entry points.
    pub fn shader_source(&self) -> String {
        let entry_points = match self {
            ShadingModel::Gouraud => GOURAUD_WGSL,
            ShadingModel::Phong => PHONG_WGSL,
        };
        format!("{LIGHTING_WGSL}\n{entry_points}")
    }
}

/// Uniform buffer and bind group for one drawn mesh.
struct UniformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Depth-tested lit pipeline with one uniform slot per mesh drawn in a frame.
pub struct ShadedPipeline {
    model: ShadingModel,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    slots: Vec<UniformSlot>,
}

impl ShadedPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, model: ShadingModel) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{} shader", model.as_str())),
            source: wgpu::ShaderSource::Wgsl(model.shader_source().into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shaded bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<ShadedUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shaded pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} pipeline", model.as_str())),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[NormalVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // loaded meshes do not promise consistent winding
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        tracing::info!("{} pipeline ready", model.as_str());

        Self {
            model,
            pipeline,
            bind_group_layout,
            slots: Vec::new(),
        }
    }

    pub fn model(&self) -> ShadingModel {
        self.model
    }

    fn ensure_slots(&mut self, device: &wgpu::Device, count: usize) {
        while self.slots.len() < count {
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("shaded uniforms"),
                size: std::mem::size_of::<ShadedUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("shaded bind group"),
                layout: &self.bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            self.slots.push(UniformSlot { buffer, bind_group });
        }
    }

    /// Write the uniforms of slot `slot`, allocating slots up to it.
    pub fn write_uniforms(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        slot: usize,
        uniforms: &ShadedUniforms,
    ) {
        self.ensure_slots(device, slot + 1);
        queue.write_buffer(&self.slots[slot].buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Draw `mesh` with the uniforms last written to `slot`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, slot: usize, mesh: &GpuMesh) {
        let Some(uniforms) = self.slots.get(slot) else {
            tracing::warn!("no uniforms written for slot {slot}, skipping draw");
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &uniforms.bind_group, &[]);
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_sources_share_the_lighting_block() {
        for model in [ShadingModel::Gouraud, ShadingModel::Phong] {
            let src = model.shader_source();
            assert!(src.starts_with(LIGHTING_WGSL));
            assert!(src.contains("fn vs_main"));
            assert!(src.contains("fn fs_main"));
            assert_eq!(src.matches("struct Uniforms").count(), 1);
        }
    }

    #[test]
    fn gouraud_shades_in_vertex_stage() {
        let src = ShadingModel::Gouraud.shader_source();
        let vs = &src[src.find("fn vs_main").unwrap_or(0)..src.find("fn fs_main").unwrap_or(0)];
        assert!(vs.contains("shade("));
    }

    #[test]
    fn phong_shades_in_fragment_stage() {
        let src = ShadingModel::Phong.shader_source();
        let fs = &src[src.find("fn fs_main").unwrap_or(0)..];
        assert!(fs.contains("shade("));
    }

    #[test]
    fn model_names() {
        assert_eq!(ShadingModel::Gouraud.as_str(), "gouraud");
        assert_eq!(ShadingModel::Phong.as_str(), "phong");
    }
}
