//! wgpu rendering for the facet examples: device setup, a flat-color
//! pipeline for the twisted triangle and a lit pipeline (Gouraud or
//! Phong) for indexed meshes.

pub mod flat;
pub mod gpu;
pub mod perf;
pub mod render_state;
pub mod shaded;
pub mod vertex;

pub use flat::FlatPipeline;
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use perf::FrameTimer;
pub use render_state::RenderState;
pub use shaded::{DrawData, GpuMesh, ShadedPipeline, ShadedUniforms, ShadingModel};
