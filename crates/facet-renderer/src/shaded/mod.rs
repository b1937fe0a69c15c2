//! Lit rendering of indexed meshes.
//!
//! One pipeline per [`ShadingModel`]: Gouraud evaluates the lights per
//! vertex, Phong per fragment. Both share the uniform block in
//! [`ShadedUniforms`] and the light loop in `lighting.wgsl`.

mod mesh;
mod pipeline;
mod uniforms;

pub use mesh::GpuMesh;
pub use pipeline::{ShadedPipeline, ShadingModel};
pub use uniforms::{DrawData, LightUniform, ShadedUniforms};
