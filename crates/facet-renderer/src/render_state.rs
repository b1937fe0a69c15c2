use std::sync::Arc;
use winit::window::Window;

use facet_common::Color;

use crate::gpu::{GpuContext, RendererError};

/// Depth format shared by every pipeline drawn into the main pass.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// ---------------------------------------------------------------------------
// RenderState
// ---------------------------------------------------------------------------

/// Surface, depth buffer and clear color of the main window.
pub struct RenderState {
    pub gpu: GpuContext,
    pub clear_color: wgpu::Color,
    depth_view: wgpu::TextureView,
}

/// Clear color from a config color, channel values as written.
pub fn clear_color(color: &Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_unit();
    wgpu::Color { r, g, b, a }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth buffer"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

impl RenderState {
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, vsync).await?;
        let depth_view = create_depth_view(&gpu.device, gpu.size.width, gpu.size.height);
        Ok(Self {
            gpu,
            clear_color: clear_color(&Color::BLACK),
            depth_view,
        })
    }

    /// Reconfigure the surface and rebuild the depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.depth_view = create_depth_view(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
    }

    /// Clear color and depth, let `draw` record into the pass, then present.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame(
        &mut self,
        draw: impl FnOnce(&mut wgpu::RenderPass<'_>),
    ) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.gpu.format()),
            ..Default::default()
        });

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("facet frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("facet main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            draw(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_clears_to_opaque_black() {
        let c = clear_color(&Color::BLACK);
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn clear_color_keeps_hex_channels() {
        let grey = Color::from_hex("#808080").unwrap();
        let c = clear_color(&grey);
        assert!((c.r - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(c.r, c.b);
    }

    #[test]
    fn depth_format_is_32_bit_float() {
        assert_eq!(DEPTH_FORMAT, wgpu::TextureFormat::Depth32Float);
    }
}
