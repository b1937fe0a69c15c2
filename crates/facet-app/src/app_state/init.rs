//! Window creation, renderer initialization and config watching.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use facet_common::Color;
use facet_config::ConfigReloader;
use facet_renderer::render_state::clear_color;
use facet_renderer::RenderState;

use super::core::FacetApp;

impl FacetApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let render_state =
            pollster::block_on(RenderState::new(window.clone(), self.config.window.vsync));

        match render_state {
            Ok(mut rs) => {
                rs.clear_color = clear_color(&self.clear_color());
                tracing::info!(
                    "Renderer ready ({}x{})",
                    rs.gpu.size.width,
                    rs.gpu.size.height
                );
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        self.start_config_watch();
        true
    }

    pub(super) fn clear_color(&self) -> Color {
        Color::from_hex(&self.config.colors.clear).unwrap_or_else(|| {
            tracing::warn!("invalid clear color '{}'", self.config.colors.clear);
            Color::BLACK
        })
    }

    fn start_config_watch(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        match ConfigReloader::start(path) {
            Ok(reloader) => {
                tracing::info!("Watching {} for changes", reloader.path().display());
                self.reloader = Some(reloader);
            }
            Err(e) => tracing::warn!("Config hot reload disabled: {e}"),
        }
    }
}
