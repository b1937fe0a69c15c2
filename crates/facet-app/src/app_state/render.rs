//! Frame rendering.

use std::time::Instant;

use super::core::FacetApp;

impl FacetApp {
    /// Advance the scene, upload its data and draw one frame.
    pub(super) fn render_frame(&mut self) {
        let Some(rs) = self.render_state.as_mut() else {
            return;
        };

        self.timer.begin_frame();
        self.scene.update(self.started.elapsed().as_secs_f32());
        self.scene.prepare(&rs.gpu);

        let scene = &self.scene;
        if let Err(e) = rs.render_frame(|pass| scene.draw(pass)) {
            tracing::error!("Render error: {e}");
        }

        if self.config.logging.show_fps && self.timer.report_due(Instant::now()) {
            tracing::info!(
                "{:.1} fps ({:.2} ms/frame)",
                self.timer.fps(),
                self.timer.frame_time_ms()
            );
        }
    }
}
