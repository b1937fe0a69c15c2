//! Config reload polling and redraw scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use facet_config::FacetConfig;
use facet_renderer::render_state::clear_color;

use crate::input::KeyRegistry;
use crate::scene::{lights_from_config, material_from_config};

use super::core::FacetApp;
use super::types::POLL_INTERVAL;

impl FacetApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_config(now);
        }

        if self.needs_redraw || self.scene.is_animated() {
            self.request_redraw();
            event_loop.set_control_flow(ControlFlow::Poll);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(now + POLL_INTERVAL));
        }
    }

    fn poll_config(&mut self, now: Instant) {
        let Some(reloader) = self.reloader.as_mut() else {
            return;
        };
        if let Some(config) = reloader.poll(now) {
            self.apply_config(config);
        }
    }

    /// Reapply material, lights, clear color and keybinds from a reloaded config.
    pub(super) fn apply_config(&mut self, config: FacetConfig) {
        tracing::info!("Config reloaded");
        self.scene.set_lighting(
            material_from_config(&config.material),
            lights_from_config(&config.lights),
        );
        self.registry = KeyRegistry::for_scene(&config.keybinds, self.scene.kind());
        self.config = config;

        let color = self.clear_color();
        if let Some(rs) = self.render_state.as_mut() {
            rs.clear_color = clear_color(&color);
        }
        self.request_redraw();
    }
}
