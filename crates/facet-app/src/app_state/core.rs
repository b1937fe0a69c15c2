//! `FacetApp` struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use facet_config::{ConfigReloader, FacetConfig};
use facet_renderer::{FrameTimer, RenderState};

use crate::input::{DragTracker, KeyRegistry};
use crate::scene::Scene;

pub struct FacetApp {
    pub(super) config: FacetConfig,
    pub(super) config_path: Option<PathBuf>,
    pub(super) scene: Box<dyn Scene>,
    pub(super) registry: KeyRegistry,
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) reloader: Option<ConfigReloader>,
    pub(super) timer: FrameTimer,
    pub(super) drag: DragTracker,
    pub(super) started: Instant,
    pub(super) last_poll: Instant,
    pub(super) needs_redraw: bool,
    pub(super) should_exit: bool,
}

impl FacetApp {
    /// `config_path` is watched for changes once the window is up.
    pub fn new(config: FacetConfig, config_path: Option<PathBuf>, scene: Box<dyn Scene>) -> Self {
        let registry = KeyRegistry::for_scene(&config.keybinds, scene.kind());
        tracing::info!("Key registry loaded ({} bindings)", registry.len());

        let now = Instant::now();
        Self {
            config,
            config_path,
            scene,
            registry,
            window: None,
            render_state: None,
            reloader: None,
            timer: FrameTimer::new(),
            drag: DragTracker::default(),
            started: now,
            last_poll: now,
            needs_redraw: true,
            should_exit: false,
        }
    }

    /// `"<window title> - <scene state>"`.
    pub(super) fn window_title(&self) -> String {
        format!("{} - {}", self.config.window.title, self.scene.title())
    }

    pub(super) fn update_window_title(&self) {
        if let Some(window) = &self.window {
            window.set_title(&self.window_title());
        }
    }

    pub(super) fn request_redraw(&mut self) {
        self.needs_redraw = true;
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
