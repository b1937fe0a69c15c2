//! The interactive examples. Each scene keeps its parameters on the CPU
//! and owns the GPU resources it draws with, created on first `prepare`.

mod lighting;
mod mesh_viewer;
mod sphere;
mod triangle;

pub use lighting::{lights_from_config, material_from_config, rgb_from_hex};
pub use mesh_viewer::MeshViewerScene;
pub use sphere::SphereScene;
pub use triangle::TriangleScene;

use facet_common::FacetError;
use facet_config::FacetConfig;
use facet_geometry::{PhongMaterial, PointLight};
use facet_renderer::{GpuContext, ShadingModel};

use crate::cli::Command;
use crate::input::Action;

/// Which example runs, and so which keybind group is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Triangle,
    Sphere,
    MeshViewer,
}

impl SceneKind {
    /// Group name in `facet_config::keybinds::scene_groups`.
    pub fn keybind_group(&self) -> &'static str {
        match self {
            SceneKind::Triangle => "triangle",
            SceneKind::Sphere => "sphere",
            SceneKind::MeshViewer => "mesh",
        }
    }
}

pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Short description of the current state for the window title.
    fn title(&self) -> String;

    /// Apply a bound key action. Returns `true` when a redraw is needed.
    fn on_action(&mut self, action: Action) -> bool;

    /// Left-button drag by `dx`, `dy` pixels.
    fn on_drag(&mut self, _dx: f64, _dy: f64) -> bool {
        false
    }

    /// Advance animation to `seconds` since start.
    fn update(&mut self, _seconds: f32) {}

    /// Whether the scene changes on its own and wants continuous redraws.
    fn is_animated(&self) -> bool {
        false
    }

    /// Replace material and lights after a config reload.
    fn set_lighting(&mut self, _material: PhongMaterial, _lights: Vec<PointLight>) {}

    /// Create or refresh GPU resources and write this frame's uniforms.
    fn prepare(&mut self, gpu: &GpuContext);

    /// Record draw calls into the main pass.
    fn draw(&self, pass: &mut wgpu::RenderPass<'_>);
}

/// Build the scene for a subcommand.
pub fn build(command: &Command, config: &FacetConfig) -> Result<Box<dyn Scene>, FacetError> {
    Ok(match command {
        Command::Triangle { style } => {
            let style = style.map(Into::into).unwrap_or(config.triangle.style);
            Box::new(TriangleScene::new(&config.triangle, style))
        }
        Command::Sphere => Box::new(SphereScene::new(config, ShadingModel::Gouraud)),
        Command::Mesh { meshes } => {
            let paths: Vec<std::path::PathBuf> = if meshes.is_empty() {
                config.viewer.meshes.iter().map(Into::into).collect()
            } else {
                meshes.clone()
            };
            if paths.is_empty() {
                tracing::info!("no mesh files given, showing the sphere");
                Box::new(SphereScene::new(config, ShadingModel::Phong).in_viewer())
            } else {
                Box::new(MeshViewerScene::load(&paths, config)?)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_picks_scene_per_command() {
        let config = FacetConfig::default();
        let triangle = build(&Command::Triangle { style: None }, &config).unwrap();
        assert_eq!(triangle.kind(), SceneKind::Triangle);
        let sphere = build(&Command::Sphere, &config).unwrap();
        assert_eq!(sphere.kind(), SceneKind::Sphere);
        assert!(sphere.is_animated());
    }

    #[test]
    fn mesh_without_files_falls_back_to_sphere() {
        let config = FacetConfig::default();
        let scene = build(&Command::Mesh { meshes: Vec::new() }, &config).unwrap();
        assert_eq!(scene.kind(), SceneKind::MeshViewer);
        assert!(scene.title().contains("sphere"));
        assert!(scene.is_animated());
    }

    #[test]
    fn mesh_with_only_bad_files_fails() {
        let config = FacetConfig::default();
        let command = Command::Mesh {
            meshes: vec!["/definitely/missing.obj".into()],
        };
        assert!(build(&command, &config).is_err());
    }

    #[test]
    fn keybind_groups_exist_in_config() {
        let binds = facet_config::schema::KeybindConfig::default();
        let groups = facet_config::keybinds::scene_groups(&binds);
        for kind in [SceneKind::Triangle, SceneKind::Sphere, SceneKind::MeshViewer] {
            assert!(groups.iter().any(|(name, _)| *name == kind.keybind_group()));
        }
    }
}
