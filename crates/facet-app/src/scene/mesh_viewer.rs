//! Phong-shaded OBJ/PLY meshes laid out in a row, rotated by mouse drags.

use std::path::PathBuf;

use facet_common::{FacetError, MeshError};
use facet_config::FacetConfig;
use facet_geometry::view::{fit_in_row, perspective_projection, RowSlot};
use facet_geometry::{IndexedMesh, PhongMaterial, PointLight, TriMesh, ViewerCamera};
use facet_renderer::{DrawData, GpuContext, GpuMesh, ShadedPipeline, ShadingModel};

use super::{lights_from_config, material_from_config, Scene, SceneKind};
use crate::input::Action;

/// One loaded mesh and its place in the row.
struct ViewerMesh {
    name: String,
    mesh: IndexedMesh,
    slot: RowSlot,
}

struct ViewerGpu {
    pipeline: ShadedPipeline,
    /// Parallel to `MeshViewerScene::meshes`; `None` for meshes with nothing to draw.
    meshes: Vec<Option<GpuMesh>>,
}

pub struct MeshViewerScene {
    meshes: Vec<ViewerMesh>,
    camera: ViewerCamera,
    material: PhongMaterial,
    lights: Vec<PointLight>,
    gpu: Option<ViewerGpu>,
}

impl MeshViewerScene {
    /// Load every file, skipping the ones that fail. Errors only when
    /// none of them loads.
    pub fn load(paths: &[PathBuf], config: &FacetConfig) -> Result<Self, FacetError> {
        let mut loaded = Vec::new();
        let mut last_error: Option<MeshError> = None;
        for path in paths {
            match TriMesh::load(path) {
                Ok(mesh) => loaded.push(mesh),
                Err(e) => {
                    tracing::error!("skipping {}: {e}", path.display());
                    last_error = Some(e);
                }
            }
        }
        if loaded.is_empty() {
            return Err(match last_error {
                Some(e) => e.into(),
                None => FacetError::Other("no meshes to show".into()),
            });
        }
        Ok(Self::from_meshes(loaded, config))
    }

    pub fn from_meshes(meshes: Vec<TriMesh>, config: &FacetConfig) -> Self {
        let count = meshes.len();
        let meshes = meshes
            .into_iter()
            .enumerate()
            .map(|(index, mesh)| {
                let slot = match mesh.bounding_box() {
                    Some(bbox) => fit_in_row(&bbox, index, count),
                    None => RowSlot {
                        scale: 1.0,
                        center: [0.0; 3],
                        x_shift: 0.0,
                    },
                };
                ViewerMesh {
                    name: mesh.name.clone(),
                    mesh: mesh.to_indexed(),
                    slot,
                }
            })
            .collect();

        let camera = ViewerCamera {
            z: config.viewer.camera_z,
            degrees_per_pixel: config.viewer.degrees_per_pixel,
            ..ViewerCamera::default()
        };

        Self {
            meshes,
            camera,
            material: material_from_config(&config.material),
            lights: lights_from_config(&config.lights),
            gpu: None,
        }
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn camera(&self) -> &ViewerCamera {
        &self.camera
    }

    /// Uniform inputs of mesh `index` for a `width` × `height` surface.
    pub fn draw_data(&self, index: usize, width: u32, height: u32) -> Option<DrawData<'_>> {
        let entry = self.meshes.get(index)?;
        Some(DrawData {
            model: entry.slot.model(&self.camera.rotation()),
            view: self.camera.view(),
            projection: perspective_projection(width, height),
            material: self.material,
            lights: &self.lights,
        })
    }
}

impl Scene for MeshViewerScene {
    fn kind(&self) -> SceneKind {
        SceneKind::MeshViewer
    }

    fn title(&self) -> String {
        let names: Vec<&str> = self.meshes.iter().map(|m| m.name.as_str()).collect();
        format!("mesh viewer: {}", names.join(", "))
    }

    fn on_action(&mut self, action: Action) -> bool {
        match action {
            Action::ZoomIn => self.camera.zoom_in(),
            Action::ZoomOut => self.camera.zoom_out(),
            Action::ResetView => self.camera.reset(),
            _ => return false,
        }
        tracing::debug!("camera z {:.3}", self.camera.z);
        true
    }

    fn on_drag(&mut self, dx: f64, dy: f64) -> bool {
        self.camera.drag(dx, dy);
        true
    }

    fn set_lighting(&mut self, material: PhongMaterial, lights: Vec<PointLight>) {
        self.material = material;
        self.lights = lights;
    }

    fn prepare(&mut self, gpu: &GpuContext) {
        let mut state = match self.gpu.take() {
            Some(state) => state,
            None => ViewerGpu {
                pipeline: ShadedPipeline::new(&gpu.device, gpu.format(), ShadingModel::Phong),
                meshes: self
                    .meshes
                    .iter()
                    .map(|m| GpuMesh::new(&gpu.device, &m.mesh, &m.name))
                    .collect(),
            },
        };

        for index in 0..self.meshes.len() {
            if let Some(data) = self.draw_data(index, gpu.size.width, gpu.size.height) {
                state
                    .pipeline
                    .write_uniforms(&gpu.device, &gpu.queue, index, &data.uniforms());
            }
        }
        self.gpu = Some(state);
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        let Some(state) = &self.gpu else {
            return;
        };
        for (slot, mesh) in state.meshes.iter().enumerate() {
            if let Some(mesh) = mesh {
                state.pipeline.draw(pass, slot, mesh);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
