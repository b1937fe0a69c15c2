//! The lit UV sphere: Gouraud in the sphere example, Phong as the mesh
//! viewer's fallback.

use facet_config::FacetConfig;
use facet_geometry::matrix::IDENTITY;
use facet_geometry::view::{perspective_projection, sphere_model_at, sphere_view};
use facet_geometry::{Mat4, PhongMaterial, PointLight, Sphere, ViewerCamera};
use facet_renderer::{DrawData, GpuContext, GpuMesh, ShadedPipeline, ShadingModel};

use super::{lights_from_config, material_from_config, Scene, SceneKind};
use crate::input::Action;

struct SphereGpu {
    pipeline: ShadedPipeline,
    mesh: Option<GpuMesh>,
}

pub struct SphereScene {
    sphere: Sphere,
    shading: ShadingModel,
    animate: bool,
    seconds: f32,
    /// Set when shown by the mesh viewer: camera from the viewer, zoom keys live.
    camera: Option<ViewerCamera>,
    material: PhongMaterial,
    lights: Vec<PointLight>,
    gpu: Option<SphereGpu>,
}

impl SphereScene {
    pub fn new(config: &FacetConfig, shading: ShadingModel) -> Self {
        Self {
            sphere: Sphere::new(
                [0.0; 3],
                config.sphere.radius,
                config.sphere.grid_nx,
                config.sphere.grid_ny,
            ),
            shading,
            animate: config.sphere.animate,
            seconds: 0.0,
            camera: None,
            material: material_from_config(&config.material),
            lights: lights_from_config(&config.lights),
            gpu: None,
        }
    }

    /// Show the sphere through the mesh viewer's camera. It keeps spinning.
    pub fn in_viewer(mut self) -> Self {
        self.camera = Some(ViewerCamera::default());
        self
    }

    pub fn grid_size(&self) -> (u32, u32) {
        self.sphere.grid_size()
    }

    pub fn camera(&self) -> Option<&ViewerCamera> {
        self.camera.as_ref()
    }

    fn model(&self) -> Mat4 {
        if self.animate {
            sphere_model_at(self.seconds)
        } else {
            IDENTITY
        }
    }

    fn view(&self) -> Mat4 {
        match &self.camera {
            Some(camera) => camera.view(),
            None => sphere_view(),
        }
    }

    /// Uniform inputs for a `width` × `height` surface.
    pub fn draw_data(&self, width: u32, height: u32) -> DrawData<'_> {
        DrawData {
            model: self.model(),
            view: self.view(),
            projection: perspective_projection(width, height),
            material: self.material,
            lights: &self.lights,
        }
    }
}

impl Scene for SphereScene {
    fn kind(&self) -> SceneKind {
        if self.camera.is_some() {
            SceneKind::MeshViewer
        } else {
            SceneKind::Sphere
        }
    }

    fn title(&self) -> String {
        let (nx, ny) = self.sphere.grid_size();
        format!("sphere ({}): grid {nx}x{ny}", self.shading.as_str())
    }

    fn on_action(&mut self, action: Action) -> bool {
        match action {
            Action::GridXMore => self.sphere.step_grid(1, 0),
            Action::GridXLess => self.sphere.step_grid(-1, 0),
            Action::GridYMore => self.sphere.step_grid(0, 1),
            Action::GridYLess => self.sphere.step_grid(0, -1),
            Action::ZoomIn | Action::ZoomOut | Action::ResetView => {
                let Some(camera) = self.camera.as_mut() else {
                    return false;
                };
                match action {
                    Action::ZoomIn => camera.zoom_in(),
                    Action::ZoomOut => camera.zoom_out(),
                    _ => camera.reset(),
                }
                return true;
            }
            _ => return false,
        }
        let (nx, ny) = self.sphere.grid_size();
        tracing::debug!("sphere grid {nx}x{ny}");
        true
    }

    fn update(&mut self, seconds: f32) {
        self.seconds = seconds;
    }

    fn is_animated(&self) -> bool {
        self.animate
    }

    fn set_lighting(&mut self, material: PhongMaterial, lights: Vec<PointLight>) {
        self.material = material;
        self.lights = lights;
    }

    fn prepare(&mut self, gpu: &GpuContext) {
        let mut state = match self.gpu.take() {
            Some(state) => state,
            None => SphereGpu {
                pipeline: ShadedPipeline::new(&gpu.device, gpu.format(), self.shading),
                mesh: None,
            },
        };

        if self.sphere.take_dirty() {
            match self.sphere.build() {
                Ok(mesh) => state.mesh = GpuMesh::new(&gpu.device, &mesh, "sphere"),
                Err(e) => tracing::error!("sphere rebuild failed: {e}"),
            }
        }

        let uniforms = self
            .draw_data(gpu.size.width, gpu.size.height)
            .uniforms();
        state
            .pipeline
            .write_uniforms(&gpu.device, &gpu.queue, 0, &uniforms);
        self.gpu = Some(state);
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if let Some(SphereGpu {
            pipeline,
            mesh: Some(mesh),
        }) = &self.gpu
        {
            pipeline.draw(pass, 0, mesh);
        }
    }
}
