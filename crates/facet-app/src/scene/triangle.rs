//! The twisted triangle in its three styles.
//!
//! * immediate: geometry rebuilt and transformed on the CPU every frame,
//!   the shader only passes it through;
//! * buffered: loose parameters and a changed flag, uploaded only after a
//!   change, the shader applies the MVP;
//! * object: a [`TwistTriangle`] owns and clamps the parameters and its
//!   dirty flag decides when to upload.

use facet_config::schema::{TriangleConfig, TriangleStyle};
use facet_geometry::matrix::{mul, to_wgpu_depth, transform_point, IDENTITY};
use facet_geometry::twist::{subdivide, DEFAULT_CORNERS, DOWN_COLOR, UP_COLOR};
use facet_geometry::vector::{centroid, Vec3};
use facet_geometry::view::{triangle_projection, triangle_view};
use facet_geometry::{ColorVertex, Mat4, TwistTriangle};
use facet_renderer::{FlatPipeline, GpuContext};

use super::{Scene, SceneKind};
use crate::input::Action;

/// Parameters of the immediate and buffered styles.
#[derive(Debug, Clone, PartialEq)]
struct TriangleParams {
    level: u32,
    max_level: u32,
    twist_degrees: f32,
    colors: (Vec3, Vec3),
}

impl TriangleParams {
    fn vertices(&self) -> Vec<ColorVertex> {
        let [p0, p1, p2] = DEFAULT_CORNERS;
        let mut out = Vec::with_capacity(facet_geometry::twist::vertex_count(self.level));
        subdivide(
            p0,
            p1,
            p2,
            self.level,
            self.colors.0,
            self.colors.1,
            self.twist_degrees,
            centroid(p0, p1, p2),
            &mut out,
        );
        out
    }
}

#[derive(Debug, Clone)]
enum TriangleSource {
    Immediate(TriangleParams),
    Buffered {
        params: TriangleParams,
        changed: bool,
    },
    Object(TwistTriangle),
}

/// What to hand the flat pipeline this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpload {
    /// New vertex data, `None` when the uploaded buffer is still current.
    pub vertices: Option<Vec<ColorVertex>>,
    pub mvp: Mat4,
}

pub struct TriangleScene {
    source: TriangleSource,
    twist_step: f32,
    pipeline: Option<FlatPipeline>,
}

impl TriangleScene {
    pub fn new(config: &TriangleConfig, style: TriangleStyle) -> Self {
        let colors = (
            super::rgb_from_hex(&config.up_color, UP_COLOR),
            super::rgb_from_hex(&config.down_color, DOWN_COLOR),
        );
        let params = TriangleParams {
            level: config.subdivisions.min(config.max_subdivisions),
            max_level: config.max_subdivisions,
            twist_degrees: config.twist_degrees,
            colors,
        };
        let source = match style {
            TriangleStyle::Immediate => TriangleSource::Immediate(params),
            TriangleStyle::Buffered => TriangleSource::Buffered {
                params,
                changed: true,
            },
            TriangleStyle::Object => {
                let mut triangle =
                    TwistTriangle::with_limit(config.subdivisions, config.max_subdivisions);
                triangle.set_twist_degrees(config.twist_degrees);
                triangle.set_colors(colors.0, colors.1);
                TriangleSource::Object(triangle)
            }
        };
        tracing::info!("triangle scene, {} style", style.as_str());
        Self {
            source,
            twist_step: config.twist_step,
            pipeline: None,
        }
    }

    pub fn style(&self) -> TriangleStyle {
        match self.source {
            TriangleSource::Immediate(_) => TriangleStyle::Immediate,
            TriangleSource::Buffered { .. } => TriangleStyle::Buffered,
            TriangleSource::Object(_) => TriangleStyle::Object,
        }
    }

    pub fn subdivisions(&self) -> u32 {
        match &self.source {
            TriangleSource::Immediate(p) | TriangleSource::Buffered { params: p, .. } => p.level,
            TriangleSource::Object(t) => t.subdivisions(),
        }
    }

    pub fn twist_degrees(&self) -> f32 {
        match &self.source {
            TriangleSource::Immediate(p) | TriangleSource::Buffered { params: p, .. } => {
                p.twist_degrees
            }
            TriangleSource::Object(t) => t.twist_degrees(),
        }
    }

    fn step_subdivisions(&mut self, delta: i32) {
        match &mut self.source {
            TriangleSource::Immediate(p) => {
                p.level = p.level.saturating_add_signed(delta).min(p.max_level);
            }
            TriangleSource::Buffered { params, changed } => {
                params.level = params.level.saturating_add_signed(delta).min(params.max_level);
                *changed = true;
            }
            TriangleSource::Object(t) => t.step_subdivisions(delta),
        }
    }

    fn add_twist(&mut self, degrees: f32) {
        match &mut self.source {
            TriangleSource::Immediate(p) => p.twist_degrees += degrees,
            TriangleSource::Buffered { params, changed } => {
                params.twist_degrees += degrees;
                *changed = true;
            }
            TriangleSource::Object(t) => t.set_twist_degrees(t.twist_degrees() + degrees),
        }
    }

    /// Vertices and MVP for a `width` × `height` surface.
    pub fn frame(&mut self, width: u32, height: u32) -> FrameUpload {
        let mvp = to_wgpu_depth(&mul(&triangle_projection(width, height), &triangle_view()));
        match &mut self.source {
            TriangleSource::Immediate(params) => {
                let vertices = params
                    .vertices()
                    .into_iter()
                    .map(|v| ColorVertex {
                        position: transform_point(&mvp, v.position),
                        color: v.color,
                    })
                    .collect();
                FrameUpload {
                    vertices: Some(vertices),
                    mvp: IDENTITY,
                }
            }
            TriangleSource::Buffered { params, changed } => FrameUpload {
                vertices: std::mem::take(changed).then(|| params.vertices()),
                mvp,
            },
            TriangleSource::Object(triangle) => FrameUpload {
                vertices: triangle.take_dirty().then(|| triangle.vertices()),
                mvp,
            },
        }
    }
}

impl Scene for TriangleScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Triangle
    }

    fn title(&self) -> String {
        format!(
            "triangle ({}): subdivisions {}, twist {}°",
            self.style().as_str(),
            self.subdivisions(),
            self.twist_degrees()
        )
    }

    fn on_action(&mut self, action: Action) -> bool {
        match action {
            Action::SubdivideMore => self.step_subdivisions(1),
            Action::SubdivideLess => self.step_subdivisions(-1),
            Action::TwistCcw => self.add_twist(self.twist_step),
            Action::TwistCw => self.add_twist(-self.twist_step),
            _ => return false,
        }
        tracing::debug!(
            "subdivisions {}, twist {}",
            self.subdivisions(),
            self.twist_degrees()
        );
        true
    }

    fn prepare(&mut self, gpu: &GpuContext) {
        let mut pipeline = match self.pipeline.take() {
            Some(p) => p,
            None => {
                // a fresh buffer needs the current vertices regardless of style
                self.mark_changed();
                FlatPipeline::new(&gpu.device, gpu.format())
            }
        };

        let upload = self.frame(gpu.size.width, gpu.size.height);
        if let Some(vertices) = upload.vertices {
            pipeline.upload(&gpu.device, &gpu.queue, &vertices);
        }
        pipeline.set_mvp(&gpu.queue, &upload.mvp);
        self.pipeline = Some(pipeline);
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if let Some(pipeline) = &self.pipeline {
            pipeline.draw(pass);
        }
    }
}

impl TriangleScene {
    fn mark_changed(&mut self) {
        match &mut self.source {
            TriangleSource::Immediate(_) => {}
            TriangleSource::Buffered { changed, .. } => *changed = true,
            TriangleSource::Object(t) => {
                let level = t.subdivisions();
                t.set_subdivisions(level);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
