use facet_geometry::lighting::limit_lights;
use facet_geometry::matrix::{mul, normal_matrix, to_wgpu_depth};
use facet_geometry::{Mat4, PhongMaterial, PointLight, MAX_LIGHTS};

/// One point light as laid out in WGSL (`vec4` per field).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// Camera-space position, w = 1.
    pub position: [f32; 4],
    pub intensity: [f32; 4],
    pub ambient: [f32; 4],
}

impl LightUniform {
    fn from_light(light: &PointLight) -> Self {
        let [x, y, z] = light.position;
        let [ir, ig, ib] = light.intensity;
        let [ar, ag, ab] = light.ambient;
        Self {
            position: [x, y, z, 1.0],
            intensity: [ir, ig, ib, 0.0],
            ambient: [ar, ag, ab, 0.0],
        }
    }
}

/// Uniform block shared by the Gouraud and Phong shaders.
///
/// Field order and padding match `Uniforms` in `lighting.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadedUniforms {
    /// Model-view matrix.
    pub mv: [f32; 16],
    /// Inverse transpose of `mv`, for normals.
    pub norm: [f32; 16],
    /// Projection with wgpu's `[0, 1]` depth range.
    pub proj: [f32; 16],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    /// RGB specular, shininess in w.
    pub specular: [f32; 4],
    pub light_count: u32,
    pub _pad: [u32; 3],
    pub lights: [LightUniform; MAX_LIGHTS],
}

/// Everything one lit draw needs, in world terms.
#[derive(Debug, Clone, Copy)]
pub struct DrawData<'a> {
    pub model: Mat4,
    pub view: Mat4,
    /// GL-style projection (`[-1, 1]` depth).
    pub projection: Mat4,
    pub material: PhongMaterial,
    /// World-space lights.
    pub lights: &'a [PointLight],
}

impl DrawData<'_> {
    /// Camera-space uniforms: `mv = view · model`, lights moved by `view`.
    pub fn uniforms(&self) -> ShadedUniforms {
        let mv = mul(&self.view, &self.model);
        let lights = limit_lights(self.lights);

        let mut packed = [LightUniform::default(); MAX_LIGHTS];
        for (slot, light) in packed.iter_mut().zip(lights) {
            *slot = LightUniform::from_light(&light.to_camera_space(&self.view));
        }

        let m = &self.material;
        ShadedUniforms {
            mv,
            norm: normal_matrix(&mv),
            proj: to_wgpu_depth(&self.projection),
            ambient: [m.ambient[0], m.ambient[1], m.ambient[2], 1.0],
            diffuse: [m.diffuse[0], m.diffuse[1], m.diffuse[2], 1.0],
            specular: [m.specular[0], m.specular[1], m.specular[2], m.shininess],
            light_count: lights.len() as u32,
            _pad: [0; 3],
            lights: packed,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
