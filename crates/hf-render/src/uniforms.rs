use glam::Vec3;
use hf_core::camera::Camera;
use hf_core::scene::{Attenuation, DirectionalLight, PointLight, SceneLighting, SpotLight};

// Every vec3 is widened to vec4 so the Rust layout matches WGSL uniform
// alignment without manual padding fields.

fn vec4(v: Vec3) -> [f32; 4] {
    v.extend(0.0).to_array()
}

fn attenuation(a: Attenuation) -> [f32; 4] {
    [a.constant, a.linear, a.quadratic, 0.0]
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_pos: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix().to_cols_array_2d(),
            view_pos: vec4(camera.position),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirLightRaw {
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

impl From<&DirectionalLight> for DirLightRaw {
    fn from(light: &DirectionalLight) -> Self {
        Self {
            direction: vec4(light.direction),
            ambient: vec4(light.ambient),
            diffuse: vec4(light.diffuse),
            specular: vec4(light.specular),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightRaw {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub attenuation: [f32; 4],
}

impl From<&PointLight> for PointLightRaw {
    fn from(light: &PointLight) -> Self {
        Self {
            position: vec4(light.position),
            ambient: vec4(light.ambient),
            diffuse: vec4(light.diffuse),
            specular: vec4(light.specular),
            attenuation: attenuation(light.attenuation),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightRaw {
    pub position: [f32; 4],
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub attenuation: [f32; 4],
    /// x: inner cut-off, y: outer cut-off (cosines)
    pub cut_off: [f32; 4],
}

impl From<&SpotLight> for SpotLightRaw {
    fn from(light: &SpotLight) -> Self {
        Self {
            position: vec4(light.position),
            direction: vec4(light.direction),
            ambient: vec4(light.ambient),
            diffuse: vec4(light.diffuse),
            specular: vec4(light.specular),
            attenuation: attenuation(light.attenuation),
            cut_off: [light.cut_off, light.outer_cut_off, 0.0, 0.0],
        }
    }
}

pub const POINT_LIGHT_COUNT: usize = 4;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub dir_light: DirLightRaw,
    pub point_lights: [PointLightRaw; POINT_LIGHT_COUNT],
    pub spot_light: SpotLightRaw,
    /// x: shininess
    pub material: [f32; 4],
}

impl From<&SceneLighting> for LightsUniform {
    fn from(lighting: &SceneLighting) -> Self {
        Self {
            dir_light: (&lighting.directional).into(),
            point_lights: lighting.points.each_ref().map(PointLightRaw::from),
            spot_light: (&lighting.spot).into(),
            material: [lighting.shininess, 0.0, 0.0, 0.0],
        }
    }
}
