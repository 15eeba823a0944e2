use glam::{Mat4, Quat, Vec3};

use crate::camera::Camera;

pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

pub const POINT_LIGHT_POSITIONS: [Vec3; 4] = [
    Vec3::new(0.7, 0.2, 2.0),
    Vec3::new(2.3, -3.3, -4.0),
    Vec3::new(-4.0, 2.0, -12.0),
    Vec3::new(0.0, 0.0, -3.0),
];

pub const CUBE_ROTATION_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);
pub const CUBE_ROTATION_STEP: f32 = 20.0;
pub const LAMP_SCALE: f32 = 0.2;
pub const MATERIAL_SHININESS: f32 = 32.0;

/// Cube `index` placed at `position`, rotated in place by `20° * index`.
pub fn cube_model_matrix(index: usize, position: Vec3) -> Mat4 {
    let angle = (index as f32 * CUBE_ROTATION_STEP).to_radians();
    let rotation = Quat::from_axis_angle(CUBE_ROTATION_AXIS.normalize(), angle);
    Mat4::from_translation(position) * Mat4::from_quat(rotation)
}

pub fn lamp_model_matrix(position: Vec3) -> Mat4 {
    Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(LAMP_SCALE))
}

/// Attenuation terms: `1 / (constant + linear * d + quadratic * d²)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
    /// Cosine of the inner cone angle.
    pub cut_off: f32,
    /// Cosine of the outer cone angle.
    pub outer_cut_off: f32,
}

/// Fixed lighting setup of the demo scene.
#[derive(Clone, Debug)]
pub struct SceneLighting {
    pub directional: DirectionalLight,
    pub points: [PointLight; 4],
    pub spot: SpotLight,
    pub shininess: f32,
}

impl Default for SceneLighting {
    fn default() -> Self {
        let point = |position: Vec3| PointLight {
            position,
            ambient: Vec3::splat(0.01),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            attenuation: Attenuation { constant: 1.0, linear: 0.14, quadratic: 0.07 },
        };

        Self {
            directional: DirectionalLight {
                direction: Vec3::new(-0.2, -1.0, -0.3),
                ambient: Vec3::ZERO,
                diffuse: Vec3::splat(0.05),
                specular: Vec3::splat(0.2),
            },
            points: POINT_LIGHT_POSITIONS.map(point),
            spot: SpotLight {
                position: Vec3::ZERO,
                direction: Vec3::NEG_Z,
                ambient: Vec3::ZERO,
                diffuse: Vec3::ONE,
                specular: Vec3::ONE,
                attenuation: Attenuation { constant: 1.0, linear: 0.09, quadratic: 0.032 },
                cut_off: 10.0_f32.to_radians().cos(),
                outer_cut_off: 15.0_f32.to_radians().cos(),
            },
            shininess: MATERIAL_SHININESS,
        }
    }
}

impl SceneLighting {
    /// Attach the spotlight to the camera, like a flashlight.
    pub fn follow_camera(&mut self, camera: &Camera) {
        self.spot.position = camera.position;
        self.spot.direction = camera.front();
    }
}
