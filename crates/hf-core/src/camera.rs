use glam::{Mat4, Vec3};

/// Fixed world vertical axis. `right` is derived from it, so `front` must
/// never become parallel to it (pitch stays strictly inside ±90°).
pub const WORLD_UP: Vec3 = Vec3::Y;

pub const NEAR_PLANE: f32 = 0.01;
pub const FAR_PLANE: f32 = 100.0;

pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_FOV: f32 = 1.0;
pub const MAX_FOV: f32 = 90.0;

const DEFAULT_YAW: f32 = -90.0;
const DEFAULT_FOV: f32 = 45.0;

/// Direction of a camera translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Movement {
    pub const ALL: [Movement; 6] = [
        Movement::Forward,
        Movement::Backward,
        Movement::Left,
        Movement::Right,
        Movement::Up,
        Movement::Down,
    ];
}

/// First-person fly camera.
///
/// Angles are accepted and reported in degrees but stored in radians.
/// `front`, `up` and `right` are recomputed eagerly whenever yaw or pitch
/// changes and always form an orthonormal basis.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    aspect_ratio: f32,
    yaw: f32,
    pitch: f32,
    fov: f32,
    front: Vec3,
    up: Vec3,
    right: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, aspect_ratio: f32) -> Self {
        Self {
            position,
            aspect_ratio,
            yaw: DEFAULT_YAW.to_radians(),
            pitch: 0.0,
            fov: DEFAULT_FOV.to_radians(),
            // What the derivation yields for yaw = -90°, pitch = 0°.
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw.to_degrees()
    }

    /// Yaw is not wrapped; trigonometry handles periodicity. Non-finite
    /// angles are ignored.
    pub fn set_yaw(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            log::debug!("Ignoring invalid yaw {}", degrees);
            return;
        }
        self.yaw = degrees.to_radians();
        self.update_vectors();
    }

    pub fn pitch(&self) -> f32 {
        self.pitch.to_degrees()
    }

    /// Saturates to `[-89, 89]` degrees. NaN is ignored.
    pub fn set_pitch(&mut self, degrees: f32) {
        if degrees.is_nan() {
            log::debug!("Ignoring invalid pitch {}", degrees);
            return;
        }
        let angle = degrees.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.pitch = angle.to_radians();
        self.update_vectors();
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Saturates to `[1, 90]` degrees. NaN is ignored.
    pub fn set_fov(&mut self, degrees: f32) {
        if degrees.is_nan() {
            log::debug!("Ignoring invalid field of view {}", degrees);
            return;
        }
        let angle = degrees.clamp(MIN_FOV, MAX_FOV);
        self.fov = angle.to_radians();
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Ignores ratios that are not finite and positive.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            self.aspect_ratio = aspect_ratio;
        } else {
            log::debug!("Ignoring invalid aspect ratio {}", aspect_ratio);
        }
    }

    /// Viewport resize notifier. Zero-sized viewports are skipped.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.set_aspect_ratio(width as f32 / height as f32);
        }
    }

    pub fn translate(&mut self, movement: Movement, distance: f32) {
        let direction = match movement {
            Movement::Forward => self.front,
            Movement::Backward => -self.front,
            Movement::Right => self.right,
            Movement::Left => -self.right,
            Movement::Up => WORLD_UP,
            Movement::Down => -WORLD_UP,
        };
        self.position += direction * distance;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Right-handed perspective with [0, 1] depth (wgpu convention).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    fn update_vectors(&mut self) {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        self.front = Vec3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize();

        // Order matters: right comes from the world axis, up from right.
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
