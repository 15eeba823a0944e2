use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Movement};

/// Input tuning for the fly controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// World units per second.
    pub move_speed: f32,
    /// Degrees of rotation per pixel of pointer motion.
    pub mouse_sensitivity: f32,
    /// Degrees of field of view per wheel line.
    pub zoom_step: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            move_speed: 1.5,
            mouse_sensitivity: 0.2,
            zoom_step: 1.0,
        }
    }
}

/// Accumulates input between update ticks and applies it to a [`Camera`].
#[derive(Clone, Debug)]
pub struct FlyController {
    pub settings: ControlSettings,
    held: [bool; 6],
    look_delta: Vec2,
    scroll: f32,
}

impl FlyController {
    pub fn new(settings: ControlSettings) -> Self {
        Self {
            settings,
            held: [false; 6],
            look_delta: Vec2::ZERO,
            scroll: 0.0,
        }
    }

    pub fn set_movement(&mut self, movement: Movement, pressed: bool) {
        self.held[movement as usize] = pressed;
    }

    pub fn is_held(&self, movement: Movement) -> bool {
        self.held[movement as usize]
    }

    /// Raw pointer motion in pixels, +y pointing down the screen.
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.look_delta += Vec2::new(dx, dy);
    }

    /// Wheel motion in lines, positive away from the user.
    pub fn add_scroll(&mut self, lines: f32) {
        self.scroll += lines;
    }

    /// Drop held keys and pending deltas (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.held = [false; 6];
        self.look_delta = Vec2::ZERO;
        self.scroll = 0.0;
    }

    pub fn update(&mut self, camera: &mut Camera, dt: f32) {
        let distance = self.settings.move_speed * dt;
        for movement in Movement::ALL {
            if self.is_held(movement) {
                camera.translate(movement, distance);
            }
        }

        if self.look_delta != Vec2::ZERO {
            let sensitivity = self.settings.mouse_sensitivity;
            camera.set_yaw(camera.yaw() + self.look_delta.x * sensitivity);
            camera.set_pitch(camera.pitch() - self.look_delta.y * sensitivity);
            self.look_delta = Vec2::ZERO;
        }

        if self.scroll != 0.0 {
            camera.set_fov(camera.fov() - self.scroll * self.settings.zoom_step);
            self.scroll = 0.0;
        }
    }
}

impl Default for FlyController {
    fn default() -> Self {
        Self::new(ControlSettings::default())
    }
}
