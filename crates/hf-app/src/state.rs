use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use hf_core::camera::{Camera, Movement};
use hf_core::config::AppConfig;
use hf_core::controls::FlyController;
use hf_render::SceneRenderer;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// Trackpads report scrolling in pixels; the controller expects lines.
const PIXELS_PER_LINE: f32 = 10.0;

pub struct AppState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,

    pub renderer: SceneRenderer,
    pub camera: Camera,
    pub controller: FlyController,

    focused: bool,
    last_update: Instant,
}

impl AppState {
    pub async fn new(window: Arc<Window>, app_config: &AppConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                ..Default::default()
            })
            .await?;

        hf_render::shader::log_uncaptured_errors(&device);

        let config = surface
            .get_default_config(&adapter, size.width.max(1), size.height.max(1))
            .ok_or_else(|| anyhow::anyhow!("Surface is not supported by adapter {}", info.name))?;
        surface.configure(&device, &config);

        let renderer = SceneRenderer::new(
            device.clone(),
            queue.clone(),
            config.format,
            (config.width, config.height),
            &app_config.assets,
        );

        let camera = Camera::new(START_POSITION, config.width as f32 / config.height as f32);
        let controller = FlyController::new(app_config.controls.clone());

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            renderer,
            camera,
            controller,
            focused: true,
            last_update: Instant::now(),
        })
    }

    // --- Window resizing ----------------------------------------------------

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            log::debug!("Resizing surface to {}x{}", new_size.width, new_size.height);

            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            self.renderer.resize(new_size.width, new_size.height);
            self.camera.resize(new_size.width, new_size.height);
        }
    }

    // --- Mouse + keyboard input --------------------------------------------

    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Focused(focused) => {
                self.focused = *focused;
                if !focused {
                    self.controller.reset();
                }
                false
            }

            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key: PhysicalKey::Code(key),
                    state,
                    ..
                },
                ..
            } => match movement_for(*key) {
                Some(movement) => {
                    if self.focused {
                        self.controller.set_movement(movement, *state == ElementState::Pressed);
                    }
                    true
                }
                None => false,
            },

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };

                if self.focused {
                    self.controller.add_scroll(scroll);
                }
                true
            }

            _ => false,
        }
    }

    pub fn mouse_motion(&mut self, (dx, dy): (f64, f64)) {
        if self.focused {
            self.controller.add_mouse_delta(dx as f32, dy as f32);
        }
    }

    // --- Per-frame update + rendering ---------------------------------------

    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;

        if self.focused {
            self.controller.update(&mut self.camera, dt);
        }
    }

    pub fn render_scene(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        self.renderer.render(encoder, view, &self.camera);
    }
}

fn movement_for(key: KeyCode) -> Option<Movement> {
    match key {
        KeyCode::KeyW => Some(Movement::Forward),
        KeyCode::KeyS => Some(Movement::Backward),
        KeyCode::KeyA => Some(Movement::Left),
        KeyCode::KeyD => Some(Movement::Right),
        KeyCode::Space => Some(Movement::Up),
        KeyCode::ShiftLeft => Some(Movement::Down),
        _ => None,
    }
}
