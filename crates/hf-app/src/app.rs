use std::sync::Arc;

use egui_winit::State as EguiState;
use hf_core::config::AppConfig;
use winit::event::WindowEvent;
use winit::window::{CursorGrabMode, Window};

use crate::state::AppState;
use crate::ui;

pub(crate) struct App {
    pub(crate) window: Arc<Window>,
    pub(crate) app_state: AppState,
    egui_state: EguiState,
    egui_renderer: egui_wgpu::Renderer,
    show_overlay: bool,
}

impl App {
    pub(crate) async fn new(window: Arc<Window>, config: &AppConfig) -> anyhow::Result<Self> {
        let app_state = AppState::new(window.clone(), config).await?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx,
            egui::ViewportId::ROOT,
            window.as_ref(),
            None,
            None,
            None
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &app_state.device,
            app_state.config.format,
            egui_wgpu::RendererOptions::default()
        );

        grab_cursor(&window);

        Ok(Self {
            window,
            app_state,
            egui_state,
            egui_renderer,
            show_overlay: config.debug_overlay,
        })
    }

    pub(crate) fn input(&mut self, event: &WindowEvent) -> bool {
        if let WindowEvent::Focused(true) = event {
            grab_cursor(&self.window);
        }

        if self.show_overlay {
            let response = self.egui_state.on_window_event(&self.window, event);
            if response.consumed {
                return true;
            }
        }

        self.app_state.input(event)
    }

    pub(crate) fn mouse_motion(&mut self, delta: (f64, f64)) {
        self.app_state.mouse_motion(delta);
    }

    pub(crate) fn update(&mut self) {
        self.app_state.update();
    }

    pub(crate) fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.app_state.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.app_state.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            }
        );

        // Render 3D scene
        self.app_state.render_scene(&mut encoder, &view);

        let extra_buffers = if self.show_overlay {
            self.render_overlay(&mut encoder, &view)
        } else {
            Vec::new()
        };

        self.app_state.queue.submit(extra_buffers.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(())
    }

    fn render_overlay(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) -> Vec<wgpu::CommandBuffer> {
        let raw_input = self.egui_state.take_egui_input(&self.window);

        let full_output = self.egui_state.egui_ctx().run(raw_input, |ctx| {
            ui::draw_overlay(ctx, &self.app_state);
        });

        self.egui_state.handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = self.egui_state.egui_ctx().tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.app_state.config.width, self.app_state.config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(
                &self.app_state.device,
                &self.app_state.queue,
                *id,
                image_delta,
            );
        }

        let command_buffers = self.egui_renderer.update_buffers(
            &self.app_state.device,
            &self.app_state.queue,
            encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer.render(&mut render_pass.forget_lifetime(), &paint_jobs, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        command_buffers
    }

    pub(crate) fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.app_state.resize(new_size);
    }
}

/// Lock the cursor for mouse look, falling back to confining it.
fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

    match grabbed {
        Ok(()) => window.set_cursor_visible(false),
        Err(e) => log::warn!("Could not grab cursor: {}", e),
    }
}
