mod app;
mod state;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use hf_core::config::AppConfig;
use winit::event::{DeviceEvent, ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::resolve(config_path.as_deref())?;

    log::info!("Starting {}", config.window.title);

    let event_loop = EventLoop::new()?;

    #[allow(deprecated)]
    let window = Arc::new(event_loop.create_window(
        Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(config.window.width, config.window.height))
    )?);

    let mut app = pollster::block_on(app::App::new(window, &config))?;

    #[allow(deprecated)]
    event_loop.run(move |event, control_flow| {
        match event {
            Event::WindowEvent { ref event, .. } => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested
                        | WindowEvent::KeyboardInput {
                            event: KeyEvent {
                                state: ElementState::Pressed,
                                physical_key: PhysicalKey::Code(KeyCode::Escape),
                                ..
                            },
                            ..
                        } => control_flow.exit(),
                        WindowEvent::Resized(physical_size) => {
                            app.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            app.update();
                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    app.resize(app.app_state.size)
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    log::error!("Out of GPU memory, exiting");
                                    control_flow.exit()
                                }
                                Err(e) => log::warn!("Dropped frame: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::DeviceEvent { event: DeviceEvent::MouseMotion { delta }, .. } => {
                app.mouse_motion(delta);
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
