use egui::{Color32, Context, RichText};
use crate::state::AppState;

pub fn draw_overlay(ctx: &Context, state: &AppState) {
    let camera = &state.camera;

    egui::Window::new("Camera")
        .default_pos([12.0, 12.0])
        .resizable(false)
        .show(ctx, |ui| {
            let p = camera.position;
            ui.label(format!("Position: {:.2}, {:.2}, {:.2}", p.x, p.y, p.z));
            ui.label(format!("Yaw: {:.1}°", camera.yaw()));
            ui.label(format!("Pitch: {:.1}°", camera.pitch()));
            ui.label(format!("FOV: {:.1}°", camera.fov()));

            let f = camera.front();
            ui.label(format!("Front: {:.2}, {:.2}, {:.2}", f.x, f.y, f.z));

            ui.separator();

            ui.label(RichText::new("WASD: move, Space/Shift: up/down").color(Color32::GRAY));
            ui.label(RichText::new("Mouse: look, wheel: zoom, Esc: quit").color(Color32::GRAY));
        });
}
