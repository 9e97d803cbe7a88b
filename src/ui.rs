/*
 * UI Module
 *
 * This module contains functions for creating and updating the control
 * panel using nannou_egui. Parameter change detection is handled by the
 * FieldParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::FieldParams;
use crate::theme::THEMES;

// What the control panel asked for this frame
#[derive(Default)]
pub struct UiResponse {
    pub reset_clicked: bool,
    pub celebrate_clicked: bool,
    pub count_changed: bool,
}

// Update the UI and report what the user changed
pub fn update_ui(egui: &mut Egui, params: &mut FieldParams, debug_info: &DebugInfo) -> UiResponse {
    let mut response = UiResponse::default();

    // Snapshot the particle count so a slider change can be detected
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Field Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.particle_count,
                        FieldParams::get_particle_count_range(),
                    )
                    .text("Particle Count"),
                );

                if ui.button("Reset Field").clicked() {
                    response.reset_clicked = true;
                }
            });

            ui.collapsing("Connections", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.link_threshold,
                        FieldParams::get_link_threshold_range(),
                    )
                    .text("Link Distance"),
                );
                ui.add(
                    egui::Slider::new(&mut params.link_dim, FieldParams::get_link_dim_range())
                        .text("Link Brightness"),
                );
            });

            ui.collapsing("Theme", |ui| {
                for (i, theme) in THEMES.iter().enumerate() {
                    ui.radio_value(&mut params.theme_index, i, theme.name);
                }
            });

            if ui.button("Celebrate").clicked() {
                response.celebrate_clicked = true;
            }

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));

            ui.checkbox(&mut params.reduced_motion, "Reduced Motion");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    response.count_changed = params.detect_changes();

    response
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    particle_count: usize,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Particles: {}", particle_count),
        format!("Links: {}", *debug_info.link_count.lock().unwrap()),
        format!("Steps/frame: {}", debug_info.steps_last_frame),
        format!("Bursts: {}", debug_info.burst_count),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
