/*
 * Renderer Module
 *
 * This module handles the per-frame paint step: clear the surface, draw
 * each particle as a filled disc, run the connection pass, then draw any
 * live celebration bursts and the debug overlay.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::theme::THEMES;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();
    let theme = &THEMES[model.params.theme_index];

    // Clear the background
    draw.background().color(theme.background_color());

    // Field space has its origin in the top-left corner with y growing
    // downward; nannou draws from the window center
    let (width, height) = (model.field.width, model.field.height);
    let to_screen = |p: Point2| pt2(p.x - width / 2.0, height / 2.0 - p.y);

    // Draw each particle as a filled disc with its stored opacity
    for particle in model.field.particles() {
        draw.ellipse()
            .xy(to_screen(particle.position))
            .radius(particle.radius)
            .color(theme.accent_color(particle.opacity));
    }

    // Connection pass: one line per unordered pair under the threshold
    let links = model
        .field
        .links(model.params.link_threshold, model.params.link_dim);
    for link in &links {
        let a = model.field.particles()[link.a].position;
        let b = model.field.particles()[link.b].position;
        draw.line()
            .start(to_screen(a))
            .end(to_screen(b))
            .weight(1.0)
            .color(theme.link_color(link.opacity));
    }

    // Celebration bursts on top of the field
    for burst in &model.bursts {
        for spark in burst.sparks() {
            draw.ellipse()
                .xy(to_screen(spark.position))
                .radius(spark.radius)
                .color(theme.accent_color(spark.alpha()));
        }
    }

    // Draw debug overlay if enabled
    if model.params.show_debug {
        *model.debug_info.link_count.lock().unwrap() = links.len();
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            app.window_rect(),
            model.field.len(),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
