/*
 * Application Module
 *
 * This module defines the main application model and logic for the particle
 * field. It creates the window, reads the optional startup configuration,
 * seeds the field and drives the fixed-timestep update loop. The field is
 * owned by the model and passed explicitly; nothing reaches it through
 * globals.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::burst::Burst;
use crate::clock::FrameClock;
use crate::debug::DebugInfo;
use crate::field::Field;
use crate::input::{self, SequenceTracker};
use crate::params::{FieldConfig, FieldParams, CONFIG_PATH};
use crate::renderer;
use crate::ui;
use crate::PHYSICS_HZ;

const CELEBRATION_BURSTS: usize = 6;

// Main model for the application
pub struct Model {
    pub field: Field,
    pub params: FieldParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub clock: FrameClock,
    pub bursts: Vec<Burst>,
    pub celebration: SequenceTracker,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Size the window from the primary monitor, with a sane fallback
    let (width, height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 800.0),
    };

    // The window is the drawable surface. Without one there is nothing for
    // this process to do, so a creation failure logs and skips activation.
    let window_id = app
        .new_window()
        .title("driftfield")
        .size(width as u32, height as u32)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .resized(resized)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap_or_else(|err| {
            error!("no drawable surface, skipping activation: {err:?}");
            std::process::exit(1);
        });

    let window = app.window(window_id).unwrap_or_else(|| {
        error!("window {window_id:?} vanished during startup, skipping activation");
        std::process::exit(1);
    });

    // Create the UI
    let egui = Egui::from_window(&window);

    // Defaults, overridden by driftfield.toml when present
    let mut params = FieldParams::default();
    if FieldConfig::exists(CONFIG_PATH) {
        match FieldConfig::load(CONFIG_PATH) {
            Ok(config) => {
                params.apply_config(&config);
                info!("startup configuration applied from {CONFIG_PATH}");
            }
            Err(err) => warn!("ignoring configuration: {err}"),
        }
    } else {
        debug!("no {CONFIG_PATH}, using defaults");
    }

    let mut rng = rand::thread_rng();
    let field = Field::new(width, height, params.particle_count, &mut rng);
    info!(
        "particle field running: {} particles in {:.0}x{:.0}",
        field.len(),
        width,
        height
    );

    Model {
        field,
        params,
        egui,
        debug_info: DebugInfo::default(),
        clock: FrameClock::new(PHYSICS_HZ, Instant::now()),
        bursts: Vec::new(),
        celebration: SequenceTracker::new(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let response = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if response.reset_clicked || response.count_changed {
        reset_field(model);
    }
    if response.celebrate_clicked {
        spawn_burst(model);
    }

    // Run as many whole physics steps as the elapsed frame time covers
    let steps = model.clock.tick(Instant::now());
    model.debug_info.steps_last_frame = steps;
    for _ in 0..steps {
        // reduced motion renders the field statically
        if !model.params.reduced_motion {
            model.field.advance();
        }
        for burst in &mut model.bursts {
            burst.advance();
        }
    }
    if steps > 0 {
        model.bursts.retain(|burst| !burst.finished());
    }
    model.debug_info.burst_count = model.bursts.len();
}

// Viewport resize: update the field dimensions only, positions are not
// rescaled and re-enter through the wrap rule
pub fn resized(_app: &App, model: &mut Model, dim: Vec2) {
    model.field.resize(dim.x, dim.y);
    debug!("viewport resized to {:.0}x{:.0}", dim.x, dim.y);
}

// Re-seed the field with the configured particle count
pub fn reset_field(model: &mut Model) {
    let count = model.params.particle_count;
    model.field.reset(count, &mut rand::thread_rng());
    info!("field re-seeded with {count} particles");
}

// Spawn one celebration burst at a random point of the field
pub fn spawn_burst(model: &mut Model) {
    if model.params.reduced_motion {
        return;
    }
    let mut rng = rand::thread_rng();
    let origin = pt2(
        rng.gen_range(0.0..model.field.width),
        rng.gen_range(0.0..model.field.height),
    );
    model.bursts.push(Burst::new(origin, &mut rng));
}

// The full celebration: a volley of bursts across the viewport
pub fn spawn_celebration(model: &mut Model) {
    if model.params.reduced_motion {
        return;
    }
    let mut rng = rand::thread_rng();
    for _ in 0..CELEBRATION_BURSTS {
        let origin = pt2(
            rng.gen_range(0.0..model.field.width),
            rng.gen_range(0.0..model.field.height),
        );
        model.bursts.push(Burst::new(origin, &mut rng));
    }
    info!("celebration volley of {CELEBRATION_BURSTS} bursts unleashed");
}
