/*
 * Input Module
 *
 * This module handles keyboard input for the particle field.
 *
 * Keys:
 * - R re-seeds the field
 * - T cycles the theme
 * - C spawns a single celebration burst
 * - D toggles the debug overlay
 * - the H, B, D sequence fires the full celebration volley
 */

use nannou::prelude::*;

use crate::app::{self, Model};
use crate::params::FieldParams;
use crate::theme;

// The celebration key sequence
const CELEBRATION_SEQUENCE: [Key; 3] = [Key::H, Key::B, Key::D];

// Field-level actions a key can request; parameter-only keys are applied
// directly by handle_key
#[derive(Debug, PartialEq, Eq)]
pub enum KeyCommand {
    None,
    Reset,
    Burst,
}

// Tracks progress through the celebration key sequence
pub struct SequenceTracker {
    progress: usize,
}

impl SequenceTracker {
    pub fn new() -> Self {
        Self { progress: 0 }
    }

    // Feed one key; returns true when the sequence just completed
    pub fn advance(&mut self, key: Key) -> bool {
        if key == CELEBRATION_SEQUENCE[self.progress] {
            self.progress += 1;
            if self.progress == CELEBRATION_SEQUENCE.len() {
                self.progress = 0;
                return true;
            }
        } else if key == CELEBRATION_SEQUENCE[0] {
            // a stray H restarts the sequence rather than cancelling it
            self.progress = 1;
        } else {
            self.progress = 0;
        }
        false
    }
}

impl Default for SequenceTracker {
    fn default() -> Self {
        Self::new()
    }
}

// Apply a key to the parameters and report any field-level action.
// Kept free of the window handle so it is testable headless.
pub fn handle_key(key: Key, params: &mut FieldParams) -> KeyCommand {
    match key {
        Key::R => KeyCommand::Reset,
        Key::T => {
            params.theme_index = theme::next_index(params.theme_index);
            KeyCommand::None
        }
        Key::C => KeyCommand::Burst,
        Key::D => {
            params.show_debug = !params.show_debug;
            KeyCommand::None
        }
        _ => KeyCommand::None,
    }
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match handle_key(key, &mut model.params) {
        KeyCommand::Reset => app::reset_field(model),
        KeyCommand::Burst => app::spawn_burst(model),
        KeyCommand::None => {}
    }

    if model.celebration.advance(key) {
        app::spawn_celebration(model);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
