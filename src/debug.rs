/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance
 * metrics and other debug information to be displayed in the overlay.
 */

use std::sync::{Arc, Mutex};
use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub steps_last_frame: usize,
    pub burst_count: usize,
    // Written during the view pass, which only has shared access
    pub link_count: Arc<Mutex<usize>>,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            steps_last_frame: 0,
            burst_count: 0,
            link_count: Arc::new(Mutex::new(0)),
        }
    }
}
