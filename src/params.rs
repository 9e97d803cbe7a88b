/*
 * Field Parameters Module
 *
 * This module defines the FieldParams struct that contains all the
 * adjustable parameters for the particle field. Parameters can be modified
 * through the UI; the struct also provides methods for parameter change
 * detection, and the optional TOML configuration file read once at startup.
 */

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::theme::{self, THEMES};
use crate::{DEFAULT_PARTICLE_COUNT, LINK_DIM, LINK_THRESHOLD};

pub const CONFIG_PATH: &str = "driftfield.toml";

// Parameters for the field that can be adjusted via UI
pub struct FieldParams {
    pub particle_count: usize,
    pub link_threshold: f32,
    pub link_dim: f32,
    pub theme_index: usize,
    pub reduced_motion: bool,
    pub show_debug: bool,

    // Internal state for tracking changes. Only the particle count needs a
    // re-seed when it changes; everything else takes effect on the next frame.
    previous_count: Option<usize>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            link_threshold: LINK_THRESHOLD,
            link_dim: LINK_DIM,
            theme_index: 0,
            reduced_motion: false,
            show_debug: false,
            previous_count: None,
        }
    }
}

impl FieldParams {
    // Take a snapshot of the particle count for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_count = Some(self.particle_count);
    }

    // Check whether the particle count changed since the last snapshot,
    // meaning the field needs a re-seed
    pub fn detect_changes(&self) -> bool {
        match self.previous_count {
            Some(prev) => self.particle_count != prev,
            None => false,
        }
    }

    // Fold the startup configuration into the defaults
    pub fn apply_config(&mut self, config: &FieldConfig) {
        if let Some(count) = config.particle_count {
            self.particle_count = count;
        }
        if let Some(threshold) = config.link_threshold {
            self.link_threshold = threshold;
        }
        if let Some(dim) = config.link_dim {
            self.link_dim = dim;
        }
        if let Some(name) = &config.theme {
            match theme::index_of(name) {
                Some(index) => self.theme_index = index,
                None => warn!(theme = %name, "unknown theme in config, keeping {}", THEMES[self.theme_index].name),
            }
        }
        if let Some(reduced) = config.reduced_motion {
            self.reduced_motion = reduced;
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_particle_count_range() -> std::ops::RangeInclusive<usize> {
        10..=300
    }

    pub fn get_link_threshold_range() -> std::ops::RangeInclusive<f32> {
        40.0..=240.0
    }

    pub fn get_link_dim_range() -> std::ops::RangeInclusive<f32> {
        0.05..=1.0
    }
}

// Startup configuration, read once from driftfield.toml if present
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: Option<usize>,
    pub link_threshold: Option<f32>,
    pub link_dim: Option<f32>,
    pub theme: Option<String>,
    pub reduced_motion: Option<bool>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl FieldConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn exists(path: &str) -> bool {
        Path::new(path).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_then_no_change_detects_nothing() {
        let mut params = FieldParams::default();
        params.take_snapshot();
        assert!(!params.detect_changes());
    }

    #[test]
    fn count_change_is_detected() {
        let mut params = FieldParams::default();
        params.take_snapshot();
        params.particle_count = 80;
        assert!(params.detect_changes());
    }

    #[test]
    fn theme_change_does_not_force_a_reseed() {
        let mut params = FieldParams::default();
        params.take_snapshot();
        params.theme_index = 1;
        assert!(!params.detect_changes());
    }

    #[test]
    fn config_parses_partial_files() {
        let config: FieldConfig =
            toml::from_str("particle_count = 80\ntheme = \"ember\"").unwrap();
        assert_eq!(config.particle_count, Some(80));
        assert_eq!(config.theme.as_deref(), Some("ember"));
        assert_eq!(config.link_threshold, None);
    }

    #[test]
    fn config_applies_over_defaults() {
        let config: FieldConfig =
            toml::from_str("particle_count = 80\nreduced_motion = true").unwrap();
        let mut params = FieldParams::default();
        params.apply_config(&config);
        assert_eq!(params.particle_count, 80);
        assert!(params.reduced_motion);
        // untouched values keep their defaults
        assert_eq!(params.link_threshold, LINK_THRESHOLD);
    }

    #[test]
    fn unknown_theme_keeps_current_index() {
        let config: FieldConfig = toml::from_str("theme = \"nonexistent\"").unwrap();
        let mut params = FieldParams::default();
        params.apply_config(&config);
        assert_eq!(params.theme_index, 0);
    }
}
