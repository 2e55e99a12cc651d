//! Effect settings and preferences
//!
//! Persisted as JSON wherever the host points us; missing or malformed
//! files fall back to defaults so a bad config never blocks a run.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_HOLD_MS;
use crate::raster::{CircleStyle, Plane};
use crate::world::Material;

/// Ring effect configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingSettings {
    /// Plane the rings are drawn on
    pub plane: Plane,
    /// Prune enclosed points from each outline
    pub ignore_enclosed: bool,
    /// Keep the cardinal tip blocks
    pub allow_burrs: bool,
    /// Hold between draw and restore, in milliseconds
    pub hold_ms: u64,
    /// Material painted over ring blocks during the hold
    pub fill: Material,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            plane: Plane::XZ,
            ignore_enclosed: true,
            allow_burrs: true,
            hold_ms: DEFAULT_HOLD_MS,
            fill: Material::Air,
        }
    }
}

impl RingSettings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON. Best effort; failures are logged and swallowed.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {}", path.display(), e);
                } else {
                    log::info!("Settings saved to {}", path.display());
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Shape switches for the generator.
    pub fn style(&self) -> CircleStyle {
        CircleStyle {
            ignore_enclosed: self.ignore_enclosed,
            allow_burrs: self.allow_burrs,
        }
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}
