//! Game settings
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults in [`crate::consts`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::error::{Error, Result};
use crate::render::RenderSettings;
use crate::sim::Physics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gravity, throttle step and landing threshold
    pub physics: Physics,

    // === Timing ===
    /// Length of one simulation tick in seconds
    pub sim_dt: f32,
    /// Maximum ticks run for a single frame
    pub max_substeps: u32,

    // === Rendering ===
    pub render: RenderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: Physics::default(),
            sim_dt: SIM_DT,
            max_substeps: MAX_SUBSTEPS,
            render: RenderSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {e}");
                Self::default()
            }
        }
    }

    /// Load settings from `path`
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let settings: Self = serde_json::from_str(&json)?;
        Ok(settings.sanitized())
    }

    /// Save settings to `path` as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| Error::io(path, e))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Replace timing values the session loop cannot run with
    fn sanitized(mut self) -> Self {
        if !(self.sim_dt.is_finite() && self.sim_dt > 0.0) {
            log::warn!("Invalid sim_dt {}, using {SIM_DT}", self.sim_dt);
            self.sim_dt = SIM_DT;
        }
        if self.max_substeps == 0 {
            log::warn!("max_substeps must be at least 1, using {MAX_SUBSTEPS}");
            self.max_substeps = MAX_SUBSTEPS;
        }
        self
    }
}
