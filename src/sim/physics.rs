//! Physics tuning
//!
//! Immutable for the lifetime of a game; the reducer only reads it.

use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY, SAFE_LANDING_SPEED, THROTTLE_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Downward acceleration applied regardless of throttle
    pub gravity: f32,
    /// Throttle change per key press
    pub throttle_step: f32,
    /// Touchdown speed threshold (exclusive) for a safe landing
    pub safe_landing_speed: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            throttle_step: THROTTLE_STEP,
            safe_landing_speed: SAFE_LANDING_SPEED,
        }
    }
}

impl Physics {
    pub fn with_gravity(self, gravity: f32) -> Self {
        Self { gravity, ..self }
    }

    pub fn with_throttle_step(self, throttle_step: f32) -> Self {
        Self {
            throttle_step,
            ..self
        }
    }

    pub fn with_safe_landing_speed(self, safe_landing_speed: f32) -> Self {
        Self {
            safe_landing_speed,
            ..self
        }
    }

    /// Whether touching down at `vertical_velocity` counts as a landing
    #[inline]
    pub fn is_safe_touchdown(&self, vertical_velocity: f32) -> bool {
        vertical_velocity.abs() < self.safe_landing_speed
    }
}
