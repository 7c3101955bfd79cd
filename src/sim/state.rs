//! World state and its invariants
//!
//! The whole simulation is a single `Copy` value. Each reduction step builds a
//! new one; nothing holds a mutable reference across steps.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An airborne (or just-touched-down, not yet classified) lander
///
/// Fields are only reachable through constructors that clamp them, including
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLander")]
pub struct Lander {
    /// Normalized thrust, always within [MIN_THROTTLE, MAX_THROTTLE]
    throttle: f32,
    /// Positive is up
    vertical_velocity: f32,
    /// Distance above the ground, never negative
    height: f32,
}

/// Unchecked wire form of [`Lander`]
#[derive(Deserialize)]
struct RawLander {
    throttle: f32,
    vertical_velocity: f32,
    height: f32,
}

impl From<RawLander> for Lander {
    fn from(raw: RawLander) -> Self {
        Lander::new(raw.throttle, raw.vertical_velocity, raw.height)
    }
}

impl Lander {
    /// Build a lander, clamping throttle and height into range
    pub fn new(throttle: f32, vertical_velocity: f32, height: f32) -> Self {
        Self {
            throttle: clamp_throttle(throttle),
            vertical_velocity,
            height: clamp_height(height),
        }
    }

    #[inline]
    pub fn throttle(&self) -> f32 {
        self.throttle
    }

    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn with_throttle(self, throttle: f32) -> Self {
        Self {
            throttle: clamp_throttle(throttle),
            ..self
        }
    }

    pub fn with_vertical_velocity(self, vertical_velocity: f32) -> Self {
        Self {
            vertical_velocity,
            ..self
        }
    }

    pub fn with_height(self, height: f32) -> Self {
        Self {
            height: clamp_height(height),
            ..self
        }
    }

    /// True once the lander sits on the floor
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.height <= 0.0
    }
}

impl Default for Lander {
    fn default() -> Self {
        Self {
            throttle: INITIAL_THROTTLE,
            vertical_velocity: INITIAL_VERTICAL_VELOCITY,
            height: INITIAL_HEIGHT,
        }
    }
}

/// Complete world state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WorldState {
    /// Active simulation
    Flying(Lander),
    /// Touched down below the safe landing speed
    Landed,
    /// Touched down too fast
    Crashed,
}

impl WorldState {
    pub fn is_flying(&self) -> bool {
        matches!(self, WorldState::Flying(_))
    }

    /// Landed or crashed; no event changes a terminal state
    pub fn is_terminal(&self) -> bool {
        !self.is_flying()
    }

    /// The lander, if still flying
    pub fn lander(&self) -> Option<&Lander> {
        match self {
            WorldState::Flying(lander) => Some(lander),
            WorldState::Landed | WorldState::Crashed => None,
        }
    }
}

impl Default for WorldState {
    fn default() -> Self {
        make_initial()
    }
}

/// Starting state: half throttle, at rest, ten units up
pub fn make_initial() -> WorldState {
    WorldState::Flying(Lander::default())
}

/// Clamp throttle into [MIN_THROTTLE, MAX_THROTTLE]; NaN becomes MIN_THROTTLE
#[inline]
pub fn clamp_throttle(throttle: f32) -> f32 {
    // f32::max/min discard NaN operands, unlike f32::clamp
    throttle.max(MIN_THROTTLE).min(MAX_THROTTLE)
}

/// Clamp height to the floor; NaN becomes 0
#[inline]
pub fn clamp_height(height: f32) -> f32 {
    height.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(
            make_initial(),
            WorldState::Flying(Lander::new(0.5, 0.0, 10.0))
        );
        assert_eq!(make_initial(), make_initial());
    }

    #[test]
    fn test_clamp_throttle() {
        assert_eq!(clamp_throttle(1.05), 1.0);
        assert_eq!(clamp_throttle(-0.2), 0.0);
        assert_eq!(clamp_throttle(0.3), 0.3);
        assert_eq!(clamp_throttle(f32::NAN), 0.0);
        assert_eq!(clamp_throttle(f32::INFINITY), 1.0);
    }

    #[test]
    fn test_clamp_height() {
        assert_eq!(clamp_height(-3.0), 0.0);
        assert_eq!(clamp_height(4.5), 4.5);
        assert_eq!(clamp_height(f32::NAN), 0.0);
    }

    #[test]
    fn test_builders_keep_invariants() {
        let lander = Lander::default().with_throttle(7.0).with_height(-1.0);
        assert_eq!(lander.throttle(), 1.0);
        assert_eq!(lander.height(), 0.0);
        assert!(lander.on_ground());

        let lander = Lander::new(-1.0, -3.0, 2.0);
        assert_eq!(lander.throttle(), 0.0);
        assert_eq!(lander.vertical_velocity(), -3.0);
    }

    #[test]
    fn test_deserialize_clamps_fields() {
        let state: WorldState = serde_json::from_str(
            r#"{"Flying":{"throttle":3.0,"vertical_velocity":0.0,"height":-5.0}}"#,
        )
        .unwrap();
        let lander = state.lander().copied().unwrap();
        assert_eq!(lander.throttle(), 1.0);
        assert_eq!(lander.height(), 0.0);

        let lander: Lander =
            serde_json::from_str(r#"{"throttle":-2.0,"vertical_velocity":-1.5,"height":4.0}"#)
                .unwrap();
        assert_eq!(lander, Lander::new(0.0, -1.5, 4.0));
    }

    #[test]
    fn test_serialized_lander_reloads_unchanged() {
        let state = WorldState::Flying(Lander::new(0.7, -1.25, 3.5));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<WorldState>(&json).unwrap(), state);
    }

    #[test]
    fn test_terminal_flags() {
        assert!(make_initial().is_flying());
        assert!(WorldState::Landed.is_terminal());
        assert!(WorldState::Crashed.is_terminal());
        assert!(WorldState::Crashed.lander().is_none());
    }
}
