//! Scripted input sources
//!
//! A pilot looks at the current state once per frame and may press a key.
//! Used by the headless binary (demo mode) and by tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Event, Physics, WorldState};

pub trait Pilot {
    /// Key press to deliver this frame, if any
    fn command(&mut self, state: &WorldState) -> Option<Event>;
}

/// Holds a steady descent rate with bang-bang throttle control
#[derive(Debug, Clone)]
pub struct HoverPilot {
    /// Desired vertical velocity (negative = descending)
    target_velocity: f32,
    /// Dead band around the target where no key is pressed
    tolerance: f32,
}

impl HoverPilot {
    pub fn new(target_velocity: f32, tolerance: f32) -> Self {
        Self {
            target_velocity,
            tolerance: tolerance.abs(),
        }
    }

    /// Descend at half the safe landing speed
    pub fn for_physics(physics: &Physics) -> Self {
        Self::new(-physics.safe_landing_speed * 0.5, 0.1)
    }
}

impl Pilot for HoverPilot {
    fn command(&mut self, state: &WorldState) -> Option<Event> {
        let lander = state.lander()?;
        if lander.vertical_velocity() < self.target_velocity - self.tolerance {
            Some(Event::throttle_up())
        } else if lander.vertical_velocity() > self.target_velocity + self.tolerance {
            Some(Event::throttle_down())
        } else {
            None
        }
    }
}

/// Mashes keys at random from a seed, for demos and fuzzing
#[derive(Debug, Clone)]
pub struct RandomPilot {
    rng: Pcg32,
    /// Chance per frame of pressing anything
    press_chance: f64,
}

impl RandomPilot {
    pub fn new(seed: u64, press_chance: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            press_chance: press_chance.clamp(0.0, 1.0),
        }
    }
}

impl Pilot for RandomPilot {
    fn command(&mut self, state: &WorldState) -> Option<Event> {
        if state.is_terminal() || !self.rng.random_bool(self.press_chance) {
            return None;
        }
        Some(match self.rng.random_range(0..4) {
            0 | 1 => Event::throttle_up(),
            2 => Event::throttle_down(),
            _ => Event::key("Space"),
        })
    }
}
