//! Recorded event logs
//!
//! Because the reducer is pure, a physics config plus the exact event
//! sequence is enough to reproduce any game bit-for-bit.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::event::Event;
use super::physics::Physics;
use super::reduce::reduce;
use super::state::{WorldState, make_initial};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub physics: Physics,
    pub events: Vec<Event>,
}

impl Replay {
    pub fn new(physics: Physics) -> Self {
        Self {
            physics,
            events: Vec::new(),
        }
    }

    pub fn record(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Final state after folding every event into the initial state
    pub fn run(&self) -> WorldState {
        self.events
            .iter()
            .fold(make_initial(), |state, event| reduce(&self.physics, event, state))
    }

    /// Every intermediate state, starting with the initial one
    pub fn states(&self) -> impl Iterator<Item = WorldState> + '_ {
        std::iter::once(make_initial()).chain(self.events.iter().scan(
            make_initial(),
            |state, event| {
                *state = reduce(&self.physics, event, *state);
                Some(*state)
            },
        ))
    }

    /// Total simulated seconds covered by the log
    pub fn duration(&self) -> f32 {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::TimeElapsed(dt) => Some(dt.max(0.0)),
                _ => None,
            })
            .sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let replay = Self::from_json(&json)?;
        log::info!("Loaded replay with {} events from {}", replay.len(), path.display());
        Ok(replay)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|e| Error::io(path, e))?;
        log::info!("Saved replay with {} events to {}", self.len(), path.display());
        Ok(())
    }
}
