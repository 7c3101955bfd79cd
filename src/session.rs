//! Fixed-timestep session driver
//!
//! Sits between a host loop and the pure reducer: turns variable frame times
//! into fixed `TimeElapsed` ticks, applies key presses as they arrive, and
//! records every event it feeds the reducer so the game can be replayed.

use crate::render::{Picture, render};
use crate::settings::Settings;
use crate::sim::{Event, Replay, WorldState, make_initial, reduce};

/// Longest frame the accumulator will absorb (seconds)
const MAX_FRAME_DT: f32 = 0.1;

pub struct Session {
    settings: Settings,
    state: WorldState,
    accumulator: f32,
    /// Simulated seconds run so far
    elapsed: f32,
    replay: Replay,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        log::info!("New session: {:?}", settings.physics);
        Self {
            replay: Replay::new(settings.physics),
            settings,
            state: make_initial(),
            accumulator: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn state(&self) -> WorldState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    pub fn into_replay(self) -> Replay {
        self.replay
    }

    /// Feed one event straight to the reducer. Events after touchdown are
    /// dropped without being recorded.
    pub fn handle(&mut self, event: Event) -> WorldState {
        if self.is_over() {
            return self.state;
        }

        if let Event::TimeElapsed(dt) = event {
            self.elapsed += dt.max(0.0);
        }

        self.state = reduce(&self.settings.physics, &event, self.state);
        self.replay.record(event);

        if self.state.is_terminal() {
            log::info!("Flight over after {:.2}s: {:?}", self.elapsed, self.state);
        }
        self.state
    }

    /// Run as many fixed ticks as `frame_dt` covers. Returns the tick count.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if self.is_over() {
            return 0;
        }

        // max/min rather than clamp: a NaN frame must not poison the accumulator
        self.accumulator += frame_dt.max(0.0).min(MAX_FRAME_DT);

        let sim_dt = self.settings.sim_dt;
        let mut substeps = 0;
        while self.accumulator >= sim_dt && substeps < self.settings.max_substeps {
            self.handle(Event::tick(sim_dt));
            self.accumulator -= sim_dt;
            substeps += 1;

            if self.is_over() {
                self.accumulator = 0.0;
                break;
            }
        }

        log::debug!("advance({frame_dt:.4}) ran {substeps} ticks");
        substeps
    }

    /// Picture of the current state
    pub fn frame(&self) -> Picture {
        render(&self.settings.render, &self.state)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
