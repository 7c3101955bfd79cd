//! Lunar Lander - a one-dimensional descent simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world state, events, reducer, replay)
//! - `render`: Backend-independent scene description and vertex tessellation
//! - `session`: Fixed-timestep driver for a host loop
//! - `pilot`: Scripted input sources (demo/testing)
//! - `settings`: Data-driven physics and rendering configuration
//!
//! A host only needs the three functions at the crate root: [`initial`] seeds
//! the world once, [`update`] folds each delivered event into a new state, and
//! [`view`] projects any state into a [`Picture`].

pub mod error;
pub mod pilot;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use render::Picture;
pub use session::Session;
pub use settings::Settings;
pub use sim::{Event, Physics, WorldState};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward acceleration, units/s²
    pub const GRAVITY: f32 = 0.5;
    /// Throttle change per key press
    pub const THROTTLE_STEP: f32 = 0.1;
    pub const MIN_THROTTLE: f32 = 0.0;
    pub const MAX_THROTTLE: f32 = 1.0;
    /// Touchdown speeds strictly below this land; anything else crashes
    pub const SAFE_LANDING_SPEED: f32 = 2.0;

    /// Starting lander
    pub const INITIAL_THROTTLE: f32 = 0.5;
    pub const INITIAL_VERTICAL_VELOCITY: f32 = 0.0;
    pub const INITIAL_HEIGHT: f32 = 10.0;

    /// Key codes the reducer reacts to
    pub const KEY_THROTTLE_UP: &str = "A";
    pub const KEY_THROTTLE_DOWN: &str = "Z";

    /// Screen pixels per world unit of height
    pub const PIXELS_PER_UNIT: f32 = 20.0;
    /// Flame length in pixels at full throttle
    pub const FLAME_SCALE: f32 = 30.0;
}

/// Seed value handed to the host once at startup
pub fn initial() -> WorldState {
    sim::make_initial()
}

/// Advance `state` by one delivered event using the default physics
pub fn update(event: &Event, state: WorldState) -> WorldState {
    sim::reduce(&Physics::default(), event, state)
}

/// Draw `state` with the default render settings
pub fn view(state: &WorldState) -> Picture {
    render::render(&render::RenderSettings::default(), state)
}
