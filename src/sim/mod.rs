//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - State is replaced, never mutated in place
//! - No clocks, no RNG
//! - Every (event, state) pair has a defined result
//! - No rendering or platform dependencies

pub mod event;
pub mod physics;
pub mod reduce;
pub mod replay;
pub mod state;

pub use event::Event;
pub use physics::Physics;
pub use reduce::{Rule, reduce, reduce_traced};
pub use replay::Replay;
pub use state::{Lander, WorldState, clamp_height, clamp_throttle, make_initial};
