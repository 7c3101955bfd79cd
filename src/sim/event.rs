//! Input events delivered by the host loop

use serde::{Deserialize, Serialize};

use crate::consts::{KEY_THROTTLE_DOWN, KEY_THROTTLE_UP};

/// A single host event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A key went down; `code` is the host's key name ("A", "Z", "Space", ...)
    KeyPress(String),
    /// Simulated seconds since the previous tick
    TimeElapsed(f32),
    /// Anything else the host forwards (resize, focus, mouse, ...)
    Other,
}

impl Event {
    pub fn key(code: impl Into<String>) -> Self {
        Event::KeyPress(code.into())
    }

    pub fn tick(dt: f32) -> Self {
        Event::TimeElapsed(dt)
    }

    pub fn throttle_up() -> Self {
        Event::key(KEY_THROTTLE_UP)
    }

    pub fn throttle_down() -> Self {
        Event::key(KEY_THROTTLE_DOWN)
    }

    /// True for a key press matching `code`, ignoring ASCII case
    pub fn is_key(&self, code: &str) -> bool {
        matches!(self, Event::KeyPress(pressed) if pressed.eq_ignore_ascii_case(code))
    }
}
