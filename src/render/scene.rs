//! Scene projection: world state to picture
//!
//! The lander is drawn fixed at the origin (y up). While flying, the ground
//! line moves instead, sitting `height` world units below the lander's feet.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::picture::Picture;
use crate::consts::{FLAME_SCALE, PIXELS_PER_UNIT};
use crate::sim::{Lander, WorldState};

/// Rendering knobs, loaded with the rest of the settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Screen pixels per world unit of height
    pub pixels_per_unit: f32,
    /// Flame length in pixels at full throttle
    pub flame_scale: f32,
    /// Draw the telemetry line while flying
    pub show_hud: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            pixels_per_unit: PIXELS_PER_UNIT,
            flame_scale: FLAME_SCALE,
            show_hud: true,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const HULL: [f32; 4] = [0.85, 0.85, 0.9, 1.0];
    pub const FLAME: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
    pub const GROUND: [f32; 4] = [0.5, 0.45, 0.4, 1.0];
    pub const HUD: [f32; 4] = [0.7, 0.9, 1.0, 1.0];
    pub const LANDED: [f32; 4] = [0.2, 0.9, 0.4, 1.0];
    pub const CRASHED: [f32; 4] = [1.0, 0.25, 0.2, 1.0];
    pub const DEBRIS: [f32; 4] = [0.6, 0.6, 0.65, 1.0];
}

/// Half-width of the lander body
const BODY_HALF_WIDTH: f32 = 10.0;
/// Body top, relative to the origin
const BODY_TOP: f32 = 12.0;
/// Bottom of the body, where the nozzle sits
const NOZZLE_Y: f32 = -4.0;
/// Where the legs touch the ground
const FOOT_Y: f32 = -12.0;
const FOOT_SPREAD: f32 = 14.0;
/// Half-width of the visible ground line
const GROUND_HALF_WIDTH: f32 = 200.0;

/// Draw `state`
pub fn render(settings: &RenderSettings, state: &WorldState) -> Picture {
    match state {
        WorldState::Flying(lander) => flying(settings, lander),
        WorldState::Landed => ground(0.0)
            .over(hull())
            .over(banner("LANDED").colored(colors::LANDED)),
        WorldState::Crashed => ground(0.0)
            .over(debris())
            .over(banner("CRASHED").colored(colors::CRASHED)),
    }
}

fn flying(settings: &RenderSettings, lander: &Lander) -> Picture {
    let scene = ground(-lander.height() * settings.pixels_per_unit)
        .over(flame(lander.throttle() * settings.flame_scale))
        .over(hull());

    if settings.show_hud {
        scene.over(hud(lander))
    } else {
        scene
    }
}

fn hull() -> Picture {
    let body = Picture::polygon([
        Vec2::new(-BODY_HALF_WIDTH, NOZZLE_Y),
        Vec2::new(BODY_HALF_WIDTH, NOZZLE_Y),
        Vec2::new(BODY_HALF_WIDTH * 0.6, BODY_TOP),
        Vec2::new(-BODY_HALF_WIDTH * 0.6, BODY_TOP),
    ]);
    let left_leg = Picture::line([
        Vec2::new(-BODY_HALF_WIDTH * 0.8, NOZZLE_Y),
        Vec2::new(-FOOT_SPREAD, FOOT_Y),
    ]);
    let right_leg = Picture::line([
        Vec2::new(BODY_HALF_WIDTH * 0.8, NOZZLE_Y),
        Vec2::new(FOOT_SPREAD, FOOT_Y),
    ]);

    Picture::Pictures(vec![body, left_leg, right_leg]).colored(colors::HULL)
}

/// Flame hanging below the nozzle, `length` pixels long
fn flame(length: f32) -> Picture {
    if length <= 0.0 {
        return Picture::Blank;
    }
    Picture::polygon([
        Vec2::new(-BODY_HALF_WIDTH * 0.4, NOZZLE_Y),
        Vec2::new(BODY_HALF_WIDTH * 0.4, NOZZLE_Y),
        Vec2::new(0.0, NOZZLE_Y - length),
    ])
    .colored(colors::FLAME)
}

/// Ground line at the lander's feet, shifted vertically by `offset` pixels
fn ground(offset: f32) -> Picture {
    Picture::line([
        Vec2::new(-GROUND_HALF_WIDTH, FOOT_Y),
        Vec2::new(GROUND_HALF_WIDTH, FOOT_Y),
    ])
    .colored(colors::GROUND)
    .translated(0.0, offset)
}

fn debris() -> Picture {
    let shards = [
        (Vec2::new(-18.0, FOOT_Y), Vec2::new(-6.0, FOOT_Y + 5.0)),
        (Vec2::new(-4.0, FOOT_Y), Vec2::new(8.0, FOOT_Y + 9.0)),
        (Vec2::new(10.0, FOOT_Y + 2.0), Vec2::new(22.0, FOOT_Y)),
        (Vec2::new(-12.0, FOOT_Y + 8.0), Vec2::new(2.0, FOOT_Y + 3.0)),
    ];
    Picture::Pictures(
        shards
            .into_iter()
            .map(|(a, b)| Picture::line([a, b]))
            .collect(),
    )
    .colored(colors::DEBRIS)
}

fn banner(text: &str) -> Picture {
    Picture::text(text).translated(-40.0, 60.0)
}

fn hud(lander: &Lander) -> Picture {
    Picture::text(format!(
        "THR {:3.0}%  VEL {:+6.2}  ALT {:6.2}",
        lander.throttle() * 100.0,
        lander.vertical_velocity(),
        lander.height()
    ))
    .colored(colors::HUD)
    .translated(-GROUND_HALF_WIDTH, 100.0)
}
