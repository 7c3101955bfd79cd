//! Lunar Lander entry point
//!
//! Headless demo: an autopilot flies one game at the fixed timestep and the
//! outcome is printed. Graphical hosts drive `lunar_lander::Session` instead.
//!
//! Usage: lunar-lander [SETTINGS.json|-] [hover|random] [SEED] [REPLAY_OUT.json]

use std::env;
use std::process::ExitCode;

use lunar_lander::pilot::{HoverPilot, Pilot, RandomPilot};
use lunar_lander::render::tessellate;
use lunar_lander::{Session, Settings, WorldState};

/// Give up after this much simulated time
const MAX_FLIGHT_SECS: f32 = 600.0;
const DEFAULT_SEED: u64 = 12345;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Lunar Lander (headless) starting...");

    match run() {
        Ok(WorldState::Landed) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run() -> lunar_lander::Result<WorldState> {
    let mut args = env::args().skip(1);

    let settings = match args.next().as_deref() {
        None | Some("-") => Settings::default(),
        Some(path) => Settings::try_load(path)?,
    };
    let pilot_name = args.next().unwrap_or_else(|| "hover".to_owned());
    let seed = match args.next() {
        None => DEFAULT_SEED,
        Some(arg) => arg.parse().unwrap_or_else(|e| {
            log::warn!("Invalid seed {arg:?} ({e}), using {DEFAULT_SEED}");
            DEFAULT_SEED
        }),
    };
    let replay_path = args.next();

    let mut pilot: Box<dyn Pilot> = match pilot_name.as_str() {
        "random" => Box::new(RandomPilot::new(seed, 0.1)),
        "hover" => Box::new(HoverPilot::for_physics(&settings.physics)),
        other => {
            log::warn!("Unknown pilot {other:?}, using hover");
            Box::new(HoverPilot::for_physics(&settings.physics))
        }
    };

    let frame_dt = settings.sim_dt;
    let mut session = Session::new(settings);
    while !session.is_over() && session.elapsed() < MAX_FLIGHT_SECS {
        if let Some(event) = pilot.command(&session.state()) {
            session.handle(event);
        }
        session.advance(frame_dt);
    }

    let state = session.state();
    let vertices = tessellate(&session.frame()).len();
    println!(
        "{:?} after {:.2}s, {} events, final frame {} vertices",
        state,
        session.elapsed(),
        session.replay().len(),
        vertices
    );

    if let Some(path) = replay_path {
        session.into_replay().save(path)?;
    }
    Ok(state)
}
