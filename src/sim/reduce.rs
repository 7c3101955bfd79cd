//! Event reducer
//!
//! Folds one event into the world state. Rules are checked in a fixed order
//! and the first match wins:
//!
//! 1. Terminal guard: `Landed`/`Crashed` absorb every event
//! 2. Ground contact: a lander on the floor is classified, whatever the event
//! 3. Throttle up on `A`
//! 4. Throttle down on `Z`
//! 5. Time integration on `TimeElapsed`
//! 6. Everything else is ignored
//!
//! Ground contact must stay ahead of integration so a lander resting at
//! height 0 is never integrated again.

use super::event::Event;
use super::physics::Physics;
use super::state::{Lander, WorldState};
use crate::consts::{KEY_THROTTLE_DOWN, KEY_THROTTLE_UP};

/// Which rule produced a reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    TerminalGuard,
    GroundContact,
    ThrottleUp,
    ThrottleDown,
    Integrate,
    Ignore,
}

/// Advance `state` by one event
pub fn reduce(physics: &Physics, event: &Event, state: WorldState) -> WorldState {
    reduce_traced(physics, event, state).1
}

/// Like [`reduce`], also reporting the rule that matched
pub fn reduce_traced(physics: &Physics, event: &Event, state: WorldState) -> (Rule, WorldState) {
    let (rule, next) = apply_rules(physics, event, state);
    log::trace!("{event:?}: {rule:?} -> {next:?}");
    (rule, next)
}

fn apply_rules(physics: &Physics, event: &Event, state: WorldState) -> (Rule, WorldState) {
    let lander = match state {
        WorldState::Flying(lander) => lander,
        WorldState::Landed | WorldState::Crashed => return (Rule::TerminalGuard, state),
    };

    if lander.on_ground() {
        return (Rule::GroundContact, touch_down(physics, &lander));
    }

    if event.is_key(KEY_THROTTLE_UP) {
        let lander = lander.with_throttle(lander.throttle() + physics.throttle_step);
        return (Rule::ThrottleUp, WorldState::Flying(lander));
    }

    if event.is_key(KEY_THROTTLE_DOWN) {
        let lander = lander.with_throttle(lander.throttle() - physics.throttle_step);
        return (Rule::ThrottleDown, WorldState::Flying(lander));
    }

    if let Event::TimeElapsed(dt) = *event {
        return (Rule::Integrate, WorldState::Flying(integrate(physics, &lander, dt)));
    }

    (Rule::Ignore, state)
}

/// Classify a lander resting on the floor
fn touch_down(physics: &Physics, lander: &Lander) -> WorldState {
    if physics.is_safe_touchdown(lander.vertical_velocity()) {
        log::info!("Landed at {:.3} units/s", lander.vertical_velocity());
        WorldState::Landed
    } else {
        log::info!("Crashed at {:.3} units/s", lander.vertical_velocity());
        WorldState::Crashed
    }
}

/// One Euler step. Displacement uses the velocity from *before* this step;
/// replays depend on that ordering.
fn integrate(physics: &Physics, lander: &Lander, dt: f32) -> Lander {
    // Negative (or NaN) time never runs the clock backwards
    let dt = dt.max(0.0);
    let acceleration = lander.throttle() - physics.gravity;

    Lander::new(
        lander.throttle(),
        lander.vertical_velocity() + acceleration * dt,
        lander.height() + lander.vertical_velocity() * dt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::make_initial;
    use proptest::prelude::*;

    fn flying(throttle: f32, vertical_velocity: f32, height: f32) -> WorldState {
        WorldState::Flying(Lander::new(throttle, vertical_velocity, height))
    }

    fn physics() -> Physics {
        Physics::default()
            .with_gravity(0.5)
            .with_throttle_step(0.1)
            .with_safe_landing_speed(2.0)
    }

    #[test]
    fn test_balanced_thrust_holds_position() {
        let next = reduce(&physics(), &Event::tick(1.0), flying(0.5, 0.0, 10.0));
        assert_eq!(next, flying(0.5, 0.0, 10.0));
    }

    #[test]
    fn test_throttle_up_clamps() {
        let next = reduce(&physics(), &Event::key("A"), flying(0.95, 0.0, 5.0));
        assert_eq!(next, flying(1.0, 0.0, 5.0));
    }

    #[test]
    fn test_throttle_down_clamps() {
        let next = reduce(&physics(), &Event::key("Z"), flying(0.05, -1.0, 5.0));
        assert_eq!(next, flying(0.0, -1.0, 5.0));
    }

    #[test]
    fn test_lowercase_keys() {
        let (rule, next) = reduce_traced(&physics(), &Event::key("a"), flying(0.5, 0.0, 5.0));
        assert_eq!(rule, Rule::ThrottleUp);
        let WorldState::Flying(lander) = next else {
            panic!("expected flying, got {next:?}");
        };
        assert!((lander.throttle() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_integration_uses_previous_velocity() {
        // Free fall: position moves by v0*dt, velocity gains -g*dt
        let next = reduce(&physics(), &Event::tick(1.0), flying(0.0, -1.0, 10.0));
        assert_eq!(next, flying(0.0, -1.5, 9.0));

        // From rest the first step does not move at all
        let next = reduce(&physics(), &Event::tick(2.0), flying(0.0, 0.0, 10.0));
        assert_eq!(next, flying(0.0, -1.0, 10.0));
    }

    #[test]
    fn test_integration_clamps_to_floor() {
        let next = reduce(&physics(), &Event::tick(1.0), flying(0.0, -20.0, 3.0));
        assert_eq!(next, flying(0.0, -20.5, 0.0));
    }

    #[test]
    fn test_negative_dt_is_zero() {
        let state = flying(0.2, -1.0, 4.0);
        assert_eq!(reduce(&physics(), &Event::tick(-1.0), state), state);
        assert_eq!(reduce(&physics(), &Event::tick(f32::NAN), state), state);
    }

    #[test]
    fn test_landing_classification() {
        let threshold = physics().safe_landing_speed;
        let soft = flying(0.5, -threshold / 2.0, 0.0);
        let hard = flying(0.5, -threshold * 2.0, 0.0);
        assert_eq!(reduce(&physics(), &Event::tick(0.1), soft), WorldState::Landed);
        assert_eq!(reduce(&physics(), &Event::tick(0.1), hard), WorldState::Crashed);
        // Exactly at the threshold is not safe
        let edge = flying(0.5, -threshold, 0.0);
        assert_eq!(reduce(&physics(), &Event::Other, edge), WorldState::Crashed);
    }

    #[test]
    fn test_loaded_state_keeps_throttle_in_range() {
        let state: WorldState = serde_json::from_str(
            r#"{"Flying":{"throttle":3.0,"vertical_velocity":0.0,"height":5.0}}"#,
        )
        .unwrap();
        let next = reduce(&physics(), &Event::tick(0.1), state);
        let lander = next.lander().copied().unwrap();
        assert_eq!(lander.throttle(), 1.0);
        assert!((lander.vertical_velocity() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_ground_contact_precedes_every_rule() {
        let grounded = flying(0.5, -0.5, 0.0);
        for event in [
            Event::tick(1.0),
            Event::key("A"),
            Event::key("Z"),
            Event::key("Space"),
            Event::Other,
        ] {
            let (rule, next) = reduce_traced(&physics(), &event, grounded);
            assert_eq!(rule, Rule::GroundContact, "{event:?}");
            assert_eq!(next, WorldState::Landed, "{event:?}");
        }
    }

    #[test]
    fn test_unknown_events_ignored() {
        let state = make_initial();
        for event in [Event::key("Q"), Event::key(""), Event::Other] {
            assert_eq!(reduce_traced(&physics(), &event, state), (Rule::Ignore, state));
        }
    }

    #[test]
    fn test_terminal_absorbs() {
        for state in [WorldState::Landed, WorldState::Crashed] {
            for event in [Event::tick(1.0), Event::key("A"), Event::Other] {
                assert_eq!(
                    reduce_traced(&physics(), &event, state),
                    (Rule::TerminalGuard, state)
                );
            }
        }
    }

    #[test]
    fn test_free_fall_ends_in_crash() {
        let physics = physics();
        let mut state = flying(0.0, 0.0, 10.0);
        let mut ticks = 0;
        while state.is_flying() {
            state = reduce(&physics, &Event::tick(0.1), state);
            ticks += 1;
            assert!(ticks < 10_000, "lander never reached the ground");
        }
        assert_eq!(state, WorldState::Crashed);
    }

    fn any_event() -> impl Strategy<Value = Event> {
        prop_oneof![
            Just(Event::key("A")),
            Just(Event::key("Z")),
            "[a-zA-Z]{0,6}".prop_map(Event::KeyPress),
            (-1.0f32..2.0).prop_map(Event::TimeElapsed),
            Just(Event::Other),
        ]
    }

    proptest! {
        #[test]
        fn prop_throttle_stays_in_range(keys in prop::collection::vec(any::<bool>(), 0..200)) {
            let physics = physics();
            let mut state = flying(0.5, 0.0, 5.0);
            for up in keys {
                let event = if up { Event::key("A") } else { Event::key("Z") };
                state = reduce(&physics, &event, state);
                let lander = state.lander().copied().unwrap();
                prop_assert!((0.0..=1.0).contains(&lander.throttle()));
            }
        }

        #[test]
        fn prop_height_never_negative(
            throttle in 0.0f32..=1.0,
            velocity in -20.0f32..20.0,
            dts in prop::collection::vec(-0.5f32..1.0, 0..200),
        ) {
            let physics = physics();
            let mut state = flying(throttle, velocity, 10.0);
            for dt in dts {
                state = reduce(&physics, &Event::tick(dt), state);
                if let Some(lander) = state.lander() {
                    prop_assert!(lander.height() >= 0.0);
                }
            }
        }

        #[test]
        fn prop_terminal_states_absorb(events in prop::collection::vec(any_event(), 0..50)) {
            let physics = physics();
            for terminal in [WorldState::Landed, WorldState::Crashed] {
                let end = events
                    .iter()
                    .fold(terminal, |state, event| reduce(&physics, event, state));
                prop_assert_eq!(end, terminal);
            }
        }

        #[test]
        fn prop_reduce_is_deterministic(events in prop::collection::vec(any_event(), 0..100)) {
            let physics = physics();
            let run = || {
                events
                    .iter()
                    .fold(make_initial(), |state, event| reduce(&physics, event, state))
            };
            prop_assert_eq!(run(), run());
        }

        #[test]
        fn prop_invariants_hold_for_mixed_input(events in prop::collection::vec(any_event(), 0..300)) {
            let physics = physics();
            let mut state = make_initial();
            for event in &events {
                state = reduce(&physics, event, state);
                if let Some(lander) = state.lander() {
                    prop_assert!((0.0..=1.0).contains(&lander.throttle()));
                    prop_assert!(lander.height() >= 0.0);
                }
            }
        }
    }
}
