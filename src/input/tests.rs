//! Input domain: tests for axis smoothing, stick mapping, bindings and actions.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::{ButtonInput, KeyCode, Vec2, World};

use super::axis::{key_target, move_towards, stick_axis};
use super::systems::{clear_frame_actions, collect_actions};
use super::{Action, FrameActions, InputTuning, KeyBindings, MAX_PLAYERS, PlayerAxes};

const EPS: f32 = 1e-5;

// -----------------------------------------------------------------------------
// move_towards tests
// -----------------------------------------------------------------------------

#[test]
fn test_move_towards_steps_and_stops() {
    assert!((move_towards(0.0, 1.0, 0.25) - 0.25).abs() < EPS);
    assert!((move_towards(0.9, 1.0, 0.25) - 1.0).abs() < EPS);
    assert!((move_towards(0.0, -1.0, 0.25) + 0.25).abs() < EPS);
    assert_eq!(move_towards(0.5, 0.5, 0.1), 0.5);
}

#[test]
fn test_key_target_negative_wins() {
    assert_eq!(key_target(true, true), -1.0);
    assert_eq!(key_target(true, false), -1.0);
    assert_eq!(key_target(false, true), 1.0);
    assert_eq!(key_target(false, false), 0.0);
}

// -----------------------------------------------------------------------------
// PlayerAxes tests
// -----------------------------------------------------------------------------

#[test]
fn test_axis_ramp_follows_rate() {
    let rate = InputTuning::default().axis_rate;
    let dt = 1.0 / 60.0;
    let mut axes = PlayerAxes::default();

    for frame in 1..=12 {
        axes.smooth_towards(1, Vec2::new(1.0, 0.0), rate, dt);
        let t = frame as f32 * dt;
        let expected = (rate * t).min(1.0);
        assert!(
            (axes.axis(1).x - expected).abs() < 1e-4,
            "frame {}: {} vs {}",
            frame,
            axes.axis(1).x,
            expected
        );
        assert_eq!(axes.axis(1).y, 0.0);
    }
    assert_eq!(axes.axis(1).x, 1.0);
}

#[test]
fn test_axis_release_is_symmetric() {
    let mut axes = PlayerAxes::default();
    axes.smooth_towards(2, Vec2::new(0.0, 1.0), 10.0, 1.0);
    assert_eq!(axes.axis(2), Vec2::new(0.0, 1.0));

    axes.smooth_towards(2, Vec2::ZERO, 10.0, 0.06);
    assert!((axes.axis(2).y - 0.4).abs() < EPS);
    axes.smooth_towards(2, Vec2::ZERO, 10.0, 0.06);
    assert_eq!(axes.axis(2), Vec2::ZERO);
}

#[test]
fn test_axes_are_independent_per_player() {
    let mut axes = PlayerAxes::default();
    axes.smooth_towards(1, Vec2::ONE, 10.0, 1.0);
    assert_eq!(axes.axis(1), Vec2::ONE);
    for player in 2..=MAX_PLAYERS {
        assert_eq!(axes.axis(player), Vec2::ZERO);
    }
}

#[test]
fn test_unknown_player_slots_read_zero() {
    let mut axes = PlayerAxes::default();
    axes.set(0, Vec2::ONE);
    axes.set(MAX_PLAYERS + 1, Vec2::ONE);
    assert_eq!(axes.axis(0), Vec2::ZERO);
    assert_eq!(axes.axis(MAX_PLAYERS + 1), Vec2::ZERO);
}

#[test]
fn test_set_clamps_to_unit_range() {
    let mut axes = PlayerAxes::default();
    axes.set(1, Vec2::new(2.0, -3.0));
    assert_eq!(axes.axis(1), Vec2::new(1.0, -1.0));
}

#[test]
fn test_gamepad_connection_change_reported_once() {
    let mut axes = PlayerAxes::default();
    assert!(axes.set_gamepad_connected(true));
    assert!(!axes.set_gamepad_connected(true));
    assert!(axes.gamepad_connected());
    assert!(axes.set_gamepad_connected(false));
}

// -----------------------------------------------------------------------------
// Stick mapping tests
// -----------------------------------------------------------------------------

#[test]
fn test_stick_axis_rounds_to_three_decimals() {
    let axis = stick_axis(Vec2::new(0.123456, -0.98765), false);
    assert!((axis.x - 0.123).abs() < EPS);
    assert!((axis.y + 0.988).abs() < EPS);
}

#[test]
fn test_stick_axis_inversion() {
    assert_eq!(stick_axis(Vec2::new(0.0, 0.5), true), Vec2::new(0.0, -0.5));
    assert_eq!(stick_axis(Vec2::new(0.0, 0.5), false), Vec2::new(0.0, 0.5));
}

// -----------------------------------------------------------------------------
// Bindings and actions tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_bindings() {
    let bindings = KeyBindings::default();
    assert_eq!(bindings.players.len(), 2);
    assert_eq!(bindings.players[0].left, KeyCode::KeyA);
    assert_eq!(bindings.players[1].right, KeyCode::Semicolon);
    assert!(bindings
        .actions
        .contains(&(KeyCode::KeyN, Action::SkipLevel)));
    assert!(bindings
        .actions
        .contains(&(KeyCode::KeyI, Action::ToggleInspector)));
}

#[test]
fn test_actions_visible_until_cleared() {
    let mut actions = FrameActions::default();
    actions.record(Action::SkipLevel);
    actions.record(Action::SkipLevel);

    assert!(actions.contains(Action::SkipLevel));
    assert!(!actions.contains(Action::ToggleInspector));

    actions.clear();
    assert!(actions.is_empty());
    assert!(!actions.contains(Action::SkipLevel));
}

// -----------------------------------------------------------------------------
// Action system tests
// -----------------------------------------------------------------------------

fn action_world() -> World {
    let mut world = World::new();
    world.init_resource::<ButtonInput<KeyCode>>();
    world.init_resource::<KeyBindings>();
    world.init_resource::<FrameActions>();
    world
}

#[test]
fn test_held_key_records_action_only_on_press() {
    let mut world = action_world();
    world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyN);

    world.run_system_once(collect_actions).expect("collect runs");
    assert!(world.resource::<FrameActions>().contains(Action::SkipLevel));

    // Next tick: actions cleared, key still held but no longer just pressed
    world.run_system_once(clear_frame_actions).expect("clear runs");
    world.resource_mut::<ButtonInput<KeyCode>>().clear();
    world.run_system_once(collect_actions).expect("collect runs");

    assert!(world.resource::<ButtonInput<KeyCode>>().pressed(KeyCode::KeyN));
    assert!(world.resource::<FrameActions>().is_empty());
}

#[test]
fn test_unbound_key_records_nothing() {
    let mut world = action_world();
    world.resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::KeyZ);
    world.run_system_once(collect_actions).expect("collect runs");
    assert!(world.resource::<FrameActions>().is_empty());
}
