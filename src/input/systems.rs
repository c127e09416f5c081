//! Input domain: device sampling systems.

use bevy::prelude::*;

use crate::core::FrameClock;
use crate::input::actions::FrameActions;
use crate::input::axis::{InputTuning, PlayerAxes, key_target, stick_axis};
use crate::input::bindings::{AxisKeys, KeyBindings};

fn keyboard_target(keyboard: &ButtonInput<KeyCode>, keys: &AxisKeys) -> Vec2 {
    Vec2::new(
        key_target(keyboard.pressed(keys.left), keyboard.pressed(keys.right)),
        key_target(keyboard.pressed(keys.down), keyboard.pressed(keys.up)),
    )
}

/// Update every player's axis from the first gamepad, or from the keyboard when none is connected.
pub(crate) fn sample_axes(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    bindings: Res<KeyBindings>,
    tuning: Res<InputTuning>,
    clock: Res<FrameClock>,
    mut axes: ResMut<PlayerAxes>,
) {
    let gamepad = gamepads.iter().next();

    if axes.set_gamepad_connected(gamepad.is_some()) {
        if gamepad.is_some() {
            info!("[INPUT] Gamepad connected, driving player 1");
        } else {
            info!("[INPUT] Gamepad disconnected, back to keyboard");
        }
    }

    if let Some(gamepad) = gamepad {
        axes.set(1, stick_axis(gamepad.left_stick(), tuning.invert_stick_y));
        return;
    }

    for (slot, keys) in bindings.players.iter().enumerate() {
        let target = keyboard_target(&keyboard, keys);
        axes.smooth_towards(slot + 1, target, tuning.axis_rate, clock.delta_seconds);
    }
}

/// Record actions pressed this tick.
pub(crate) fn collect_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut actions: ResMut<FrameActions>,
) {
    for (key, action) in &bindings.actions {
        if keyboard.just_pressed(*key) {
            actions.record(*action);
        }
    }
}

pub(crate) fn clear_frame_actions(mut actions: ResMut<FrameActions>) {
    actions.clear();
}
