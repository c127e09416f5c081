//! Debug domain: inspector toggle and free-fly debug camera.

use bevy::prelude::*;

use crate::camera::GameCamera;
use crate::core::FrameClock;
use crate::debug::DebugCamera;
use crate::debug::state::{DebugState, FlyKeys, fly_direction};
use crate::input::{Action, FrameActions};

pub(crate) fn spawn_debug_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Debug Camera"),
        DebugCamera,
        Camera3d::default(),
        Camera {
            is_active: false,
            order: 1,
            ..default()
        },
        Transform::from_xyz(0.0, 8.0, -10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Swap between the follow camera and the debug camera.
/// The debug camera starts where the follow camera is.
pub(crate) fn toggle_inspector(
    actions: Res<FrameActions>,
    mut debug_state: ResMut<DebugState>,
    mut game_cameras: Query<
        (&mut Camera, &Transform),
        (With<GameCamera>, Without<DebugCamera>),
    >,
    mut debug_cameras: Query<
        (&mut Camera, &mut Transform),
        (With<DebugCamera>, Without<GameCamera>),
    >,
) {
    if !actions.contains(Action::ToggleInspector) {
        return;
    }

    let open = debug_state.toggle();
    let game_transform = game_cameras.iter().next().map(|(_, t)| *t);

    for (mut camera, _) in &mut game_cameras {
        camera.is_active = !open;
    }
    for (mut camera, mut transform) in &mut debug_cameras {
        camera.is_active = open;
        if open {
            if let Some(game_transform) = game_transform {
                *transform = game_transform;
            }
        }
    }

    info!("[DEBUG] Inspector {}", if open { "opened" } else { "closed" });
}

/// Arrows move, PageUp/PageDown climb, comma/period turn, shift boosts.
pub(crate) fn fly_debug_camera(
    keyboard: Res<ButtonInput<KeyCode>>,
    clock: Res<FrameClock>,
    debug_state: Res<DebugState>,
    mut cameras: Query<&mut Transform, With<DebugCamera>>,
) {
    let keys = FlyKeys {
        forward: keyboard.pressed(KeyCode::ArrowUp),
        back: keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
        up: keyboard.pressed(KeyCode::PageUp),
        down: keyboard.pressed(KeyCode::PageDown),
    };
    let boost = if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
        debug_state.boost
    } else {
        1.0
    };
    let turn = match (
        keyboard.pressed(KeyCode::Comma),
        keyboard.pressed(KeyCode::Period),
    ) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    };

    let step = debug_state.fly_speed * boost * clock.delta_seconds;
    for mut transform in &mut cameras {
        let local = fly_direction(keys);
        let motion = transform.rotation * local;
        transform.translation += motion * step;
        transform.rotate_y(turn * debug_state.turn_speed * clock.delta_seconds);
    }
}
