//! Camera domain: game camera spawn and follow systems.

use bevy::prelude::*;

use crate::camera::GameCamera;
use crate::camera::follow::{FollowTuning, follow_step};
use crate::core::FrameClock;
use crate::player::Player;

pub(crate) fn spawn_game_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Follow Camera"),
        GameCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            near: 0.05,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 250.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Chase the centroid of all players and keep looking at it.
pub(crate) fn follow_players(
    clock: Res<FrameClock>,
    tuning: Res<FollowTuning>,
    players: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut Transform, (With<GameCamera>, Without<Player>)>,
) {
    let (sum, count) = players
        .iter()
        .fold((Vec3::ZERO, 0u32), |(sum, count), t| (sum + t.translation, count + 1));
    if count == 0 {
        return;
    }
    let target = sum / count as f32;

    for mut transform in &mut cameras {
        transform.translation =
            follow_step(transform.translation, target, &tuning, clock.delta_seconds);
        transform.look_at(target, Vec3::Y);
    }
}
