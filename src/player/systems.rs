//! Player domain: ball spawning, respawning, steering and goal checks.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::GameCamera;
use crate::content::PlayerCount;
use crate::core::{FrameClock, GameState};
use crate::input::{Action, FrameActions, PlayerAxes};
use crate::levels::{Arena, Volume};
use crate::player::components::{Player, PlayerPhase};
use crate::player::resources::BallTuning;
use crate::player::steering::{accelerate, steering_intent};

const PLAYER_COLORS: [Color; 4] = [
    Color::srgb(0.9, 0.25, 0.2),
    Color::srgb(0.2, 0.45, 0.9),
    Color::srgb(0.25, 0.8, 0.3),
    Color::srgb(0.95, 0.8, 0.2),
];

/// Spawn one ball per local player. Balls stay disabled and hidden until the first respawn.
pub(crate) fn spawn_players(
    mut commands: Commands,
    count: Res<PlayerCount>,
    tuning: Res<BallTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(tuning.radius));

    for index in 1..=count.0 {
        let color = PLAYER_COLORS[(index - 1) % PLAYER_COLORS.len()];
        commands.spawn((
            Name::new(format!("Player {}", index)),
            Player::new(index),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.4,
                ..default()
            })),
            Transform::default(),
            Visibility::Hidden,
            RigidBody::Dynamic,
            Collider::sphere(tuning.radius),
            LinearDamping(tuning.linear_damping),
            AngularDamping(tuning.angular_damping),
            RigidBodyDisabled,
        ));
    }

    info!("[PLAYER] Spawned {} player(s)", count.0);
}

/// Put every player on its spawn point with the current level's goal.
pub(crate) fn respawn_players(
    mut commands: Commands,
    arena: Res<Arena>,
    mut players: Query<(
        Entity,
        &mut Player,
        &mut Transform,
        &mut LinearVelocity,
        &mut AngularVelocity,
    )>,
) {
    let goal = arena.goal();
    for (entity, mut player, mut transform, mut linear, mut angular) in &mut players {
        let spawn = arena.spawn_point(player.index);
        player.respawn(spawn, goal);
        *transform = Transform::from_translation(spawn);
        linear.0 = Vec3::ZERO;
        angular.0 = Vec3::ZERO;
        commands
            .entity(entity)
            .remove::<RigidBodyDisabled>()
            .insert(Visibility::Inherited);
        info!("[PLAYER] Player {} respawned at {:?}", player.index, spawn);
    }
}

/// Push each ball along its input axis, relative to where the follow camera looks.
pub(crate) fn steer_players(
    axes: Res<PlayerAxes>,
    tuning: Res<BallTuning>,
    clock: Res<FrameClock>,
    camera: Query<&GlobalTransform, With<GameCamera>>,
    mut players: Query<(&mut Player, &mut LinearVelocity)>,
) {
    let (forward, right) = camera
        .iter()
        .next()
        .map_or((Vec3::NEG_Z, Vec3::X), |t| {
            (t.forward().as_vec3(), t.right().as_vec3())
        });

    for (mut player, mut velocity) in &mut players {
        if player.phase == PlayerPhase::Completed {
            continue;
        }
        let intent = steering_intent(axes.axis(player.index), forward, right);
        player.note_intent(intent);
        velocity.0 = accelerate(
            velocity.0,
            intent,
            tuning.acceleration,
            tuning.max_speed,
            clock.delta_seconds,
        );
    }
}

/// Signal the level exit the first time a ball touches the hole.
pub(crate) fn check_goal(
    tuning: Res<BallTuning>,
    actions: Res<FrameActions>,
    mut next_state: ResMut<NextState<GameState>>,
    mut players: Query<(&mut Player, &Transform)>,
) {
    for (mut player, transform) in &mut players {
        let collider = Volume::around(transform.translation, tuning.radius);
        if !player.reach_goal(&collider) {
            continue;
        }
        info!("[PLAYER] Player {} reached the hole", player.index);
        // A skip this tick already moved the flow on
        if !actions.contains(Action::SkipLevel) {
            next_state.set(GameState::Exited);
        }
    }
}

/// Put balls that fell off the arena back on their spawn point.
pub(crate) fn recover_fallen_players(
    tuning: Res<BallTuning>,
    mut players: Query<(&Player, &mut Transform, &mut LinearVelocity, &mut AngularVelocity)>,
) {
    for (player, mut transform, mut linear, mut angular) in &mut players {
        if transform.translation.y >= tuning.fall_limit_y {
            continue;
        }
        warn!("[PLAYER] Player {} fell off the arena", player.index);
        *transform = Transform::from_translation(player.spawn_point);
        linear.0 = Vec3::ZERO;
        angular.0 = Vec3::ZERO;
    }
}
