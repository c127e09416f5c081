//! Camera domain: the follow camera that chases the players.

mod follow;
mod systems;


pub use follow::{FollowTuning, REFERENCE_FPS, follow_step};

use bevy::prelude::*;

use crate::camera::systems::{follow_players, spawn_game_camera};
use crate::core::FrameSet;

/// Marker for the gameplay camera
#[derive(Component, Debug)]
pub struct GameCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FollowTuning>()
            .add_systems(Startup, spawn_game_camera)
            .add_systems(Update, follow_players.in_set(FrameSet::Presentation));
    }
}
