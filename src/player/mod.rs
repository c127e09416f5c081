//! Player domain: rolling player balls, their respawn and the level goal check.

mod components;
mod resources;
mod steering;
mod systems;


pub use components::{Player, PlayerPhase};
pub use resources::BallTuning;
pub use steering::{accelerate, steering_intent};

use bevy::prelude::*;

use crate::core::{FrameSet, GameState};
use crate::player::systems::{
    check_goal, recover_fallen_players, respawn_players, spawn_players, steer_players,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BallTuning>()
            .add_systems(Startup, spawn_players)
            .add_systems(OnEnter(GameState::LevelReady), respawn_players)
            .add_systems(
                Update,
                (steer_players, check_goal, recover_fallen_players)
                    .chain()
                    .in_set(FrameSet::Gameplay)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
