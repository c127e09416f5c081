//! Levels domain: loading level scenes, the arena snapshot, and door triggers.

mod arena;
mod components;
mod loader;
mod systems;
mod tags;
mod volume;


pub use arena::{Arena, ArenaBuilder, ArenaLayout, BuiltArena, DoorOpening, DoorTrigger};
pub use components::LevelRoot;
pub use loader::{
    AssetProgress, FinishOutcome, LevelLoader, LoadOutcome, StagedStatus, staged_status,
};
pub use tags::{MeshRole, TagError, decode_extras, spawn_marker_slot};
pub use volume::Volume;

use bevy::prelude::*;

use crate::core::{FrameSet, GameState};
use crate::levels::systems::{
    attach_staged_level, check_door_triggers, poll_staged_level, spawn_requested_level,
};

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Arena>()
            .init_resource::<LevelLoader>()
            .add_systems(
                Update,
                (spawn_requested_level, poll_staged_level, attach_staged_level)
                    .chain()
                    .in_set(FrameSet::Gameplay),
            )
            .add_systems(
                Update,
                check_door_triggers
                    .in_set(FrameSet::Gameplay)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
