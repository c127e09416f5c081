//! Debug inspector for fast iteration (dev-tools builds only).
//!
//! Features:
//! - Toggle between the follow camera and a free-fly debug camera (I)
//! - Info overlay with game state, level, triggers and player positions

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::debug::systems::{fly_debug_camera, spawn_debug_camera, toggle_inspector};
use crate::debug::ui::{spawn_debug_info_overlay, update_debug_info_overlay};

/// Marker for the free-fly debug camera
#[derive(Component, Debug)]
pub struct DebugCamera;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, (spawn_debug_camera, spawn_debug_info_overlay))
            .add_systems(
                Update,
                (
                    toggle_inspector,
                    fly_debug_camera.run_if(|state: Res<DebugState>| state.inspector_open),
                    update_debug_info_overlay,
                )
                    .chain()
                    .in_set(FrameSet::Presentation),
            );
    }
}
