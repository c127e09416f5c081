//! Core domain: game state, frame clock, per-tick flow dispatch and scene setup.

mod events;
mod flow;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{DoorOpened, LevelAttached, LevelLoadFailed};
pub use flow::{FlowContext, FlowStep, dispatch};
pub use resources::{FrameClock, LevelProgress, ShadowRegistry};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{drive_game_flow, setup_environment, tick_frame_clock};

/// Ordered per-tick phases. Every game system belongs to exactly one of them.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum FrameSet {
    /// Refresh the frame clock.
    Clock,
    /// Sample devices into axes and one-shot actions.
    Input,
    /// Dispatch on the current game state.
    Flow,
    /// Arena and player updates.
    Gameplay,
    /// Camera, audio, HUD.
    Presentation,
    /// End-of-tick bookkeeping (clearing one-shot actions).
    Cleanup,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<FrameClock>()
            .init_resource::<LevelProgress>()
            .init_resource::<ShadowRegistry>()
            .insert_resource(ClearColor(Color::srgb(0.5, 0.5, 1.0)))
            .add_message::<LevelAttached>()
            .add_message::<LevelLoadFailed>()
            .add_message::<DoorOpened>()
            .configure_sets(
                Update,
                (
                    FrameSet::Clock,
                    FrameSet::Input,
                    FrameSet::Flow,
                    FrameSet::Gameplay,
                    FrameSet::Presentation,
                    FrameSet::Cleanup,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_environment)
            .add_systems(Update, tick_frame_clock.in_set(FrameSet::Clock))
            .add_systems(Update, drive_game_flow.in_set(FrameSet::Flow));
    }
}
