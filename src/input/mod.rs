//! Input domain: per-player movement axes and one-shot actions from keyboard and gamepad.

mod actions;
mod axis;
mod bindings;
mod systems;

#[cfg(test)]
mod tests;

pub use actions::{Action, FrameActions};
pub use axis::{InputTuning, MAX_PLAYERS, PlayerAxes};
pub use bindings::KeyBindings;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::input::systems::{clear_frame_actions, collect_actions, sample_axes};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerAxes>()
            .init_resource::<FrameActions>()
            .init_resource::<KeyBindings>()
            .init_resource::<InputTuning>()
            .add_systems(
                Update,
                (sample_axes, collect_actions).in_set(FrameSet::Input),
            )
            .add_systems(Update, clear_frame_actions.in_set(FrameSet::Cleanup));
    }
}
