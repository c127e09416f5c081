//! UI domain: HUD with fps counter, level title and loading banner.

mod hud_fps;
mod hud_level;
mod loading;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::ui::hud_fps::{spawn_fps_counter, update_fps_counter};
use crate::ui::hud_level::{spawn_level_hud, update_bonus, update_level_status, update_level_title};
use crate::ui::loading::{spawn_loading_banner, update_loading_banner};

pub const HUD_PADDING: f32 = 16.0;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_fps_counter, spawn_level_hud, spawn_loading_banner),
        )
        .add_systems(
            Update,
            (
                update_fps_counter,
                update_level_title,
                update_bonus,
                update_level_status,
                update_loading_banner,
            )
                .in_set(FrameSet::Presentation),
        );
    }
}
