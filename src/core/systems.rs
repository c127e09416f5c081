//! Core domain: frame clock, flow driver and scene setup systems.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{MusicTrack, PlayMusic};
use crate::content::LevelCatalog;
use crate::core::flow::{FlowContext, dispatch};
use crate::core::resources::{FrameClock, LevelProgress, ShadowRegistry};
use crate::core::state::GameState;
use crate::input::{Action, FrameActions};
use crate::levels::LevelLoader;

pub(crate) fn tick_frame_clock(time: Res<Time>, mut clock: ResMut<FrameClock>) {
    clock.tick(time.delta());
}

/// Dispatch once on the current state and apply the resulting step.
pub(crate) fn drive_game_flow(
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    actions: Res<FrameActions>,
    catalog: Res<LevelCatalog>,
    mut progress: ResMut<LevelProgress>,
    mut loader: ResMut<LevelLoader>,
    mut music: MessageWriter<PlayMusic>,
) {
    let current = *state.get();

    // Outcomes are only consumed by the states that wait for them
    let outcome = if current.is_loading() {
        loader.take_outcome()
    } else {
        None
    };

    let ctx = FlowContext {
        outcome,
        skip_requested: actions.contains(Action::SkipLevel),
        current_bonus: catalog.get(progress.current).map_or(0, |level| level.bonus),
    };

    let step = dispatch(current, &mut progress, ctx);

    if ctx.skip_requested {
        info!("[FLOW] Skip level requested in {:?}", current);
    }

    if let Some(index) = step.request {
        loader.request(index);
    }

    if step.play_game_music {
        music.write(PlayMusic(MusicTrack::Game));
    }

    if let Some(next) = step.next {
        info!("[FLOW] {:?} -> {:?}", current, next);
        next_state.set(next);
    }
}

/// Spawn the shadow-casting sun and register it as a shadow generator.
pub(crate) fn setup_environment(mut commands: Commands, mut shadows: ResMut<ShadowRegistry>) {
    let sun = commands
        .spawn((
            Name::new("Sun"),
            DirectionalLight {
                shadows_enabled: true,
                ..default()
            },
            Transform::from_xyz(-20.0, 50.0, -40.0).looking_to(Vec3::new(0.2, -1.0, 0.4), Vec3::Y),
        ))
        .id();

    shadows.add_generator(sun);
}
