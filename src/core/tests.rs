//! Core domain: tests for flow dispatch, level progress and the shadow registry.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::{Entity, NextState, State, World};
use std::time::Duration;

use super::systems::drive_game_flow;
use super::{FlowContext, FrameClock, GameState, LevelProgress, ShadowRegistry, dispatch};
use crate::audio::PlayMusic;
use crate::content::LevelCatalog;
use crate::input::{Action, FrameActions};
use crate::levels::{LevelLoader, LoadOutcome};

fn ctx(outcome: Option<LoadOutcome>) -> FlowContext {
    FlowContext {
        outcome,
        ..FlowContext::default()
    }
}

fn entities(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

// -----------------------------------------------------------------------------
// FrameClock tests
// -----------------------------------------------------------------------------

#[test]
fn test_frame_clock_tick_overwrites_delta() {
    let mut clock = FrameClock::default();
    clock.tick(Duration::from_millis(16));
    clock.tick(Duration::from_millis(50));
    assert!((clock.delta_seconds - 0.05).abs() < 1e-6);
}

// -----------------------------------------------------------------------------
// LevelProgress tests
// -----------------------------------------------------------------------------

#[test]
fn test_next_index_wraps() {
    let mut progress = LevelProgress::new(2);
    assert_eq!(progress.next_index(), 1);
    progress.commit(1);
    assert_eq!(progress.next_index(), 0);
}

#[test]
fn test_next_index_with_empty_catalog() {
    let progress = LevelProgress::new(0);
    assert_eq!(progress.next_index(), 0);
}

#[test]
fn test_next_index_follows_pending_request() {
    let mut progress = LevelProgress::new(3);
    assert_eq!(progress.request_next(), 1);
    assert_eq!(progress.request_next(), 2);
    assert_eq!(progress.current, 0);

    progress.abandon();
    assert_eq!(progress.next_index(), 1);
}

#[test]
fn test_record_exit_accumulates_bonus() {
    let mut progress = LevelProgress::new(2);
    progress.record_exit(1);
    progress.record_exit(3);
    assert_eq!(progress.levels_completed, 2);
    assert_eq!(progress.bonus_earned, 4);
}

// -----------------------------------------------------------------------------
// Dispatch table tests
// -----------------------------------------------------------------------------

#[test]
fn test_boot_sequence() {
    let mut progress = LevelProgress::new(2);

    let step = dispatch(GameState::None, &mut progress, ctx(None));
    assert_eq!(step.next, Some(GameState::Init));
    assert_eq!(step.request, None);

    let step = dispatch(GameState::Init, &mut progress, ctx(None));
    assert_eq!(step.next, Some(GameState::Loading));
    assert_eq!(step.request, Some(0));
}

#[test]
fn test_loading_waits_for_outcome() {
    let mut progress = LevelProgress::new(2);
    let step = dispatch(GameState::Loading, &mut progress, ctx(None));
    assert_eq!(step.next, None);
}

#[test]
fn test_initial_load_success_goes_to_menu() {
    let mut progress = LevelProgress::new(2);
    progress.request(0);
    let step = dispatch(
        GameState::Loading,
        &mut progress,
        ctx(Some(LoadOutcome::Loaded(0))),
    );
    assert_eq!(step.next, Some(GameState::Menu));
    assert_eq!(progress.current, 0);
}

#[test]
fn test_initial_load_failure_ends_game() {
    let mut progress = LevelProgress::new(2);
    progress.request(0);
    let step = dispatch(
        GameState::Loading,
        &mut progress,
        ctx(Some(LoadOutcome::Failed(0))),
    );
    assert_eq!(step.next, Some(GameState::End));
    assert_eq!(progress.requested(), None);
}

#[test]
fn test_menu_starts_game_with_music() {
    let mut progress = LevelProgress::new(2);
    let step = dispatch(GameState::Menu, &mut progress, ctx(None));
    assert_eq!(step.next, Some(GameState::StartGame));
    assert!(!step.play_game_music);

    let step = dispatch(GameState::StartGame, &mut progress, ctx(None));
    assert_eq!(step.next, Some(GameState::LevelReady));
    assert!(step.play_game_music);

    let step = dispatch(GameState::LevelReady, &mut progress, ctx(None));
    assert_eq!(step.next, Some(GameState::Running));
}

#[test]
fn test_placeholder_states_do_nothing() {
    let mut progress = LevelProgress::new(2);
    for state in [
        GameState::Running,
        GameState::PreIntro,
        GameState::StartIntro,
        GameState::Intro,
        GameState::Pause,
        GameState::Loose,
        GameState::GameOver,
        GameState::End,
    ] {
        let step = dispatch(state, &mut progress, ctx(None));
        assert_eq!(step.next, None, "{:?} should not transition", state);
        assert_eq!(step.request, None);
    }
}

#[test]
fn test_exit_cycle_advances_index_by_one() {
    let mut progress = LevelProgress::new(2);
    let mut loader = LevelLoader::default();

    for expected in [1, 0, 1] {
        let step = dispatch(GameState::Exited, &mut progress, ctx(None));
        assert_eq!(step.next, Some(GameState::NewLevel));
        let index = step.request.expect("exit requests a level");
        assert_eq!(index, expected);

        loader.request(index);
        assert_eq!(loader.take_spawn_request(), Some(index));
        loader.finish(index, true);

        // Nothing is committed until the load finishes
        assert_ne!(progress.current, expected);

        let step = dispatch(
            GameState::NewLevel,
            &mut progress,
            ctx(loader.take_outcome()),
        );
        assert_eq!(step.next, Some(GameState::LevelReady));
        assert_eq!(progress.current, expected);

        let step = dispatch(GameState::LevelReady, &mut progress, ctx(None));
        assert_eq!(step.next, Some(GameState::Running));
    }

    assert_eq!(progress.levels_completed, 3);
}

#[test]
fn test_failed_new_level_keeps_current_index() {
    let mut progress = LevelProgress::new(2);
    dispatch(GameState::Exited, &mut progress, ctx(None));

    let step = dispatch(
        GameState::NewLevel,
        &mut progress,
        ctx(Some(LoadOutcome::Failed(1))),
    );
    assert_eq!(step.next, Some(GameState::LevelReady));
    assert_eq!(progress.current, 0);
    assert_eq!(progress.next_index(), 1);
}

#[test]
fn test_exit_records_bonus() {
    let mut progress = LevelProgress::new(2);
    let context = FlowContext {
        current_bonus: 1,
        ..FlowContext::default()
    };
    dispatch(GameState::Exited, &mut progress, context);
    assert_eq!(progress.bonus_earned, 1);
}

#[test]
fn test_skip_overrides_running() {
    let mut progress = LevelProgress::new(2);
    let context = FlowContext {
        skip_requested: true,
        ..FlowContext::default()
    };
    let step = dispatch(GameState::Running, &mut progress, context);
    assert_eq!(step.next, Some(GameState::NewLevel));
    assert_eq!(step.request, Some(1));
    assert!(!step.play_game_music);
}

#[test]
fn test_skip_before_game_still_starts_music() {
    let context = FlowContext {
        skip_requested: true,
        ..FlowContext::default()
    };
    for state in [GameState::Loading, GameState::Menu] {
        let mut progress = LevelProgress::new(2);
        let step = dispatch(state, &mut progress, context);
        assert_eq!(step.next, Some(GameState::NewLevel), "{:?}", state);
        assert_eq!(step.request, Some(1), "{:?}", state);
        assert!(step.play_game_music, "{:?}", state);
    }
}

#[test]
fn test_skip_during_exit_requests_once() {
    let mut progress = LevelProgress::new(3);
    let context = FlowContext {
        skip_requested: true,
        ..FlowContext::default()
    };
    let step = dispatch(GameState::Exited, &mut progress, context);
    assert_eq!(step.request, Some(1));
    assert_eq!(progress.requested(), Some(1));
}

#[test]
fn test_repeated_skip_moves_past_pending_level() {
    let mut progress = LevelProgress::new(3);
    let context = FlowContext {
        skip_requested: true,
        ..FlowContext::default()
    };
    let first = dispatch(GameState::Running, &mut progress, context);
    let second = dispatch(GameState::NewLevel, &mut progress, context);
    assert_eq!(first.request, Some(1));
    assert_eq!(second.request, Some(2));
    assert_eq!(second.next, Some(GameState::NewLevel));
}

// -----------------------------------------------------------------------------
// GameState tests
// -----------------------------------------------------------------------------

#[test]
fn test_loading_states() {
    assert!(GameState::Init.is_loading());
    assert!(GameState::Loading.is_loading());
    assert!(GameState::NewLevel.is_loading());
    assert!(!GameState::Running.is_loading());
    assert!(!GameState::Menu.is_loading());
    assert_eq!(GameState::default(), GameState::None);
}

// -----------------------------------------------------------------------------
// ShadowRegistry tests
// -----------------------------------------------------------------------------

#[test]
fn test_caster_fans_out_to_every_generator() {
    let ids = entities(3);
    let mut registry = ShadowRegistry::default();
    registry.add_generator(ids[0]);
    registry.add_generator(ids[1]);
    registry.add_generator(ids[1]);
    assert_eq!(registry.generators().len(), 2);

    registry.add_shadow_caster(ids[2]);
    for generator in registry.generators() {
        assert!(generator.casters().contains(&ids[2]));
    }
    assert_eq!(registry.caster_count(), 1);

    registry.remove_shadow_caster(ids[2]);
    assert!(!registry.is_caster(ids[2]));
    assert_eq!(registry.caster_count(), 0);
}

#[test]
fn test_caster_without_generator_is_not_tracked() {
    let ids = entities(1);
    let mut registry = ShadowRegistry::default();
    registry.add_shadow_caster(ids[0]);
    assert!(!registry.is_caster(ids[0]));
}

// -----------------------------------------------------------------------------
// Flow system tests
// -----------------------------------------------------------------------------

fn flow_world(state: GameState) -> World {
    let mut world = World::new();
    world.insert_resource(State::new(state));
    world.init_resource::<NextState<GameState>>();
    world.init_resource::<FrameActions>();
    world.insert_resource(LevelCatalog::default());
    world.insert_resource(LevelProgress::new(2));
    world.init_resource::<LevelLoader>();
    world.init_resource::<Messages<PlayMusic>>();
    world
}

fn finished_loader(index: usize) -> LevelLoader {
    let mut loader = LevelLoader::default();
    loader.request(index);
    loader.take_spawn_request();
    loader.finish(index, true);
    loader
}

#[test]
fn test_flow_system_leaves_outcome_outside_loading_states() {
    let mut world = flow_world(GameState::Running);
    world.insert_resource(finished_loader(0));

    world.run_system_once(drive_game_flow).expect("flow system runs");

    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Unchanged
    ));
    let mut loader = world.resource_mut::<LevelLoader>();
    assert_eq!(loader.take_outcome(), Some(LoadOutcome::Loaded(0)));
}

#[test]
fn test_flow_system_consumes_outcome_while_loading() {
    let mut world = flow_world(GameState::Loading);
    world.insert_resource(finished_loader(0));

    world.run_system_once(drive_game_flow).expect("flow system runs");

    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Pending(GameState::Menu)
    ));
    assert_eq!(world.resource_mut::<LevelLoader>().take_outcome(), None);
    assert_eq!(world.resource::<LevelProgress>().current, 0);
}

#[test]
fn test_flow_system_skip_while_loading_queues_next_level_and_music() {
    let mut world = flow_world(GameState::Loading);
    let mut loader = LevelLoader::default();
    loader.request(0);
    world.insert_resource(loader);
    world.resource_mut::<FrameActions>().record(Action::SkipLevel);

    world.run_system_once(drive_game_flow).expect("flow system runs");

    assert!(matches!(
        *world.resource::<NextState<GameState>>(),
        NextState::Pending(GameState::NewLevel)
    ));
    assert_eq!(world.resource::<LevelLoader>().queued(), Some(1));
    assert_eq!(world.resource::<Messages<PlayMusic>>().len(), 1);
}
