//! Core domain: per-tick game state dispatch.
//!
//! `dispatch` is the whole orchestrator rule table. It is a plain function over
//! the current state, the level progress and what happened this tick, so the
//! Bevy system that drives it only forwards inputs and applies the result.

use crate::core::resources::LevelProgress;
use crate::core::state::GameState;
use crate::levels::LoadOutcome;

/// What the orchestrator sees this tick besides the state itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlowContext {
    /// Outcome of the level load, only taken while a load is awaited
    pub outcome: Option<LoadOutcome>,
    pub skip_requested: bool,
    /// Bonus of the level currently attached
    pub current_bonus: u32,
}

/// Side effects decided by one dispatch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlowStep {
    pub next: Option<GameState>,
    pub request: Option<usize>,
    pub play_game_music: bool,
}

pub fn dispatch(state: GameState, progress: &mut LevelProgress, ctx: FlowContext) -> FlowStep {
    let mut step = FlowStep::default();

    match state {
        GameState::None => step.next = Some(GameState::Init),
        GameState::Init => {
            step.request = Some(progress.request(progress.current));
            step.next = Some(GameState::Loading);
        }
        GameState::Loading => match ctx.outcome {
            Some(LoadOutcome::Loaded(index)) => {
                progress.commit(index);
                step.next = Some(GameState::Menu);
            }
            Some(LoadOutcome::Failed(_)) => {
                progress.abandon();
                step.next = Some(GameState::End);
            }
            None => {}
        },
        GameState::Menu => step.next = Some(GameState::StartGame),
        GameState::StartGame => {
            step.play_game_music = true;
            step.next = Some(GameState::LevelReady);
        }
        GameState::LevelReady => step.next = Some(GameState::Running),
        GameState::Exited => {
            progress.record_exit(ctx.current_bonus);
            step.request = Some(progress.request_next());
            step.next = Some(GameState::NewLevel);
        }
        GameState::NewLevel => match ctx.outcome {
            Some(LoadOutcome::Loaded(index)) => {
                progress.commit(index);
                step.next = Some(GameState::LevelReady);
            }
            Some(LoadOutcome::Failed(_)) => {
                // Previous level is still attached; restart it
                progress.abandon();
                step.next = Some(GameState::LevelReady);
            }
            None => {}
        },
        GameState::Running
        | GameState::PreIntro
        | GameState::StartIntro
        | GameState::Intro
        | GameState::Pause
        | GameState::Loose
        | GameState::GameOver
        | GameState::End => {}
    }

    // An exit this tick already requested the next level
    if ctx.skip_requested && step.request.is_none() {
        step.request = Some(progress.request_next());
        step.next = Some(GameState::NewLevel);
        // Skipping past StartGame still starts the game music
        step.play_game_music |= state.precedes_game();
    }

    step
}
