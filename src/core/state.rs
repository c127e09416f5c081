//! Core domain: the global game state driving per-frame dispatch.

use bevy::prelude::*;

/// Top-level game state. Several values (intro, pause, lose, game over) are
/// placeholders for flows that have no behaviour yet.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    None,
    Init,
    Loading,
    PreIntro,
    Menu,
    StartIntro,
    Intro,
    StartGame,
    NewLevel,
    LevelReady,
    Running,
    Pause,
    Exited,
    Loose,
    GameOver,
    End,
}

impl GameState {
    /// States during which a level load is outstanding and a loading banner is shown.
    pub fn is_loading(self) -> bool {
        matches!(self, GameState::Init | GameState::Loading | GameState::NewLevel)
    }

    /// States before StartGame, where the game music has not been started yet.
    pub fn precedes_game(self) -> bool {
        matches!(
            self,
            GameState::None
                | GameState::Init
                | GameState::Loading
                | GameState::PreIntro
                | GameState::Menu
                | GameState::StartIntro
                | GameState::Intro
        )
    }
}
