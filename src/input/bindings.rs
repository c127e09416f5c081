//! Input domain: keyboard bindings.

use bevy::prelude::*;

use super::actions::Action;

/// Four keys driving one player's axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisKeys {
    pub left: KeyCode,
    pub right: KeyCode,
    pub down: KeyCode,
    pub up: KeyCode,
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    /// Axis keys per player, index 0 is player 1
    pub players: Vec<AxisKeys>,
    pub actions: Vec<(KeyCode, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            players: vec![
                AxisKeys {
                    left: KeyCode::KeyA,
                    right: KeyCode::KeyD,
                    down: KeyCode::KeyS,
                    up: KeyCode::KeyW,
                },
                AxisKeys {
                    left: KeyCode::KeyK,
                    right: KeyCode::Semicolon,
                    down: KeyCode::KeyL,
                    up: KeyCode::KeyO,
                },
            ],
            actions: vec![
                (KeyCode::KeyN, Action::SkipLevel),
                (KeyCode::KeyI, Action::ToggleInspector),
            ],
        }
    }
}
