//! Input domain: one-shot actions pressed this tick.

use bevy::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SkipLevel,
    ToggleInspector,
}

/// Actions whose key or button went from released to pressed this tick.
/// Filled in the input phase, read by everyone, cleared once at the end of the tick.
#[derive(Resource, Debug, Default)]
pub struct FrameActions {
    pressed: HashSet<Action>,
}

impl FrameActions {
    pub fn record(&mut self, action: Action) {
        self.pressed.insert(action);
    }

    pub fn contains(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
