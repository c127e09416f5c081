//! Input domain: smoothed per-player movement axes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Player slots 1..=4 have an axis; only the first two have keyboard bindings.
pub const MAX_PLAYERS: usize = 4;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputTuning {
    /// Axis units per second a keyboard axis moves toward its target
    pub axis_rate: f32,
    /// Flip the gamepad stick's vertical axis
    pub invert_stick_y: bool,
}

impl Default for InputTuning {
    fn default() -> Self {
        Self {
            axis_rate: 10.0,
            invert_stick_y: false,
        }
    }
}

/// Step `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + diff.signum() * max_delta
    }
}

/// Target value of one keyboard axis. The negative key wins when both are held.
pub fn key_target(negative_held: bool, positive_held: bool) -> f32 {
    if negative_held {
        -1.0
    } else if positive_held {
        1.0
    } else {
        0.0
    }
}

/// Stick reading as a movement axis, rounded to 3 decimals.
pub fn stick_axis(raw: Vec2, invert_y: bool) -> Vec2 {
    let y = if invert_y { -raw.y } else { raw.y };
    Vec2::new(round3(raw.x), round3(y))
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Current axis of every player slot, each component in [-1, 1].
#[derive(Resource, Debug, Default)]
pub struct PlayerAxes {
    axes: [Vec2; MAX_PLAYERS],
    gamepad_connected: bool,
}

impl PlayerAxes {
    fn slot(player: usize) -> Option<usize> {
        (1..=MAX_PLAYERS).contains(&player).then(|| player - 1)
    }

    /// Axis of 1-based `player`; unknown slots read as zero.
    pub fn axis(&self, player: usize) -> Vec2 {
        Self::slot(player).map_or(Vec2::ZERO, |slot| self.axes[slot])
    }

    /// Move the axis toward `target` at `rate` units per second.
    pub fn smooth_towards(&mut self, player: usize, target: Vec2, rate: f32, delta_seconds: f32) {
        let Some(slot) = Self::slot(player) else {
            return;
        };
        let step = rate * delta_seconds;
        let axis = &mut self.axes[slot];
        axis.x = move_towards(axis.x, target.x, step);
        axis.y = move_towards(axis.y, target.y, step);
    }

    /// Write an axis directly (gamepad path).
    pub fn set(&mut self, player: usize, value: Vec2) {
        if let Some(slot) = Self::slot(player) {
            self.axes[slot] = value.clamp(Vec2::NEG_ONE, Vec2::ONE);
        }
    }

    pub fn gamepad_connected(&self) -> bool {
        self.gamepad_connected
    }

    /// Records gamepad presence; returns true when it changed.
    pub fn set_gamepad_connected(&mut self, connected: bool) -> bool {
        let changed = self.gamepad_connected != connected;
        self.gamepad_connected = connected;
        changed
    }
}
