//! Player domain: ball tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BallTuning {
    pub radius: f32,
    /// Horizontal acceleration at full stick, units/s²
    pub acceleration: f32,
    /// Horizontal speed cap
    pub max_speed: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// Balls below this height are put back on their spawn point
    pub fall_limit_y: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            radius: 0.5,
            acceleration: 30.0,
            max_speed: 20.0,
            linear_damping: 0.3,
            angular_damping: 0.5,
            fall_limit_y: -50.0,
        }
    }
}
