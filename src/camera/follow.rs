//! Camera domain: follow camera tuning and step function.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tuning values are per 60 Hz frame; steps scale them by elapsed time.
pub const REFERENCE_FPS: f32 = 60.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FollowTuning {
    /// Horizontal distance to the target. Negative values sit on the +Z side.
    pub radius: f32,
    pub radius_limits: (f32, f32),
    pub height_offset: f32,
    pub height_limits: (f32, f32),
    /// Degrees around the vertical axis
    pub rotation_offset: f32,
    pub rotation_limits: (f32, f32),
    /// Fraction of the remaining distance covered per frame
    pub acceleration: f32,
    /// Per-axis speed cap, units per frame
    pub max_speed: f32,
}

impl Default for FollowTuning {
    fn default() -> Self {
        Self {
            radius: -100.0,
            radius_limits: (-120.0, -80.0),
            height_offset: 50.0,
            height_limits: (40.0, 60.0),
            rotation_offset: 0.0,
            rotation_limits: (-180.0, 180.0),
            acceleration: 0.05,
            max_speed: 1.0,
        }
    }
}

fn clamp_to(value: f32, (low, high): (f32, f32)) -> f32 {
    value.max(low).min(high)
}

impl FollowTuning {
    /// Radius, height and rotation offsets clamped to their limits.
    pub fn clamped_offsets(&self) -> (f32, f32, f32) {
        (
            clamp_to(self.radius, self.radius_limits),
            clamp_to(self.height_offset, self.height_limits),
            clamp_to(self.rotation_offset, self.rotation_limits),
        )
    }

    /// Where the camera wants to be for a target at `target`.
    pub fn desired_position(&self, target: Vec3) -> Vec3 {
        let (radius, height, rotation) = self.clamped_offsets();
        let radians = rotation.to_radians();
        target + Vec3::new(radians.sin() * radius, height, -radians.cos() * radius)
    }
}

/// Next camera position. Horizontal axes close in twice as fast as the vertical one.
/// A long frame lands on the desired position, never past it.
pub fn follow_step(
    camera: Vec3,
    target: Vec3,
    tuning: &FollowTuning,
    delta_seconds: f32,
) -> Vec3 {
    let delta = tuning.desired_position(target) - camera;
    let accel = tuning.acceleration;
    let velocity = Vec3::new(delta.x * accel * 2.0, delta.y * accel, delta.z * accel * 2.0)
        .clamp(Vec3::splat(-tuning.max_speed), Vec3::splat(tuning.max_speed));
    let step = velocity * (delta_seconds * REFERENCE_FPS);
    camera + step.clamp(-delta.abs(), delta.abs())
}
