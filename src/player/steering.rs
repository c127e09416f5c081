//! Player domain: camera-relative steering math.

use bevy::prelude::*;

/// Horizontal world direction for an input axis, relative to the camera's facing.
/// Axis x steers along the camera's right, axis y along its forward. Length is at most 1.
pub fn steering_intent(axis: Vec2, camera_forward: Vec3, camera_right: Vec3) -> Vec3 {
    let forward = Vec3::new(camera_forward.x, 0.0, camera_forward.z).normalize_or_zero();
    let right = Vec3::new(camera_right.x, 0.0, camera_right.z).normalize_or_zero();
    (right * axis.x + forward * axis.y).clamp_length_max(1.0)
}

/// Velocity after pushing along `intent` for `delta_seconds`. Only the horizontal
/// part is capped; gravity keeps full control of the vertical speed.
pub fn accelerate(
    velocity: Vec3,
    intent: Vec3,
    acceleration: f32,
    max_speed: f32,
    delta_seconds: f32,
) -> Vec3 {
    let pushed = velocity + intent * acceleration * delta_seconds;
    let horizontal = Vec3::new(pushed.x, 0.0, pushed.z);
    let capped = if horizontal.length() > max_speed && intent != Vec3::ZERO {
        // Never let input push past the cap, but keep speed gained from slopes
        horizontal.clamp_length_max(max_speed.max(Vec3::new(velocity.x, 0.0, velocity.z).length()))
    } else {
        horizontal
    };
    Vec3::new(capped.x, pushed.y, capped.z)
}
