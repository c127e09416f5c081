//! Debug domain: inspector state and free-fly movement math.

use bevy::prelude::*;

/// Resource tracking the debug inspector
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Debug camera active and info overlay shown
    pub inspector_open: bool,
    /// Free-fly speed in units per second
    pub fly_speed: f32,
    /// Multiplier while shift is held
    pub boost: f32,
    /// Yaw speed in radians per second
    pub turn_speed: f32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            inspector_open: false,
            fly_speed: 20.0,
            boost: 4.0,
            turn_speed: 1.5,
        }
    }
}

impl DebugState {
    /// Flip the inspector, returning whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.inspector_open = !self.inspector_open;
        self.inspector_open
    }
}

/// Held free-fly keys for one frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Local-space move direction (camera looks down -Z), unit length or zero.
pub fn fly_direction(keys: FlyKeys) -> Vec3 {
    let axis = |negative: bool, positive: bool| (positive as i8 - negative as i8) as f32;
    Vec3::new(
        axis(keys.left, keys.right),
        axis(keys.down, keys.up),
        axis(keys.forward, keys.back),
    )
    .normalize_or_zero()
}
