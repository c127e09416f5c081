//! Debug domain: tests for inspector state and free-fly directions.

use bevy::prelude::Vec3;

use super::DebugState;
use super::state::{FlyKeys, fly_direction};

#[test]
fn test_toggle_flips_inspector() {
    let mut state = DebugState::default();
    assert!(!state.inspector_open);
    assert!(state.toggle());
    assert!(!state.toggle());
}

#[test]
fn test_fly_direction_forward_is_negative_z() {
    let keys = FlyKeys {
        forward: true,
        ..FlyKeys::default()
    };
    assert_eq!(fly_direction(keys), Vec3::NEG_Z);
}

#[test]
fn test_fly_direction_opposite_keys_cancel() {
    let keys = FlyKeys {
        left: true,
        right: true,
        up: true,
        ..FlyKeys::default()
    };
    assert_eq!(fly_direction(keys), Vec3::Y);
}

#[test]
fn test_fly_direction_is_normalized() {
    let keys = FlyKeys {
        forward: true,
        right: true,
        ..FlyKeys::default()
    };
    assert!((fly_direction(keys).length() - 1.0).abs() < 1e-5);
    assert_eq!(fly_direction(FlyKeys::default()), Vec3::ZERO);
}
