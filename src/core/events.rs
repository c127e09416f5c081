//! Core domain: messages for level loading and arena changes.

use bevy::ecs::message::Message;

/// A staged level became the arena
#[derive(Debug)]
pub struct LevelAttached {
    pub index: usize,
    pub name: String,
}

impl Message for LevelAttached {}

/// A level could not be loaded; the previous level (if any) is still attached
#[derive(Debug)]
pub struct LevelLoadFailed {
    pub index: usize,
    pub reason: String,
}

impl Message for LevelLoadFailed {}

/// A door trigger fired for the first time
#[derive(Debug)]
pub struct DoorOpened {
    pub door: String,
    pub animated: bool,
}

impl Message for DoorOpened {}
