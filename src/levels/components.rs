//! Levels domain: entity components and markers for level scenes.

use bevy::gltf::Gltf;
use bevy::prelude::*;

/// A level scene spawned hidden while its assets load.
#[derive(Component, Debug)]
pub struct StagedLevel {
    pub index: usize,
    /// Kept for the named animation clips
    pub gltf: Handle<Gltf>,
}

/// Marker: the staged scene instance is spawned and ready to be scanned
#[derive(Component, Debug)]
pub struct StagedReady;

/// Marker for the root of the attached level
#[derive(Component, Debug)]
pub struct LevelRoot {
    pub index: usize,
}
