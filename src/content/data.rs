//! Data definitions for the RON configuration files.
//!
//! These structs mirror assets/data/*.ron. Tuning blocks owned by a gameplay
//! domain (input, camera, ball, music) are defined next to the code that uses
//! them and only composed here.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audio::{MusicEntry, MusicTrack};
use crate::camera::FollowTuning;
use crate::input::InputTuning;
use crate::player::BallTuning;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// One playable level: display name, glTF model path (relative to assets/) and
/// the bonus awarded for exiting it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LevelDef {
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub bonus: u32,
}

pub fn default_levels() -> Vec<LevelDef> {
    vec![
        LevelDef {
            name: "Niveau 1".to_string(),
            model: "models/arena_level1.glb".to_string(),
            bonus: 1,
        },
        LevelDef {
            name: "Niveau 2".to_string(),
            model: "models/arena_level2.glb".to_string(),
            bonus: 1,
        },
    ]
}

// ============================================================================
// Tuning (tuning.ron)
// ============================================================================

pub const MIN_PLAYERS: usize = 1;
pub const MAX_LOCAL_PLAYERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldTuning {
    pub gravity: (f32, f32, f32),
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            gravity: (0.0, -9.81, 0.0),
        }
    }
}

impl WorldTuning {
    pub fn gravity(&self) -> Vec3 {
        Vec3::new(self.gravity.0, self.gravity.1, self.gravity.2)
    }
}

/// Number of local players spawned at startup
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCount(pub usize);

impl Default for PlayerCount {
    fn default() -> Self {
        Self(MIN_PLAYERS)
    }
}

/// Everything in tuning.ron. Missing blocks fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameTuning {
    pub input: InputTuning,
    pub camera: FollowTuning,
    pub ball: BallTuning,
    pub world: WorldTuning,
    pub players: usize,
    pub music: Vec<MusicEntry>,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            input: InputTuning::default(),
            camera: FollowTuning::default(),
            ball: BallTuning::default(),
            world: WorldTuning::default(),
            players: MIN_PLAYERS,
            music: vec![MusicEntry {
                track: MusicTrack::Game,
                path: "sounds/music.mp3".to_string(),
                volume: 0.05,
            }],
        }
    }
}
