//! Audio domain: music tracks, their configuration and the deck tracking what plays.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MusicTrack {
    Menu,
    Game,
    GameOver,
}

/// One configured music file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MusicEntry {
    pub track: MusicTrack,
    /// Path relative to assets/
    pub path: String,
    /// Linear volume, 0..=1
    pub volume: f32,
}

/// Request to switch the looping background music
#[derive(Debug, Clone, Copy)]
pub struct PlayMusic(pub MusicTrack);

impl Message for PlayMusic {}

/// Music files from tuning.ron, by track.
#[derive(Resource, Debug, Default, Clone)]
pub struct MusicConfig {
    entries: HashMap<MusicTrack, MusicEntry>,
}

impl MusicConfig {
    pub fn new(entries: Vec<MusicEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.track, e)).collect(),
        }
    }

    pub fn entry(&self, track: MusicTrack) -> Option<&MusicEntry> {
        self.entries.get(&track)
    }

    pub fn entries(&self) -> impl Iterator<Item = &MusicEntry> {
        self.entries.values()
    }
}

/// Loaded audio handles with their volume.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    tracks: HashMap<MusicTrack, (Handle<AudioSource>, f32)>,
}

impl SoundBank {
    pub fn insert(&mut self, track: MusicTrack, handle: Handle<AudioSource>, volume: f32) {
        self.tracks.insert(track, (handle, volume));
    }

    pub fn get(&self, track: MusicTrack) -> Option<&(Handle<AudioSource>, f32)> {
        self.tracks.get(&track)
    }

    pub fn contains(&self, track: MusicTrack) -> bool {
        self.tracks.contains_key(&track)
    }
}

/// What a switch stops and starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicChange {
    pub stop: Option<MusicTrack>,
    pub start: Option<MusicTrack>,
}

/// The track currently playing, if any.
#[derive(Resource, Debug, Default)]
pub struct MusicDeck {
    current: Option<MusicTrack>,
}

impl MusicDeck {
    pub fn current(&self) -> Option<MusicTrack> {
        self.current
    }

    /// Stop whatever plays and start `track` if it has a loaded file.
    /// Without a file the deck falls silent.
    pub fn switch_to(&mut self, track: MusicTrack, available: bool) -> MusicChange {
        let stop = self.current.take();
        if available {
            self.current = Some(track);
        }
        MusicChange {
            stop,
            start: self.current,
        }
    }
}
