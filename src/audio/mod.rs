//! Audio domain: looping background music per game phase.

mod music;
mod systems;


pub use music::{
    MusicChange, MusicConfig, MusicDeck, MusicEntry, MusicTrack, PlayMusic, SoundBank,
};

use bevy::prelude::*;

use crate::audio::systems::{handle_play_music, load_sound_bank, play_boot_music};
use crate::core::FrameSet;

pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MusicConfig>()
            .init_resource::<SoundBank>()
            .init_resource::<MusicDeck>()
            .add_message::<PlayMusic>()
            .add_systems(Startup, (load_sound_bank, play_boot_music).chain())
            .add_systems(Update, handle_play_music.in_set(FrameSet::Presentation));
    }
}
