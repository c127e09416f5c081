//! Audio domain: loading music and switching the playing track.

use bevy::audio::Volume;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::music::{MusicConfig, MusicDeck, MusicTrack, PlayMusic, SoundBank};

/// Marker for the entity playing the background music
#[derive(Component, Debug)]
pub struct MusicPlayer {
    pub track: MusicTrack,
}

pub(crate) fn load_sound_bank(
    asset_server: Res<AssetServer>,
    config: Res<MusicConfig>,
    mut bank: ResMut<SoundBank>,
) {
    for entry in config.entries() {
        bank.insert(entry.track, asset_server.load(entry.path.clone()), entry.volume);
        debug!("[AUDIO] Loading {:?} music from {}", entry.track, entry.path);
    }
}

pub(crate) fn play_boot_music(mut music: MessageWriter<PlayMusic>) {
    music.write(PlayMusic(MusicTrack::Menu));
}

pub(crate) fn handle_play_music(
    mut commands: Commands,
    mut requests: MessageReader<PlayMusic>,
    bank: Res<SoundBank>,
    mut deck: ResMut<MusicDeck>,
    playing: Query<Entity, With<MusicPlayer>>,
) {
    for PlayMusic(track) in requests.read().copied() {
        let change = deck.switch_to(track, bank.contains(track));

        if change.stop.is_some() {
            for entity in &playing {
                commands.entity(entity).despawn();
            }
        }

        let Some((handle, volume)) = change.start.and_then(|t| bank.get(t)) else {
            debug!("[AUDIO] No music for {:?}, not playing", track);
            continue;
        };

        commands.spawn((
            Name::new(format!("Music {:?}", track)),
            MusicPlayer { track },
            AudioPlayer::new(handle.clone()),
            PlaybackSettings::LOOP.with_volume(Volume::Linear(*volume)),
        ));
        info!("[AUDIO] Playing {:?} music", track);
    }
}
