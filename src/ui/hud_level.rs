//! UI domain: current level title, bonus total and the last level event.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{DoorOpened, LevelAttached, LevelLoadFailed, LevelProgress};
use crate::ui::HUD_PADDING;

/// Marker for the level title text
#[derive(Component)]
pub struct LevelTitleText;

/// Marker for the bonus text
#[derive(Component)]
pub struct BonusText;

/// Marker for the status line
#[derive(Component)]
pub struct LevelStatusText;

pub(crate) fn spawn_level_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                LevelTitleText,
                Text::new(""),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                BonusText,
                Text::new("Bonus 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
            parent.spawn((
                LevelStatusText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
            ));
        });
}

pub(crate) fn update_level_title(
    mut attached: MessageReader<LevelAttached>,
    mut query: Query<&mut Text, With<LevelTitleText>>,
) {
    let Some(latest) = attached.read().last() else {
        return;
    };
    for mut text in &mut query {
        **text = latest.name.clone();
    }
}

pub(crate) fn update_bonus(
    progress: Res<LevelProgress>,
    mut query: Query<&mut Text, With<BonusText>>,
) {
    if progress.is_changed() {
        for mut text in &mut query {
            **text = format!(
                "Bonus {}  ({} cleared)",
                progress.bonus_earned, progress.levels_completed
            );
        }
    }
}

pub(crate) fn update_level_status(
    mut failed: MessageReader<LevelLoadFailed>,
    mut opened: MessageReader<DoorOpened>,
    mut query: Query<&mut Text, With<LevelStatusText>>,
) {
    let status = failed
        .read()
        .map(|f| format!("Level {} failed to load", f.index + 1))
        .chain(opened.read().map(|d| format!("{} opened", d.door)))
        .last();

    let Some(status) = status else {
        return;
    };
    for mut text in &mut query {
        **text = status.clone();
    }
}
