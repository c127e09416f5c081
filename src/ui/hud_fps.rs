//! UI domain: frames-per-second counter.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::ui::HUD_PADDING;

/// Marker for the fps text
#[derive(Component)]
pub struct FpsText;

pub(crate) fn spawn_fps_counter(mut commands: Commands) {
    commands.spawn((
        FpsText,
        Text::new("-- fps"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_fps_counter(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
    else {
        return;
    };

    for mut text in &mut query {
        **text = format!("{:.0} fps", fps);
    }
}
