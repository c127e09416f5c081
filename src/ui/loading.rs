//! UI domain: loading banner shown while a level loads.

use bevy::prelude::*;

use crate::core::GameState;

/// Marker for the loading overlay
#[derive(Component)]
pub struct LoadingBanner;

pub(crate) fn spawn_loading_banner(mut commands: Commands) {
    commands
        .spawn((
            LoadingBanner,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading..."),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub(crate) fn update_loading_banner(
    state: Res<State<GameState>>,
    mut query: Query<&mut Visibility, With<LoadingBanner>>,
) {
    if !state.is_changed() {
        return;
    }
    let shown = state.get().is_loading();
    for mut visibility in &mut query {
        *visibility = if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
