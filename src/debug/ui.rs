//! Debug domain: info overlay shown while the inspector is open.

use bevy::prelude::*;

use crate::core::{GameState, LevelProgress, ShadowRegistry};
use crate::debug::state::DebugState;
use crate::input::PlayerAxes;
use crate::levels::{Arena, LevelLoader};
use crate::player::Player;

/// Marker for the debug info overlay
#[derive(Component)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(mut commands: Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.6, 1.0, 0.6)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(16.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        Visibility::Hidden,
    ));
}

pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    state: Res<State<GameState>>,
    progress: Res<LevelProgress>,
    arena: Res<Arena>,
    loader: Res<LevelLoader>,
    shadows: Res<ShadowRegistry>,
    axes: Res<PlayerAxes>,
    players: Query<(&Player, &Transform)>,
    mut overlay: Query<(&mut Text, &mut Visibility), With<DebugInfoOverlay>>,
) {
    for (mut text, mut visibility) in &mut overlay {
        if !debug_state.inspector_open {
            *visibility = Visibility::Hidden;
            continue;
        }
        *visibility = Visibility::Inherited;

        let mut lines = vec![
            format!("State: {:?}", state.get()),
            format!(
                "Level: {} of {} (pending {:?}, in flight {:?})",
                progress.current + 1,
                progress.level_count,
                progress.requested(),
                loader.in_flight()
            ),
            format!(
                "Arena: {} | goal: {} | triggers: {}/{} fired | casters: {}",
                arena.layout().map_or("-", |l| l.name.as_str()),
                arena.goal().is_some(),
                arena.door_triggers().iter().filter(|t| t.triggered).count(),
                arena.door_triggers().len(),
                shadows.caster_count()
            ),
            format!(
                "Input: {}",
                if axes.gamepad_connected() { "gamepad (P1)" } else { "keyboard" }
            ),
        ];
        for (player, transform) in &players {
            lines.push(format!(
                "P{} {:?} at ({:.1}, {:.1}, {:.1})",
                player.index,
                player.phase,
                transform.translation.x,
                transform.translation.y,
                transform.translation.z
            ));
        }

        **text = lines.join("\n");
    }
}
