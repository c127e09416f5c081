mod audio;
mod camera;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod input;
mod levels;
mod player;
mod ui;

use avian3d::prelude::*;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Arena Golf".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins(FrameTimeDiagnosticsPlugin::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        input::InputPlugin,
        levels::LevelsPlugin,
        player::PlayerPlugin,
        camera::CameraPlugin,
        audio::MusicPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
