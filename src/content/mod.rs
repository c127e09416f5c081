//! Content domain: level catalog and tuning loaded from assets/data at startup.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    GameTuning, LevelDef, MAX_LOCAL_PLAYERS, MIN_PLAYERS, PlayerCount, WorldTuning,
    default_levels,
};
pub use loader::{ContentLoadError, load_all_content};
pub use registry::LevelCatalog;
pub use validation::{ValidationError, validate_levels, validate_tuning};

use avian3d::prelude::Gravity;
use bevy::prelude::*;
use std::path::Path;

use crate::core::LevelProgress;

pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let (catalog, tuning) = load_content(Path::new(DATA_DIR));
        info!("[CONTENT] {}", catalog.summary());

        app.insert_resource(LevelProgress::new(catalog.len()))
            .insert_resource(Gravity(tuning.world.gravity()))
            .insert_resource(tuning.input)
            .insert_resource(tuning.camera)
            .insert_resource(tuning.ball)
            .insert_resource(PlayerCount(tuning.players))
            .insert_resource(crate::audio::MusicConfig::new(tuning.music))
            .insert_resource(catalog);
    }
}

/// Load and validate content, falling back to built-in defaults for anything unusable.
pub fn load_content(base_path: &Path) -> (LevelCatalog, GameTuning) {
    let (catalog, tuning) = match load_all_content(base_path) {
        Ok(content) => content,
        Err(errors) => {
            for e in &errors {
                error!("[CONTENT] {}", e);
            }
            warn!("[CONTENT] Using built-in defaults");
            return (LevelCatalog::default(), GameTuning::default());
        }
    };

    let level_errors = validate_levels(&catalog);
    for e in &level_errors {
        error!("[CONTENT] {}", e);
    }
    let catalog = if level_errors.is_empty() {
        catalog
    } else {
        warn!("[CONTENT] Level catalog invalid, using built-in levels");
        LevelCatalog::default()
    };

    let tuning_errors = validate_tuning(&tuning);
    for e in &tuning_errors {
        error!("[CONTENT] {}", e);
    }
    let tuning = if tuning_errors.is_empty() {
        tuning
    } else {
        warn!("[CONTENT] Tuning invalid, using built-in defaults");
        GameTuning::default()
    };

    (catalog, tuning)
}
