//! Content domain: tests for RON parsing, shipped data files and validation.

use std::path::Path;

use super::loader::{parse_data_file, parse_single};
use super::{
    DATA_DIR, GameTuning, LevelCatalog, LevelDef, load_all_content, load_content,
    validate_levels, validate_tuning,
};
use crate::audio::MusicTrack;

fn level(name: &str, model: &str) -> LevelDef {
    LevelDef {
        name: name.to_string(),
        model: model.to_string(),
        bonus: 1,
    }
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_levels_file() {
    let ron = r#"(
        schema_version: 1,
        items: [
            (name: "Niveau 1", model: "models/arena_level1.glb", bonus: 1),
            (name: "Niveau 2", model: "models/arena_level2.glb"),
        ],
    )"#;
    let levels: Vec<LevelDef> = parse_data_file(ron, "levels.ron").expect("valid levels");
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].bonus, 1);
    assert_eq!(levels[1].bonus, 0);
    assert_eq!(levels[1].model, "models/arena_level2.glb");
}

#[test]
fn test_parse_error_names_file() {
    let contents = "(schema_version: 1, items: [(name: 3)])";
    let result = parse_data_file::<LevelDef>(contents, "levels.ron");
    let err = result.expect_err("malformed level");
    assert_eq!(err.file, "levels.ron");
    assert!(err.to_string().starts_with("Failed to load levels.ron"));
}

#[test]
fn test_partial_tuning_uses_defaults() {
    let ron = r#"(
        players: 2,
        ball: (radius: 0.75),
    )"#;
    let tuning: GameTuning = parse_single(ron, "tuning.ron").expect("valid tuning");
    let defaults = GameTuning::default();
    assert_eq!(tuning.players, 2);
    assert_eq!(tuning.ball.radius, 0.75);
    assert_eq!(tuning.ball.max_speed, defaults.ball.max_speed);
    assert_eq!(tuning.input, defaults.input);
    assert_eq!(tuning.camera, defaults.camera);
}

#[test]
fn test_tuning_music_entries() {
    let ron = r#"(
        music: [
            (track: Game, path: "sounds/music.mp3", volume: 0.05),
            (track: Menu, path: "sounds/menu.ogg", volume: 0.2),
        ],
    )"#;
    let tuning: GameTuning = parse_single(ron, "tuning.ron").expect("valid tuning");
    assert_eq!(tuning.music.len(), 2);
    assert_eq!(tuning.music[1].track, MusicTrack::Menu);
}

#[test]
fn test_missing_directory_reports_every_file() {
    let errors = load_all_content(Path::new("does/not/exist")).expect_err("no files");
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_missing_directory_falls_back_to_defaults() {
    let (catalog, tuning) = load_content(Path::new("does/not/exist"));
    assert_eq!(catalog.len(), 2);
    assert_eq!(tuning, GameTuning::default());
}

#[test]
fn test_shipped_data_files_are_valid() {
    let (catalog, tuning) =
        load_all_content(Path::new(DATA_DIR)).expect("shipped data files parse");
    assert!(validate_levels(&catalog).is_empty());
    assert!(validate_tuning(&tuning).is_empty());
    assert_eq!(catalog.get(0).map(|l| l.name.as_str()), Some("Niveau 1"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_content_is_valid() {
    assert!(validate_levels(&LevelCatalog::default()).is_empty());
    assert!(validate_tuning(&GameTuning::default()).is_empty());
}

#[test]
fn test_empty_catalog_is_invalid() {
    let errors = validate_levels(&LevelCatalog::new(Vec::new()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "items");
}

#[test]
fn test_duplicate_and_bad_model_detected() {
    let catalog = LevelCatalog::new(vec![
        level("A", "models/a.glb"),
        level("A", "models/b.GLTF"),
        level("C", "models/c.obj"),
    ]);
    let errors = validate_levels(&catalog);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.field == "name" && e.source_id == "#1"));
    assert!(errors.iter().any(|e| e.field == "model" && e.source_id == "#2"));
}

#[test]
fn test_player_count_out_of_range() {
    let mut tuning = GameTuning::default();
    tuning.players = 0;
    assert_eq!(validate_tuning(&tuning).len(), 1);
    tuning.players = 3;
    assert_eq!(validate_tuning(&tuning).len(), 1);
}

#[test]
fn test_inverted_camera_limits_detected() {
    let mut tuning = GameTuning::default();
    tuning.camera.height_limits = (60.0, 40.0);
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "height_limits");
}

#[test]
fn test_duplicate_music_track_detected() {
    let mut tuning = GameTuning::default();
    let entry = tuning.music[0].clone();
    tuning.music.push(entry);
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "track");
}
