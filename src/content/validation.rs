//! Validation for the level catalog and tuning values.

use std::collections::HashSet;

use super::data::*;
use super::registry::LevelCatalog;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for pushing an error when a condition does not hold
macro_rules! check {
    ($errors:expr, $cond:expr, $source_type:expr, $source_id:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate the level catalog.
/// Returns a list of validation errors, empty if the catalog is usable.
pub fn validate_levels(catalog: &LevelCatalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        !catalog.is_empty(),
        "LevelCatalog",
        "levels",
        "items",
        "at least one level is required"
    );

    let mut seen = HashSet::new();
    for (index, level) in catalog.iter().enumerate() {
        let id = format!("#{}", index);
        check!(errors, !level.name.trim().is_empty(), "Level", id, "name", "must not be empty");
        check!(
            errors,
            seen.insert(level.name.as_str()),
            "Level",
            id,
            "name",
            "duplicate level name '{}'",
            level.name
        );
        let model = level.model.to_ascii_lowercase();
        check!(
            errors,
            model.ends_with(".glb") || model.ends_with(".gltf"),
            "Level",
            id,
            "model",
            "'{}' is not a .glb/.gltf file",
            level.model
        );
    }

    errors
}

/// Validate tuning values.
pub fn validate_tuning(tuning: &GameTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        (MIN_PLAYERS..=MAX_LOCAL_PLAYERS).contains(&tuning.players),
        "GameTuning",
        "tuning",
        "players",
        "{} not in {}..={}",
        tuning.players,
        MIN_PLAYERS,
        MAX_LOCAL_PLAYERS
    );

    check!(
        errors,
        tuning.input.axis_rate > 0.0,
        "InputTuning",
        "input",
        "axis_rate",
        "must be positive, got {}",
        tuning.input.axis_rate
    );

    let ball = &tuning.ball;
    check!(
        errors,
        ball.radius > 0.0,
        "BallTuning",
        "ball",
        "radius",
        "must be positive, got {}",
        ball.radius
    );
    check!(
        errors,
        ball.max_speed > 0.0,
        "BallTuning",
        "ball",
        "max_speed",
        "must be positive, got {}",
        ball.max_speed
    );
    check!(
        errors,
        ball.acceleration >= 0.0,
        "BallTuning",
        "ball",
        "acceleration",
        "must not be negative, got {}",
        ball.acceleration
    );

    let camera = &tuning.camera;
    for (field, (low, high)) in [
        ("radius_limits", camera.radius_limits),
        ("height_limits", camera.height_limits),
        ("rotation_limits", camera.rotation_limits),
    ] {
        check!(
            errors,
            low <= high,
            "FollowTuning",
            "camera",
            field,
            "lower limit {} above upper limit {}",
            low,
            high
        );
    }
    check!(
        errors,
        camera.max_speed > 0.0,
        "FollowTuning",
        "camera",
        "max_speed",
        "must be positive, got {}",
        camera.max_speed
    );

    let mut tracks = HashSet::new();
    for entry in &tuning.music {
        let id = format!("{:?}", entry.track);
        check!(
            errors,
            tracks.insert(entry.track),
            "MusicEntry",
            id,
            "track",
            "configured more than once"
        );
        check!(
            errors,
            (0.0..=1.0).contains(&entry.volume),
            "MusicEntry",
            id,
            "volume",
            "{} not in 0..=1",
            entry.volume
        );
    }

    errors
}
