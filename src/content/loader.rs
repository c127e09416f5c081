//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::LevelCatalog;

pub const LEVELS_FILE: &str = "levels.ron";
pub const TUNING_FILE: &str = "tuning.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(contents: &str, file_name: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text containing a single struct (not wrapped in DataFile).
pub fn parse_single<T>(contents: &str, file_name: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the level catalog and tuning from `base_path` (assets/data).
/// Every file is attempted; all failures are returned together.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(LevelCatalog, GameTuning), Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let levels_path = base_path.join(LEVELS_FILE);
    let levels = read_file(&levels_path).and_then(|contents| {
        parse_data_file::<LevelDef>(&contents, &levels_path.display().to_string())
    });

    let tuning_path = base_path.join(TUNING_FILE);
    let tuning = read_file(&tuning_path).and_then(|contents| {
        parse_single::<GameTuning>(&contents, &tuning_path.display().to_string())
    });

    let levels = levels.map_err(|e| errors.push(e)).ok();
    let tuning = tuning.map_err(|e| errors.push(e)).ok();

    match (levels, tuning) {
        (Some(levels), Some(tuning)) => Ok((LevelCatalog::new(levels), tuning)),
        _ => Err(errors),
    }
}
