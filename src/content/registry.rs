//! LevelCatalog resource: the ordered list of playable levels.

use bevy::prelude::*;

use super::data::{LevelDef, default_levels};

/// Ordered level catalog. Level indices used everywhere else index into it.
#[derive(Resource, Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<LevelDef>,
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::new(default_levels())
    }
}

impl LevelCatalog {
    pub fn new(levels: Vec<LevelDef>) -> Self {
        Self { levels }
    }

    pub fn get(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDef> {
        self.levels.iter()
    }

    /// Returns a summary of the catalog for logging.
    pub fn summary(&self) -> String {
        let names: Vec<&str> = self.levels.iter().map(|l| l.name.as_str()).collect();
        format!("LevelCatalog loaded: {} levels [{}]", self.levels.len(), names.join(", "))
    }
}
