//! Core domain: process-wide runtime resources (frame clock, level progress, shadows).

use bevy::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

/// Per-frame delta time in seconds, refreshed once at the start of every tick.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct FrameClock {
    pub delta_seconds: f32,
}

impl FrameClock {
    pub fn tick(&mut self, delta: Duration) {
        self.delta_seconds = delta.as_secs_f32();
    }
}

/// Position in the ordered level catalog.
#[derive(Resource, Debug, Default)]
pub struct LevelProgress {
    pub current: usize,
    pub level_count: usize,
    /// Sum of the bonus of every level exited this session
    pub bonus_earned: u32,
    pub levels_completed: u32,
    /// Level requested but not attached yet
    requested: Option<usize>,
}

impl LevelProgress {
    pub fn new(level_count: usize) -> Self {
        Self {
            level_count,
            ..default()
        }
    }

    /// Index of the level after the current (or pending) one, wrapping at the end of the catalog.
    pub fn next_index(&self) -> usize {
        if self.level_count == 0 {
            0
        } else {
            (self.requested.unwrap_or(self.current) + 1) % self.level_count
        }
    }

    pub fn requested(&self) -> Option<usize> {
        self.requested
    }

    /// Marks `index` as the level being loaded and returns it.
    pub fn request(&mut self, index: usize) -> usize {
        self.requested = Some(index);
        index
    }

    pub fn request_next(&mut self) -> usize {
        let next = self.next_index();
        self.request(next)
    }

    /// Makes `index` the current level. Called only once that level is attached.
    pub fn commit(&mut self, index: usize) {
        self.current = index;
        self.requested = None;
    }

    /// Drops the pending request; the current level stays.
    pub fn abandon(&mut self) {
        self.requested = None;
    }

    pub fn record_exit(&mut self, bonus: u32) {
        self.levels_completed += 1;
        self.bonus_earned += bonus;
    }
}

/// A light that renders shadows, and the meshes registered to cast into it.
#[derive(Debug)]
pub struct ShadowGenerator {
    pub light: Entity,
    casters: HashSet<Entity>,
}

impl ShadowGenerator {
    pub fn casters(&self) -> &HashSet<Entity> {
        &self.casters
    }
}

/// Registry of shadow generators. Caster registrations fan out to every generator.
#[derive(Resource, Debug, Default)]
pub struct ShadowRegistry {
    generators: Vec<ShadowGenerator>,
}

impl ShadowRegistry {
    pub fn add_generator(&mut self, light: Entity) {
        if self.generators.iter().any(|g| g.light == light) {
            return;
        }
        self.generators.push(ShadowGenerator {
            light,
            casters: HashSet::new(),
        });
    }

    pub fn generators(&self) -> &[ShadowGenerator] {
        &self.generators
    }

    pub fn add_shadow_caster(&mut self, caster: Entity) {
        for generator in &mut self.generators {
            generator.casters.insert(caster);
        }
    }

    pub fn remove_shadow_caster(&mut self, caster: Entity) {
        for generator in &mut self.generators {
            generator.casters.remove(&caster);
        }
    }

    pub fn is_caster(&self, entity: Entity) -> bool {
        self.generators.iter().any(|g| g.casters.contains(&entity))
    }

    /// Number of distinct casters across all generators.
    pub fn caster_count(&self) -> usize {
        self.generators
            .iter()
            .flat_map(|g| g.casters.iter())
            .collect::<HashSet<_>>()
            .len()
    }
}
