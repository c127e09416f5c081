//! Levels domain: the attached arena snapshot and its builder.

use bevy::animation::graph::AnimationNodeIndex;
use bevy::prelude::*;
use std::collections::HashMap;

use super::tags::MeshRole;
use super::volume::Volume;
use crate::input::MAX_PLAYERS;

pub const MAX_SPAWN_SLOTS: usize = MAX_PLAYERS;

/// A hidden volume that opens a door the first time a player overlaps it.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorTrigger {
    pub volume: Volume,
    pub door_name: String,
    pub triggered: bool,
    /// Index of `<door>_Open` in the level's animation graph, if the file has one
    pub open_animation: Option<AnimationNodeIndex>,
}

/// A trigger that fired this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorOpening {
    pub door_name: String,
    pub animation: Option<AnimationNodeIndex>,
}

/// Everything gameplay needs from one loaded level.
#[derive(Debug, Clone)]
pub struct ArenaLayout {
    pub level_index: usize,
    pub name: String,
    pub root: Entity,
    spawn_points: [Option<Vec3>; MAX_SPAWN_SLOTS],
    goal: Option<Volume>,
    door_triggers: Vec<DoorTrigger>,
    shadow_casters: Vec<Entity>,
}

impl ArenaLayout {
    pub fn spawn_point(&self, player: usize) -> Option<Vec3> {
        player
            .checked_sub(1)
            .and_then(|slot| self.spawn_points.get(slot).copied().flatten())
    }

    pub fn goal(&self) -> Option<Volume> {
        self.goal
    }

    pub fn door_triggers(&self) -> &[DoorTrigger] {
        &self.door_triggers
    }

    pub fn shadow_casters(&self) -> &[Entity] {
        &self.shadow_casters
    }
}

/// The currently attached level, if any. Replaced in one step when a new level is ready.
#[derive(Resource, Debug, Default)]
pub struct Arena {
    layout: Option<ArenaLayout>,
}

impl Arena {
    /// Attach `layout`, returning the one it replaces.
    pub fn replace(&mut self, layout: ArenaLayout) -> Option<ArenaLayout> {
        self.layout.replace(layout)
    }

    pub fn layout(&self) -> Option<&ArenaLayout> {
        self.layout.as_ref()
    }

    /// Spawn position for 1-based `player`. Unknown slots and missing markers yield the origin.
    pub fn spawn_point(&self, player: usize) -> Vec3 {
        self.layout
            .as_ref()
            .and_then(|layout| layout.spawn_point(player))
            .unwrap_or(Vec3::ZERO)
    }

    pub fn goal(&self) -> Option<Volume> {
        self.layout.as_ref().and_then(ArenaLayout::goal)
    }

    pub fn door_triggers(&self) -> &[DoorTrigger] {
        match &self.layout {
            Some(layout) => &layout.door_triggers,
            None => &[],
        }
    }

    /// Fire every untriggered door trigger overlapped by any collider. Each trigger fires once.
    pub fn check_triggers(&mut self, colliders: &[Volume]) -> Vec<DoorOpening> {
        let Some(layout) = self.layout.as_mut() else {
            return Vec::new();
        };

        let mut openings = Vec::new();
        for trigger in layout.door_triggers.iter_mut().filter(|t| !t.triggered) {
            if colliders.iter().any(|c| c.intersects(&trigger.volume)) {
                trigger.triggered = true;
                openings.push(DoorOpening {
                    door_name: trigger.door_name.clone(),
                    animation: trigger.open_animation,
                });
            }
        }
        openings
    }
}

/// Layout plus the per-mesh work the attach step still has to apply.
#[derive(Debug)]
pub struct BuiltArena {
    pub layout: ArenaLayout,
    /// Meshes that get a static trimesh collider
    pub solids: Vec<Entity>,
    /// Goal and trigger meshes, hidden and without collider
    pub hidden: Vec<Entity>,
}

/// Accumulates what a staged level scan finds.
#[derive(Debug)]
pub struct ArenaBuilder {
    level_index: usize,
    name: String,
    spawn_points: [Option<Vec3>; MAX_SPAWN_SLOTS],
    goal: Option<Volume>,
    door_triggers: Vec<DoorTrigger>,
    shadow_casters: Vec<Entity>,
    solids: Vec<Entity>,
    hidden: Vec<Entity>,
    open_animations: HashMap<String, AnimationNodeIndex>,
}

impl ArenaBuilder {
    pub fn new(level_index: usize, name: impl Into<String>) -> Self {
        Self {
            level_index,
            name: name.into(),
            spawn_points: [None; MAX_SPAWN_SLOTS],
            goal: None,
            door_triggers: Vec::new(),
            shadow_casters: Vec::new(),
            solids: Vec::new(),
            hidden: Vec::new(),
            open_animations: HashMap::new(),
        }
    }

    /// Open animations keyed by door name.
    pub fn with_open_animations(mut self, animations: HashMap<String, AnimationNodeIndex>) -> Self {
        self.open_animations = animations;
        self
    }

    pub fn set_spawn_point(&mut self, slot: usize, position: Vec3) {
        let Some(entry) = slot
            .checked_sub(1)
            .and_then(|index| self.spawn_points.get_mut(index))
        else {
            return;
        };
        if entry.is_some() {
            warn!("[LEVEL] '{}' has several SPAWN_P{} markers, keeping the last", self.name, slot);
        }
        *entry = Some(position);
    }

    /// Register the non-empty meshes of one tagged (or untagged) node.
    pub fn add_meshes(&mut self, role: &MeshRole, meshes: &[(Entity, Volume)]) {
        if meshes.is_empty() {
            return;
        }
        let entities = meshes.iter().map(|(entity, _)| *entity);
        let bounds = Volume::enclosing(meshes.iter().map(|(_, volume)| volume));

        match role {
            MeshRole::Scenery => self.shadow_casters.extend(entities),
            MeshRole::Solid => {
                let entities: Vec<Entity> = entities.collect();
                self.solids.extend(&entities);
                self.shadow_casters.extend(entities);
            }
            MeshRole::Hole => {
                if self.goal.is_some() {
                    warn!("[LEVEL] '{}' has several hole meshes, keeping the last", self.name);
                }
                self.goal = bounds;
                self.hidden.extend(entities);
            }
            MeshRole::DoorTrigger { door } => {
                let Some(volume) = bounds else {
                    return;
                };
                self.door_triggers.push(DoorTrigger {
                    volume,
                    door_name: door.clone(),
                    triggered: false,
                    open_animation: self.open_animations.get(door).copied(),
                });
                self.hidden.extend(entities);
            }
        }
    }

    pub fn build(self, root: Entity) -> BuiltArena {
        if self.spawn_points[0].is_none() {
            warn!("[LEVEL] '{}' has no SPAWN_P1 marker, players start at the origin", self.name);
        }
        if self.goal.is_none() {
            warn!("[LEVEL] '{}' has no hole, it cannot be completed", self.name);
        }

        BuiltArena {
            layout: ArenaLayout {
                level_index: self.level_index,
                name: self.name,
                root,
                spawn_points: self.spawn_points,
                goal: self.goal,
                door_triggers: self.door_triggers,
                shadow_casters: self.shadow_casters,
            },
            solids: self.solids,
            hidden: self.hidden,
        }
    }
}
