//! Player domain: the player ball component and its phase.

use bevy::prelude::*;

use crate::levels::Volume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPhase {
    /// Placed on the spawn point, no input yet
    #[default]
    Spawned,
    Moving,
    /// Reached the goal; stays here until the next respawn
    Completed,
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    /// 1-based slot, also selects the input axis
    pub index: usize,
    pub phase: PlayerPhase,
    pub spawn_point: Vec3,
    pub goal: Option<Volume>,
}

impl Player {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            phase: PlayerPhase::Spawned,
            spawn_point: Vec3::ZERO,
            goal: None,
        }
    }

    pub fn respawn(&mut self, spawn_point: Vec3, goal: Option<Volume>) {
        self.spawn_point = spawn_point;
        self.goal = goal;
        self.phase = PlayerPhase::Spawned;
    }

    /// Spawned becomes Moving on the first non-zero intent.
    pub fn note_intent(&mut self, intent: Vec3) {
        if self.phase == PlayerPhase::Spawned && intent != Vec3::ZERO {
            self.phase = PlayerPhase::Moving;
        }
    }

    /// True the first time `collider` overlaps the goal since the last respawn.
    pub fn reach_goal(&mut self, collider: &Volume) -> bool {
        if self.phase == PlayerPhase::Completed {
            return false;
        }
        let Some(goal) = self.goal else {
            return false;
        };
        if !goal.intersects(collider) {
            return false;
        }
        self.phase = PlayerPhase::Completed;
        true
    }
}
