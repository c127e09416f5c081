//! Levels domain: world-space axis-aligned volumes.

use bevy::prelude::*;

/// World-space axis-aligned box. Used for goals, door triggers and player colliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    pub min: Vec3,
    pub max: Vec3,
}

impl Volume {
    /// Box spanning two opposite corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Cube of half-size `radius` around `center` (a sphere's bounding box).
    pub fn around(center: Vec3, radius: f32) -> Self {
        Self::from_center_half_extents(center, Vec3::splat(radius))
    }

    /// Overlap test. Touching faces count as intersecting.
    pub fn intersects(&self, other: &Volume) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    pub fn union(&self, other: &Volume) -> Volume {
        Volume {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Bounding box of this (local-space) box after `transform`.
    pub fn transformed(&self, transform: &GlobalTransform) -> Volume {
        let corners = self.corners().map(|corner| transform.transform_point(corner));
        let mut min = corners[0];
        let mut max = corners[0];
        for corner in &corners[1..] {
            min = min.min(*corner);
            max = max.max(*corner);
        }
        Volume { min, max }
    }

    /// Union of all volumes, `None` when empty.
    pub fn enclosing<'a>(volumes: impl IntoIterator<Item = &'a Volume>) -> Option<Volume> {
        volumes
            .into_iter()
            .copied()
            .reduce(|acc, volume| acc.union(&volume))
    }
}
