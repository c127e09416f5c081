//! Levels domain: level load requests.
//!
//! At most one level is staged at a time. Requests made while a load is in
//! flight are coalesced: only the latest is kept, and it starts as soon as the
//! in-flight load finishes, whose result is then thrown away.

use bevy::prelude::*;

/// Result of the latest requested load, as seen by the game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Failed(usize),
}

/// What the staging systems should do with a load that just finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// Latest request: attach on success, report failure otherwise
    Commit,
    /// A newer request is waiting; discard this one
    Superseded { next: usize },
}

#[derive(Resource, Debug, Default)]
pub struct LevelLoader {
    in_flight: Option<usize>,
    queued: Option<usize>,
    spawn_pending: bool,
    outcome: Option<LoadOutcome>,
}

impl LevelLoader {
    pub fn request(&mut self, index: usize) {
        if self.in_flight.is_some() {
            if let Some(dropped) = self.queued.replace(index) {
                debug!("[LEVEL] Request for level {} replaced by level {}", dropped, index);
            }
            return;
        }
        self.start(index);
    }

    fn start(&mut self, index: usize) {
        self.in_flight = Some(index);
        self.spawn_pending = true;
        self.outcome = None;
    }

    /// Level whose scene still has to be spawned, once per started load.
    pub fn take_spawn_request(&mut self) -> Option<usize> {
        if !self.spawn_pending {
            return None;
        }
        self.spawn_pending = false;
        self.in_flight
    }

    pub fn in_flight(&self) -> Option<usize> {
        self.in_flight
    }

    pub fn queued(&self) -> Option<usize> {
        self.queued
    }

    /// Close the in-flight load. Starts the queued request if there is one.
    pub fn finish(&mut self, index: usize, succeeded: bool) -> FinishOutcome {
        if self.in_flight != Some(index) {
            warn!("[LEVEL] Finished level {} but {:?} was in flight", index, self.in_flight);
        }

        if let Some(next) = self.queued.take() {
            self.start(next);
            return FinishOutcome::Superseded { next };
        }

        self.in_flight = None;
        self.outcome = Some(if succeeded {
            LoadOutcome::Loaded(index)
        } else {
            LoadOutcome::Failed(index)
        });
        FinishOutcome::Commit
    }

    pub fn take_outcome(&mut self) -> Option<LoadOutcome> {
        self.outcome.take()
    }
}

/// Load state of one asset, as the staging systems see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetProgress {
    Pending,
    Loaded,
    Failed(String),
}

/// What to do with a staged level this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedStatus {
    Waiting,
    /// Attach it. Carries the failure of a dependency the level loads without.
    Ready { missing_dependency: Option<String> },
    Failed(String),
}

/// The glTF file and its scene must load; a failure of either fails the level.
/// A failed dependency (an external texture, say) does not: the level attaches
/// once every dependency has either loaded or failed.
pub fn staged_status(
    gltf: &AssetProgress,
    dependencies: &AssetProgress,
    scene: &AssetProgress,
    instance_ready: bool,
) -> StagedStatus {
    for progress in [gltf, scene] {
        if let AssetProgress::Failed(reason) = progress {
            return StagedStatus::Failed(reason.clone());
        }
    }

    let loaded = *gltf == AssetProgress::Loaded && *scene == AssetProgress::Loaded;
    match dependencies {
        AssetProgress::Pending => StagedStatus::Waiting,
        _ if !loaded || !instance_ready => StagedStatus::Waiting,
        AssetProgress::Loaded => StagedStatus::Ready {
            missing_dependency: None,
        },
        AssetProgress::Failed(reason) => StagedStatus::Ready {
            missing_dependency: Some(reason.clone()),
        },
    }
}
