//! Levels domain: staging, scanning and attaching level scenes, and door triggers.

use avian3d::prelude::{Collider, ColliderConstructor, RigidBody};
use bevy::animation::graph::AnimationNodeIndex;
use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::camera::primitives::MeshAabb;
use bevy::ecs::message::MessageWriter;
use bevy::gltf::{Gltf, GltfAssetLabel, GltfExtras};
use bevy::light::NotShadowCaster;
use bevy::prelude::*;
use bevy::scene::{SceneInstance, SceneSpawner};
use std::collections::HashMap;

use crate::content::LevelCatalog;
use crate::core::{DoorOpened, LevelAttached, LevelLoadFailed, ShadowRegistry};
use crate::levels::arena::{Arena, ArenaBuilder};
use crate::levels::components::{LevelRoot, StagedLevel, StagedReady};
use crate::levels::loader::{
    AssetProgress, FinishOutcome, LevelLoader, StagedStatus, staged_status,
};
use crate::levels::tags::{MeshRole, decode_extras, door_of_open_animation, spawn_marker_slot};
use crate::levels::volume::Volume;
use crate::player::{BallTuning, Player};

type NodeQuery<'w, 's> = Query<
    'w,
    's,
    (
        Option<&'static Name>,
        Option<&'static GltfExtras>,
        Option<&'static Mesh3d>,
        &'static GlobalTransform,
    ),
>;

fn child_slice(children: &Children) -> &[Entity] {
    children
}

/// Every entity below `root`, depth first.
fn descendants(root: Entity, children: &Query<&Children>) -> Vec<Entity> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        if let Ok(kids) = children.get(entity) {
            for &child in child_slice(kids) {
                found.push(child);
                stack.push(child);
            }
        }
    }
    found
}

/// World-space bounds of a mesh with at least one vertex.
fn mesh_volume(
    meshes: &Assets<Mesh>,
    mesh: &Mesh3d,
    transform: &GlobalTransform,
) -> Option<Volume> {
    let mesh = meshes.get(&mesh.0)?;
    if mesh.count_vertices() == 0 {
        return None;
    }
    let aabb = mesh.compute_aabb()?;
    Some(
        Volume::from_center_half_extents(aabb.center.into(), aabb.half_extents.into())
            .transformed(transform),
    )
}

/// Put every `<door>_Open` clip of the file into one graph.
/// Returns the graph and the node per door.
fn build_open_animations(
    gltf: Option<&Gltf>,
    graphs: &mut Assets<AnimationGraph>,
) -> (Option<Handle<AnimationGraph>>, HashMap<String, AnimationNodeIndex>) {
    let Some(gltf) = gltf else {
        return (None, HashMap::new());
    };

    let clips: Vec<(String, Handle<AnimationClip>)> = gltf
        .named_animations
        .iter()
        .filter_map(|(name, clip)| {
            door_of_open_animation(name).map(|door| (door.to_string(), clip.clone()))
        })
        .collect();

    if clips.is_empty() {
        return (None, HashMap::new());
    }

    let (graph, indices) = AnimationGraph::from_clips(clips.iter().map(|(_, clip)| clip.clone()));
    let doors = clips
        .into_iter()
        .map(|(door, _)| door)
        .zip(indices)
        .collect();

    (Some(graphs.add(graph)), doors)
}

/// Walk the staged hierarchy, feeding markers and tagged meshes to `builder`.
/// A node's extras decide the role of every mesh below it until another node with extras.
/// Returns the spawn marker entities.
fn scan_staged_level(
    root: Entity,
    builder: &mut ArenaBuilder,
    children: &Query<&Children>,
    nodes: &NodeQuery,
    meshes: &Assets<Mesh>,
) -> Vec<Entity> {
    let mut markers = Vec::new();
    let mut tagged: Vec<(MeshRole, Vec<(Entity, Volume)>)> = Vec::new();
    let mut untagged = Vec::new();
    let mut stack: Vec<(Entity, Option<usize>)> = vec![(root, None)];

    while let Some((entity, owner)) = stack.pop() {
        let Ok((name, extras, mesh, transform)) = nodes.get(entity) else {
            continue;
        };

        if let Some(slot) = name.and_then(|n| spawn_marker_slot(n.as_str())) {
            builder.set_spawn_point(slot, transform.translation());
            markers.push(entity);
            continue;
        }

        let owner = match extras {
            Some(extras) => {
                let role = decode_extras(&extras.value).unwrap_or_else(|e| {
                    warn!(
                        "[LEVEL] Node '{}': {}, treated as scenery",
                        name.map_or("<unnamed>", |n| n.as_str()),
                        e
                    );
                    MeshRole::Scenery
                });
                tagged.push((role, Vec::new()));
                Some(tagged.len() - 1)
            }
            None => owner,
        };

        if let Some(volume) = mesh.and_then(|m| mesh_volume(meshes, m, transform)) {
            match owner {
                Some(slot) => tagged[slot].1.push((entity, volume)),
                None => untagged.push((entity, volume)),
            }
        }

        if let Ok(kids) = children.get(entity) {
            stack.extend(child_slice(kids).iter().map(|&child| (child, owner)));
        }
    }

    for (role, meshes) in &tagged {
        builder.add_meshes(role, meshes);
    }
    builder.add_meshes(&MeshRole::Scenery, &untagged);

    markers
}

/// Spawn the requested level hidden, next to the attached one.
pub(crate) fn spawn_requested_level(
    mut commands: Commands,
    mut loader: ResMut<LevelLoader>,
    catalog: Res<LevelCatalog>,
    asset_server: Res<AssetServer>,
    mut failed: MessageWriter<LevelLoadFailed>,
) {
    let Some(index) = loader.take_spawn_request() else {
        return;
    };

    let Some(level) = catalog.get(index) else {
        let reason = format!("no level at index {} ({} levels)", index, catalog.len());
        error!("[LEVEL] {}", reason);
        if loader.finish(index, false) == FinishOutcome::Commit {
            failed.write(LevelLoadFailed { index, reason });
        }
        return;
    };

    info!("[LEVEL] Loading level {} '{}' from {}", index, level.name, level.model);

    let gltf: Handle<Gltf> = asset_server.load(level.model.clone());
    let scene: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(level.model.clone()));

    commands.spawn((
        Name::new(format!("Staged {}", level.name)),
        StagedLevel { index, gltf },
        SceneRoot(scene),
        Transform::default(),
        Visibility::Hidden,
    ));
}

fn asset_progress(state: LoadState) -> AssetProgress {
    match state {
        LoadState::Loaded => AssetProgress::Loaded,
        LoadState::Failed(err) => AssetProgress::Failed(err.to_string()),
        _ => AssetProgress::Pending,
    }
}

fn dependency_progress(state: RecursiveDependencyLoadState) -> AssetProgress {
    match state {
        RecursiveDependencyLoadState::Loaded => AssetProgress::Loaded,
        RecursiveDependencyLoadState::Failed(err) => AssetProgress::Failed(err.to_string()),
        _ => AssetProgress::Pending,
    }
}

/// Watch staged levels: drop failed ones, mark ready ones for attaching.
pub(crate) fn poll_staged_level(
    mut commands: Commands,
    mut loader: ResMut<LevelLoader>,
    asset_server: Res<AssetServer>,
    scene_spawner: Res<SceneSpawner>,
    staged: Query<
        (Entity, &StagedLevel, &SceneRoot, Option<&SceneInstance>),
        Without<StagedReady>,
    >,
    mut failed: MessageWriter<LevelLoadFailed>,
) {
    for (entity, level, root, instance) in &staged {
        let status = staged_status(
            &asset_progress(asset_server.load_state(level.gltf.id())),
            &dependency_progress(asset_server.recursive_dependency_load_state(level.gltf.id())),
            &asset_progress(asset_server.load_state(root.0.id())),
            instance.is_some_and(|instance| scene_spawner.instance_is_ready(**instance)),
        );

        match status {
            StagedStatus::Waiting => {}
            StagedStatus::Ready { missing_dependency } => {
                if let Some(reason) = missing_dependency {
                    warn!("[LEVEL] Level {} loads without a dependency: {}", level.index, reason);
                }
                commands.entity(entity).insert(StagedReady);
            }
            StagedStatus::Failed(reason) => {
                error!("[LEVEL] Level {} failed to load: {}", level.index, reason);
                commands.entity(entity).despawn();
                match loader.finish(level.index, false) {
                    FinishOutcome::Commit => {
                        failed.write(LevelLoadFailed {
                            index: level.index,
                            reason,
                        });
                    }
                    FinishOutcome::Superseded { next } => {
                        info!("[LEVEL] Moving on to requested level {}", next);
                    }
                }
            }
        }
    }
}

/// Scan a ready staged level and swap it in for the attached one.
pub(crate) fn attach_staged_level(
    mut commands: Commands,
    mut loader: ResMut<LevelLoader>,
    mut arena: ResMut<Arena>,
    mut shadows: ResMut<ShadowRegistry>,
    catalog: Res<LevelCatalog>,
    gltfs: Res<Assets<Gltf>>,
    meshes: Res<Assets<Mesh>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    staged: Query<(Entity, &StagedLevel), With<StagedReady>>,
    children: Query<&Children>,
    nodes: NodeQuery,
    mut animation_players: Query<&mut AnimationPlayer>,
    mut attached: MessageWriter<LevelAttached>,
) {
    for (root, level) in &staged {
        let index = level.index;

        if let FinishOutcome::Superseded { next } = loader.finish(index, true) {
            info!(
                "[LEVEL] Level {} ready but level {} was requested since, discarding",
                index, next
            );
            commands.entity(root).despawn();
            continue;
        }

        let name = catalog
            .get(index)
            .map_or_else(|| format!("Level {}", index), |l| l.name.clone());

        let (graph, open_animations) =
            build_open_animations(gltfs.get(&level.gltf), &mut graphs);
        let mut builder =
            ArenaBuilder::new(index, name.clone()).with_open_animations(open_animations);
        let markers = scan_staged_level(root, &mut builder, &children, &nodes, &meshes);
        let built = builder.build(root);

        for entity in descendants(root, &children) {
            let Ok(mut player) = animation_players.get_mut(entity) else {
                continue;
            };
            player.stop_all();
            if let Some(graph) = &graph {
                commands.entity(entity).insert(AnimationGraphHandle(graph.clone()));
            }
        }

        for marker in markers {
            commands.entity(marker).despawn();
        }
        for &solid in &built.solids {
            commands
                .entity(solid)
                .insert((RigidBody::Static, ColliderConstructor::TrimeshFromMesh));
        }
        for &hidden in &built.hidden {
            commands.entity(hidden).insert(Visibility::Hidden);
        }
        for &caster in built.layout.shadow_casters() {
            shadows.add_shadow_caster(caster);
        }
        for entity in descendants(root, &children) {
            if !nodes.get(entity).is_ok_and(|(_, _, mesh, _)| mesh.is_some()) {
                continue;
            }
            if shadows.is_caster(entity) {
                commands.entity(entity).remove::<NotShadowCaster>();
            } else {
                commands.entity(entity).insert(NotShadowCaster);
            }
        }

        info!(
            "[LEVEL] Attached level {} '{}': {} solids, {} door triggers, goal: {}",
            index,
            name,
            built.solids.len(),
            built.layout.door_triggers().len(),
            built.layout.goal().is_some()
        );

        if let Some(old) = arena.replace(built.layout) {
            for &caster in old.shadow_casters() {
                shadows.remove_shadow_caster(caster);
            }
            commands.entity(old.root).despawn();
            info!("[LEVEL] Detached level {} '{}'", old.level_index, old.name);
        }

        commands
            .entity(root)
            .remove::<(StagedLevel, StagedReady)>()
            .insert((
                Name::new(name.clone()),
                LevelRoot { index },
                Visibility::Inherited,
            ));

        attached.write(LevelAttached { index, name });
    }
}

/// Open doors whose trigger a player entered. Each trigger fires once per level load.
pub(crate) fn check_door_triggers(
    mut commands: Commands,
    mut arena: ResMut<Arena>,
    ball: Res<BallTuning>,
    players: Query<&Transform, With<Player>>,
    roots: Query<Entity, With<LevelRoot>>,
    children: Query<&Children>,
    names: Query<&Name>,
    mut animation_players: Query<&mut AnimationPlayer>,
    mut opened: MessageWriter<DoorOpened>,
) {
    let colliders: Vec<Volume> = players
        .iter()
        .map(|transform| Volume::around(transform.translation, ball.radius))
        .collect();

    let openings = arena.check_triggers(&colliders);
    if openings.is_empty() {
        return;
    }
    let Ok(root) = roots.single() else {
        return;
    };
    let level_entities = descendants(root, &children);

    for opening in openings {
        let door = level_entities
            .iter()
            .copied()
            .find(|&e| names.get(e).is_ok_and(|n| n.as_str() == opening.door_name));

        let Some(door) = door else {
            debug!("[DOOR] Trigger fired but no door named '{}'", opening.door_name);
            continue;
        };

        match opening.animation {
            Some(animation) => {
                for &entity in &level_entities {
                    if let Ok(mut player) = animation_players.get_mut(entity) {
                        player.play(animation);
                    }
                }
                info!("[DOOR] Playing {}_Open", opening.door_name);
            }
            None => {
                commands.entity(door).insert(Visibility::Hidden);
                for entity in std::iter::once(door).chain(descendants(door, &children)) {
                    commands
                        .entity(entity)
                        .remove::<(RigidBody, Collider, ColliderConstructor)>();
                }
                info!("[DOOR] Door '{}' has no open animation, hiding it", opening.door_name);
            }
        }

        opened.write(DoorOpened {
            door: opening.door_name,
            animated: opening.animation.is_some(),
        });
    }
}
