//! Levels domain: decoding glTF node extras and spawn marker names.
//!
//! Level files carry gameplay meaning in per-node extras: `collisions`, `hole`
//! and `door_trigger`. They are decoded once at load into a `MeshRole` so the
//! rest of the game never touches raw JSON.

use serde_json::{Map, Value};

use super::arena::MAX_SPAWN_SLOTS;

pub const KEY_COLLISIONS: &str = "collisions";
pub const KEY_HOLE: &str = "hole";
pub const KEY_DOOR_TRIGGER: &str = "door_trigger";

/// Prefix of spawn marker node names, followed by the 1-based player slot.
pub const SPAWN_MARKER_PREFIX: &str = "SPAWN_P";

/// Suffix of the animation clip that opens a door: `<door>_Open`.
pub const OPEN_ANIMATION_SUFFIX: &str = "_Open";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshRole {
    /// Visible, casts shadows, no collider
    Scenery,
    /// Static collider, casts shadows
    Solid,
    /// Goal volume, hidden
    Hole,
    /// Opens the named door on first overlap, hidden
    DoorTrigger { door: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    Malformed(String),
    Conflicting(Vec<&'static str>),
    InvalidDoorName,
}

impl std::fmt::Display for TagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagError::Malformed(reason) => write!(f, "malformed extras: {}", reason),
            TagError::Conflicting(keys) => write!(f, "conflicting tags: {}", keys.join(", ")),
            TagError::InvalidDoorName => {
                write!(f, "'{}' must be a non-empty string", KEY_DOOR_TRIGGER)
            }
        }
    }
}

/// Truthiness of a flag tag: `true`, a non-zero number, or the string "true"/"1".
fn flag_is_set(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s.eq_ignore_ascii_case("true") || s == "1",
        _ => false,
    }
}

fn door_name(map: &Map<String, Value>) -> Result<Option<String>, TagError> {
    match map.get(KEY_DOOR_TRIGGER) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(Some(name.trim().to_string())),
        Some(_) => Err(TagError::InvalidDoorName),
    }
}

/// Decode the role carried by a node's extras JSON.
/// Extras without any recognised key decode to `Scenery`.
pub fn decode_extras(raw: &str) -> Result<MeshRole, TagError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| TagError::Malformed(e.to_string()))?;

    let Some(map) = value.as_object() else {
        return Ok(MeshRole::Scenery);
    };

    let collisions = map.get(KEY_COLLISIONS).is_some_and(flag_is_set);
    let hole = map.get(KEY_HOLE).is_some_and(flag_is_set);
    let door = door_name(map)?;

    let mut present = Vec::new();
    if collisions {
        present.push(KEY_COLLISIONS);
    }
    if hole {
        present.push(KEY_HOLE);
    }
    if door.is_some() {
        present.push(KEY_DOOR_TRIGGER);
    }
    if present.len() > 1 {
        return Err(TagError::Conflicting(present));
    }

    Ok(match (collisions, hole, door) {
        (true, _, _) => MeshRole::Solid,
        (_, true, _) => MeshRole::Hole,
        (_, _, Some(door)) => MeshRole::DoorTrigger { door },
        _ => MeshRole::Scenery,
    })
}

/// Player slot named by a spawn marker such as `SPAWN_P1` or `SPAWN_P2.001`.
pub fn spawn_marker_slot(name: &str) -> Option<usize> {
    let start = name.find(SPAWN_MARKER_PREFIX)? + SPAWN_MARKER_PREFIX.len();
    let digits: String = name[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let slot: usize = digits.parse().ok()?;
    (1..=MAX_SPAWN_SLOTS).contains(&slot).then_some(slot)
}

/// Door name of an animation clip named `<door>_Open`.
pub fn door_of_open_animation(clip_name: &str) -> Option<&str> {
    clip_name
        .strip_suffix(OPEN_ANIMATION_SUFFIX)
        .filter(|door| !door.is_empty())
}
