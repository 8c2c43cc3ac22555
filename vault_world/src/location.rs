use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("reading location file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing location file")]
    Json(#[from] serde_json::Error),
    #[error("invalid location data: {0}")]
    Invalid(String),
}

/// One location's worth of world data, as read from disk at load time.
/// Persisted `opened`/`locked`/`sound_cue` values seed the runtime; they are
/// never written back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFile {
    pub name: String,
    #[serde(default)]
    pub scenery: Vec<SceneryRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneryKind {
    Door,
    Generic,
}

impl Default for SceneryKind {
    fn default() -> Self {
        SceneryKind::Generic
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneryRecord {
    pub name: String,
    #[serde(default)]
    pub kind: SceneryKind,
    #[serde(default)]
    pub opened: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_cue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationRecord>,
}

/// Scripted procedure attached to a scenery entity. When `overrides` is set
/// the script fully replaces built-in interaction behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRecord {
    pub name: String,
    #[serde(default)]
    pub overrides: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationRecord {
    pub frames: u32,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f32,
}

fn default_frame_rate() -> f32 {
    10.0
}

pub fn load_location(path: &Path) -> Result<LocationFile, WorldError> {
    let text = fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_location(&text)
}

pub fn parse_location(text: &str) -> Result<LocationFile, WorldError> {
    let location: LocationFile = serde_json::from_str(text)?;
    validate(&location)?;
    Ok(location)
}

fn validate(location: &LocationFile) -> Result<(), WorldError> {
    if location.name.trim().is_empty() {
        return Err(WorldError::Invalid("location name is empty".to_string()));
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for record in &location.scenery {
        if record.name.trim().is_empty() {
            return Err(WorldError::Invalid(format!(
                "location {}: scenery with empty name",
                location.name
            )));
        }
        if !seen.insert(record.name.as_str()) {
            return Err(WorldError::Invalid(format!(
                "location {}: duplicate scenery name {}",
                location.name, record.name
            )));
        }
        if let Some(animation) = &record.animation {
            if animation.frames == 0 {
                return Err(WorldError::Invalid(format!(
                    "scenery {}: animation with no frames",
                    record.name
                )));
            }
            if !animation.frame_rate.is_finite() || animation.frame_rate <= 0.0 {
                return Err(WorldError::Invalid(format!(
                    "scenery {}: animation frame rate {} is not positive",
                    record.name, animation.frame_rate
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door_json() -> &'static str {
        r#"{
            "name": "vault-entrance",
            "scenery": [
                {
                    "name": "blast_door",
                    "kind": "door",
                    "sound_cue": "3",
                    "animation": { "frames": 8 }
                },
                { "name": "terminal" }
            ]
        }"#
    }

    #[test]
    fn parse_applies_defaults() {
        let location = parse_location(door_json()).expect("location parses");
        assert_eq!(location.name, "vault-entrance");
        assert_eq!(location.scenery.len(), 2);

        let door = &location.scenery[0];
        assert_eq!(door.kind, SceneryKind::Door);
        assert!(!door.opened);
        assert!(!door.locked);
        assert_eq!(door.sound_cue.as_deref(), Some("3"));
        let animation = door.animation.as_ref().expect("animation present");
        assert_eq!(animation.frames, 8);
        assert_eq!(animation.frame_rate, 10.0);

        let terminal = &location.scenery[1];
        assert_eq!(terminal.kind, SceneryKind::Generic);
        assert!(terminal.animation.is_none());
        assert!(terminal.script.is_none());
    }

    #[test]
    fn parse_rejects_duplicate_scenery_names() {
        let text = r#"{
            "name": "loc",
            "scenery": [ { "name": "door_a" }, { "name": "door_a" } ]
        }"#;
        let err = parse_location(text).expect_err("duplicate names rejected");
        assert!(matches!(err, WorldError::Invalid(_)), "got {err:?}");
        assert!(err.to_string().contains("duplicate scenery name door_a"));
    }

    #[test]
    fn parse_rejects_empty_location_name() {
        let err = parse_location(r#"{ "name": "  " }"#).expect_err("empty name rejected");
        assert!(matches!(err, WorldError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn parse_rejects_zero_frame_animation() {
        let text = r#"{
            "name": "loc",
            "scenery": [
                { "name": "door_a", "kind": "door", "animation": { "frames": 0 } }
            ]
        }"#;
        let err = parse_location(text).expect_err("zero frames rejected");
        assert!(err.to_string().contains("no frames"));
    }

    #[test]
    fn parse_rejects_non_positive_frame_rate() {
        let text = r#"{
            "name": "loc",
            "scenery": [
                {
                    "name": "door_a",
                    "kind": "door",
                    "animation": { "frames": 4, "frame_rate": 0.0 }
                }
            ]
        }"#;
        let err = parse_location(text).expect_err("zero frame rate rejected");
        assert!(err.to_string().contains("not positive"));
    }

    #[test]
    fn load_location_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("entrance.json");
        std::fs::write(&path, door_json()).expect("write fixture");

        let location = load_location(&path).expect("location loads");
        assert_eq!(location.name, "vault-entrance");
    }

    #[test]
    fn load_location_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.json");
        let err = load_location(&path).expect_err("missing file is an error");
        assert!(matches!(err, WorldError::Io { .. }), "got {err:?}");
    }
}
