use vault_world::{AnimationRecord, LocationFile, SceneryKind, SceneryRecord, ScriptRecord};

/// Built-in location used when no `--location` file is supplied. Covers the
/// interesting door shapes: cued, silent, script-overridden, and headless.
pub fn demo_location() -> LocationFile {
    LocationFile {
        name: "vault-entrance".to_string(),
        scenery: vec![
            SceneryRecord {
                name: "blast_door".to_string(),
                kind: SceneryKind::Door,
                opened: false,
                locked: false,
                sound_cue: Some("3".to_string()),
                script: None,
                animation: Some(AnimationRecord {
                    frames: 8,
                    frame_rate: 10.0,
                }),
            },
            SceneryRecord {
                name: "maintenance_door".to_string(),
                kind: SceneryKind::Door,
                opened: false,
                locked: false,
                sound_cue: None,
                script: None,
                animation: Some(AnimationRecord {
                    frames: 4,
                    frame_rate: 10.0,
                }),
            },
            SceneryRecord {
                name: "service_hatch".to_string(),
                kind: SceneryKind::Door,
                opened: false,
                locked: false,
                sound_cue: Some("1".to_string()),
                script: Some(ScriptRecord {
                    name: "hatch_guard".to_string(),
                    overrides: true,
                }),
                animation: Some(AnimationRecord {
                    frames: 4,
                    frame_rate: 10.0,
                }),
            },
            SceneryRecord {
                name: "cell_door".to_string(),
                kind: SceneryKind::Door,
                opened: false,
                locked: true,
                sound_cue: Some("2".to_string()),
                script: None,
                animation: None,
            },
            SceneryRecord {
                name: "terminal".to_string(),
                kind: SceneryKind::Generic,
                opened: false,
                locked: false,
                sound_cue: None,
                script: Some(ScriptRecord {
                    name: "terminal_boot".to_string(),
                    overrides: false,
                }),
                animation: None,
            },
        ],
    }
}

/// Interaction order for the default demo run: a full blast-door cycle, an
/// overridden hatch, a headless door, and a silent one.
pub const DEMO_SEQUENCE: &[&str] = &[
    "blast_door",
    "blast_door",
    "service_hatch",
    "cell_door",
    "maintenance_door",
];
