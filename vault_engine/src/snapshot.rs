use serde::Serialize;

use crate::animation::TransitionKind;
use crate::location::LocationRuntime;
use crate::scenery::{SceneryObject, Subtype};

/// Read-only capture of the runtime, serializable for the CLI's JSON output
/// and for regression comparisons.
#[derive(Debug, Serialize)]
pub struct LocationSnapshot {
    pub name: String,
    pub frame: u32,
    pub light_recomputes: u32,
    pub scenery: Vec<ScenerySnapshot>,
}

#[derive(Debug, Serialize)]
pub struct ScenerySnapshot {
    pub name: String,
    pub subtype: Subtype,
    pub use_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door: Option<DoorSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<QueueSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct DoorSnapshot {
    pub opened: bool,
    pub locked: bool,
    pub can_walk_thru: bool,
    pub can_light_thru: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_cue: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScriptSnapshot {
    pub name: String,
    pub overrides: bool,
}

#[derive(Debug, Serialize)]
pub struct QueueSnapshot {
    pub playing: bool,
    pub reversed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<TransitionKind>,
}

impl LocationSnapshot {
    pub fn capture(runtime: &LocationRuntime) -> Self {
        LocationSnapshot {
            name: runtime.name().to_string(),
            frame: runtime.frame(),
            light_recomputes: runtime.light_recomputes(),
            scenery: runtime.scenery_objects().map(snapshot_scenery).collect(),
        }
    }
}

fn snapshot_scenery(object: &SceneryObject) -> ScenerySnapshot {
    let door = object.door().map(|door| DoorSnapshot {
        opened: door.opened(),
        locked: door.locked(),
        can_walk_thru: door.can_walk_thru(),
        can_light_thru: door.can_light_thru(),
        sound_cue: door.sound_cue().map(str::to_string),
    });
    let script = object.script().map(|script| ScriptSnapshot {
        name: script.name.clone(),
        overrides: script.overrides,
    });
    let animation = object.animation_queue_ref().map(|queue| QueueSnapshot {
        playing: queue.playing(),
        reversed: queue.reversed(),
        pending: queue.pending().map(|pending| pending.kind),
    });

    ScenerySnapshot {
        name: object.name().to_string(),
        subtype: object.subtype(),
        use_count: object.use_count(),
        door,
        script,
        animation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_location;
    use crate::services::WorldServices;

    #[test]
    fn snapshot_reflects_a_committed_transition() {
        let location = demo_location();
        let mut runtime = LocationRuntime::from_file(&location, WorldServices::new());
        let handle = runtime.handle_for("blast_door").expect("handle");
        runtime.use_scenery(handle);
        for _ in 0..16 {
            runtime.advance_frame(0.1);
        }

        let snapshot = LocationSnapshot::capture(&runtime);
        assert_eq!(snapshot.light_recomputes, 1);
        let door = snapshot
            .scenery
            .iter()
            .find(|scenery| scenery.name == "blast_door")
            .expect("blast_door present");
        let state = door.door.as_ref().expect("door snapshot");
        assert!(state.opened && state.can_walk_thru && state.can_light_thru);
        let queue = door.animation.as_ref().expect("queue snapshot");
        assert!(queue.reversed);
        assert!(queue.pending.is_none());

        let json = serde_json::to_string_pretty(&snapshot).expect("snapshot serializes");
        assert!(json.contains("\"can_light_thru\": true"));
    }
}
