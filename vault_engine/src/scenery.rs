use serde::Serialize;

use vault_world::{SceneryKind as SceneryKindRecord, SceneryRecord};

use crate::animation::AnimationQueue;

pub type SceneryHandle = u32;

/// Discriminator used for polymorphic dispatch among scenery kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subtype {
    Door,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptBinding {
    pub name: String,
    pub overrides: bool,
}

/// Persistent door data. `can_light_thru` is derived: it tracks `opened`
/// through the single mutation point and is never independently settable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorState {
    opened: bool,
    locked: bool,
    can_light_thru: bool,
    sound_cue: Option<String>,
}

impl DoorState {
    fn from_record(record: &SceneryRecord) -> Self {
        DoorState {
            opened: record.opened,
            locked: record.locked,
            can_light_thru: record.opened,
            sound_cue: record.sound_cue.clone(),
        }
    }

    pub fn opened(&self) -> bool {
        self.opened
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn can_walk_thru(&self) -> bool {
        self.opened
    }

    pub fn can_light_thru(&self) -> bool {
        self.can_light_thru
    }

    pub fn sound_cue(&self) -> Option<&str> {
        self.sound_cue.as_deref()
    }

    /// Independent flag; lock checks belong to other parts of the engine.
    #[allow(dead_code)]
    pub fn set_locked(&mut self, value: bool) {
        self.locked = value;
    }

    fn commit_opened(&mut self, value: bool) {
        self.opened = value;
        self.can_light_thru = value;
    }
}

#[derive(Debug)]
pub enum SceneryKind {
    Door(DoorState),
    Generic,
}

/// The entity's UI representation. Queued-animation support is a capability
/// of the representation, surfaced through `SceneryObject::animation_queue`;
/// a `Static` visual simply does not offer it.
#[derive(Debug)]
pub enum Visual {
    Static,
    Animated(AnimationQueue),
}

/// A non-actor, interactable world entity owned by its location registry.
#[derive(Debug)]
pub struct SceneryObject {
    handle: SceneryHandle,
    name: String,
    kind: SceneryKind,
    script: Option<ScriptBinding>,
    visual: Visual,
    use_count: u32,
}

impl SceneryObject {
    pub fn from_record(handle: SceneryHandle, record: &SceneryRecord) -> Self {
        let kind = match record.kind {
            SceneryKindRecord::Door => SceneryKind::Door(DoorState::from_record(record)),
            SceneryKindRecord::Generic => SceneryKind::Generic,
        };
        let visual = match &record.animation {
            Some(animation) => {
                let mut queue = AnimationQueue::new(animation.frames, animation.frame_rate);
                // Direction flag matches persisted state so the first
                // transition plays the right way.
                queue.set_reverse(record.opened);
                Visual::Animated(queue)
            }
            None => Visual::Static,
        };
        let script = record.script.as_ref().map(|script| ScriptBinding {
            name: script.name.clone(),
            overrides: script.overrides,
        });

        SceneryObject {
            handle,
            name: record.name.clone(),
            kind,
            script,
            visual,
            use_count: 0,
        }
    }

    pub fn handle(&self) -> SceneryHandle {
        self.handle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subtype(&self) -> Subtype {
        match self.kind {
            SceneryKind::Door(_) => Subtype::Door,
            SceneryKind::Generic => Subtype::Generic,
        }
    }

    pub fn script(&self) -> Option<&ScriptBinding> {
        self.script.as_ref()
    }

    pub fn door(&self) -> Option<&DoorState> {
        match &self.kind {
            SceneryKind::Door(door) => Some(door),
            SceneryKind::Generic => None,
        }
    }

    pub fn door_mut(&mut self) -> Option<&mut DoorState> {
        match &mut self.kind {
            SceneryKind::Door(door) => Some(door),
            SceneryKind::Generic => None,
        }
    }

    /// Capability accessor: present only when the visual representation
    /// supports queued playback.
    pub fn animation_queue(&mut self) -> Option<&mut AnimationQueue> {
        match &mut self.visual {
            Visual::Animated(queue) => Some(queue),
            Visual::Static => None,
        }
    }

    pub fn animation_queue_ref(&self) -> Option<&AnimationQueue> {
        match &self.visual {
            Visual::Animated(queue) => Some(queue),
            Visual::Static => None,
        }
    }

    /// Single mutation point for a door's open/closed flag. Cascades the
    /// light-pass-through flag and, when the visual supports it, the queue's
    /// playback direction.
    pub fn set_opened(&mut self, value: bool) {
        let Some(door) = self.door_mut() else {
            return;
        };
        door.commit_opened(value);
        if let Some(queue) = self.animation_queue() {
            queue.set_reverse(value);
        }
    }

    /// Generic interaction bookkeeping owned by the scenery base, applied
    /// before any door-specific behavior.
    pub fn note_use(&mut self) {
        self.use_count += 1;
    }

    pub fn use_count(&self) -> u32 {
        self.use_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vault_world::{AnimationRecord, ScriptRecord};

    fn door_record(name: &str) -> SceneryRecord {
        SceneryRecord {
            name: name.to_string(),
            kind: SceneryKindRecord::Door,
            opened: false,
            locked: false,
            sound_cue: Some("3".to_string()),
            script: None,
            animation: Some(AnimationRecord {
                frames: 8,
                frame_rate: 10.0,
            }),
        }
    }

    #[test]
    fn set_opened_cascades_derived_flags_and_queue_direction() {
        let mut object = SceneryObject::from_record(1, &door_record("blast_door"));
        object.set_opened(true);

        let door = object.door().expect("door state");
        assert!(door.opened());
        assert!(door.can_walk_thru());
        assert!(door.can_light_thru());
        assert!(object.animation_queue_ref().expect("queue").reversed());

        object.set_opened(false);
        let door = object.door().expect("door state");
        assert!(!door.can_walk_thru());
        assert!(!door.can_light_thru());
        assert!(!object.animation_queue_ref().expect("queue").reversed());
    }

    #[test]
    fn set_locked_has_no_derived_effects() {
        let mut object = SceneryObject::from_record(1, &door_record("blast_door"));
        object.door_mut().expect("door state").set_locked(true);

        let door = object.door().expect("door state");
        assert!(door.locked());
        assert!(!door.opened());
        assert!(!door.can_light_thru());
    }

    #[test]
    fn persisted_opened_state_seeds_derived_flags_and_direction() {
        let mut record = door_record("blast_door");
        record.opened = true;
        let object = SceneryObject::from_record(1, &record);

        let door = object.door().expect("door state");
        assert!(door.opened());
        assert!(door.can_light_thru());
        assert!(object.animation_queue_ref().expect("queue").reversed());
    }

    #[test]
    fn record_without_animation_offers_no_queue_capability() {
        let mut record = door_record("cell_door");
        record.animation = None;
        let mut object = SceneryObject::from_record(2, &record);
        assert!(object.animation_queue().is_none());
        assert_eq!(object.subtype(), Subtype::Door);
    }

    #[test]
    fn generic_scenery_carries_script_but_no_door_state() {
        let record = SceneryRecord {
            name: "terminal".to_string(),
            kind: SceneryKindRecord::Generic,
            opened: false,
            locked: false,
            sound_cue: None,
            script: Some(ScriptRecord {
                name: "terminal_boot".to_string(),
                overrides: true,
            }),
            animation: None,
        };
        let mut object = SceneryObject::from_record(3, &record);

        assert_eq!(object.subtype(), Subtype::Generic);
        assert!(object.door().is_none());
        assert!(object.script().expect("script binding").overrides);

        // set_opened on a non-door is a defined no-op.
        object.set_opened(true);
        assert!(object.door().is_none());
    }
}
