use std::collections::BTreeMap;

use vault_world::LocationFile;

use crate::animation::{PendingTransition, TransitionKind};
use crate::door::{self, UseOutcome};
use crate::scenery::{SceneryHandle, SceneryObject};
use crate::services::WorldServices;

/// Single-threaded, cooperative location host. Interactions register intent
/// and return immediately; all state-changing work happens inside a later
/// `advance_frame`, the event-loop turn that harvests finished transitions
/// and dispatches their completions on the same call stack.
#[derive(Debug)]
pub struct LocationRuntime {
    name: String,
    scenery: BTreeMap<SceneryHandle, SceneryObject>,
    by_name: BTreeMap<String, SceneryHandle>,
    services: WorldServices,
    events: Vec<String>,
    frame: u32,
    light_recomputes: u32,
}

impl LocationRuntime {
    pub fn from_file(location: &LocationFile, services: WorldServices) -> Self {
        let mut scenery = BTreeMap::new();
        let mut by_name = BTreeMap::new();
        for (index, record) in location.scenery.iter().enumerate() {
            let handle = index as SceneryHandle + 1;
            by_name.insert(record.name.clone(), handle);
            scenery.insert(handle, SceneryObject::from_record(handle, record));
        }

        LocationRuntime {
            name: location.name.clone(),
            scenery,
            by_name,
            services,
            events: Vec::new(),
            frame: 0,
            light_recomputes: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle_for(&self, name: &str) -> Option<SceneryHandle> {
        self.by_name.get(name).copied()
    }

    #[allow(dead_code)]
    pub fn scenery(&self, handle: SceneryHandle) -> Option<&SceneryObject> {
        self.scenery.get(&handle)
    }

    pub fn scenery_objects(&self) -> impl Iterator<Item = &SceneryObject> {
        self.scenery.values()
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn light_recomputes(&self) -> u32 {
        self.light_recomputes
    }

    /// An actor's use attempt. Base bookkeeping always applies; everything
    /// else branches through the override gate and transition controller.
    pub fn use_scenery(&mut self, handle: SceneryHandle) {
        let Some(object) = self.scenery.get_mut(&handle) else {
            self.events.push(format!("object.use.unknown {handle}"));
            return;
        };

        object.note_use();
        let name = object.name().to_string();
        self.events.push(format!("object.use {name}"));

        match door::attempt_use(object) {
            UseOutcome::Overridden { script } => {
                self.events.push(format!("script.override {name} <= {script}"));
            }
            UseOutcome::Started { kind, cue } => {
                self.events.push(format!("door.{} {}", kind_label(kind), name));
                if let Some(path) = cue {
                    self.services.play_sfx(&path);
                    self.events.push(format!("sfx.play {path}"));
                }
            }
            UseOutcome::Busy => {
                self.events.push(format!("door.busy {name} transition pending"));
            }
            UseOutcome::Inert => {}
        }
    }

    /// One turn of the event loop: advance every queue, then dispatch the
    /// completions harvested this turn. Each queue's pending slot is taken
    /// during harvest, so a completion can never fire twice.
    pub fn advance_frame(&mut self, dt: f32) {
        self.frame += 1;

        let mut finished: Vec<PendingTransition> = Vec::new();
        for object in self.scenery.values_mut() {
            if let Some(queue) = object.animation_queue() {
                if let Some(completion) = queue.advance(dt) {
                    finished.push(completion);
                }
            }
        }

        for completion in finished {
            self.complete_transition(completion);
        }
    }

    /// Completion handler: commit the state, then have lighting re-read the
    /// fresh pass-through flags, then record the new state.
    fn complete_transition(&mut self, completion: PendingTransition) {
        let Some(object) = self.scenery.get_mut(&completion.scenery) else {
            return;
        };
        let opened = door::apply_completion(object, completion.kind);
        let name = object.name().to_string();

        self.light_recomputes += 1;
        self.services.recompute_lighting();
        self.events.push(format!("light.recompute {}", self.name));
        self.events.push(format!("door.state {name} opened={opened}"));
    }
}

fn kind_label(kind: TransitionKind) -> &'static str {
    match kind {
        TransitionKind::Opening => "opening",
        TransitionKind::Closing => "closing",
    }
}
