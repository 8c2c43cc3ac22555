use crate::animation::{PendingTransition, TransitionKind};
use crate::audio::{closing_cue_path, opening_cue_path};
use crate::scenery::SceneryObject;

/// What a use attempt resolved to, before the runtime applies side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    /// An attached script declared it overrides default behavior; scripted
    /// logic owns everything from here.
    Overridden { script: String },
    /// A transition was started on the queue; `cue` names the audio asset
    /// to dispatch, when the door carries a sound cue.
    Started {
        kind: TransitionKind,
        cue: Option<String>,
    },
    /// A completion is already registered; the interaction is ignored until
    /// the in-flight transition commits.
    Busy,
    /// Nothing to animate: not a door, or the visual representation has no
    /// queue capability. State only changes through a completed transition,
    /// so none happens here.
    Inert,
}

/// Override gate plus transition controller. Base interaction bookkeeping
/// has already run by the time this is called.
pub fn attempt_use(object: &mut SceneryObject) -> UseOutcome {
    if let Some(script) = object.script() {
        if script.overrides {
            return UseOutcome::Overridden {
                script: script.name.clone(),
            };
        }
    }

    let handle = object.handle();
    let Some(door) = object.door() else {
        return UseOutcome::Inert;
    };
    let opened = door.opened();
    let cue = door.sound_cue().map(|cue| {
        if opened {
            closing_cue_path(cue)
        } else {
            opening_cue_path(cue)
        }
    });

    let Some(queue) = object.animation_queue() else {
        return UseOutcome::Inert;
    };
    if queue.pending().is_some() {
        return UseOutcome::Busy;
    }

    let kind = if opened {
        TransitionKind::Closing
    } else {
        TransitionKind::Opening
    };
    queue.start();
    queue.register_completion(PendingTransition {
        scenery: handle,
        kind,
    });

    UseOutcome::Started { kind, cue }
}

/// Commits a finished transition on the owning object and re-arms the queue
/// for the opposite direction. Returns the committed opened value. Lighting
/// recompute is the runtime's job and must follow this commit.
pub fn apply_completion(object: &mut SceneryObject, kind: TransitionKind) -> bool {
    let opened = matches!(kind, TransitionKind::Opening);
    object.set_opened(opened);
    if let Some(queue) = object.animation_queue() {
        queue.clear_completion();
        queue.stop();
        queue.set_reverse(opened);
    }
    opened
}
