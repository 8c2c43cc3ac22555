use serde::Serialize;

use crate::scenery::SceneryHandle;

/// Direction of an in-flight door transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Opening,
    Closing,
}

/// Tagged completion value carried by a queue while a transition is in
/// flight. Identifies the owning door by handle only; the runtime resolves
/// it back to the object when the completion is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub scenery: SceneryHandle,
    pub kind: TransitionKind,
}

/// Ordered playback driver for an entity's visual frames. Playback is
/// cooperative: `advance` is called once per event-loop turn and reports a
/// finished transition by handing back the single pending completion slot.
#[derive(Debug)]
pub struct AnimationQueue {
    frame_count: u32,
    frame_rate: f32,
    playing: bool,
    reversed: bool,
    elapsed: f32,
    pending: Option<PendingTransition>,
}

impl AnimationQueue {
    pub fn new(frame_count: u32, frame_rate: f32) -> Self {
        AnimationQueue {
            frame_count: frame_count.max(1),
            frame_rate,
            playing: false,
            reversed: false,
            elapsed: 0.0,
            pending: None,
        }
    }

    pub fn start(&mut self) {
        self.playing = true;
        self.elapsed = 0.0;
    }

    pub fn stop(&mut self) {
        self.playing = false;
        self.elapsed = 0.0;
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn set_reverse(&mut self, value: bool) {
        self.reversed = value;
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn duration(&self) -> f32 {
        self.frame_count as f32 / self.frame_rate
    }

    /// Arms the single completion slot. Any previously registered completion
    /// is replaced; callers guard against that with `pending()` first.
    pub fn register_completion(&mut self, pending: PendingTransition) {
        self.pending = Some(pending);
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn clear_completion(&mut self) -> Option<PendingTransition> {
        self.pending.take()
    }

    /// One event-loop turn of playback. Returns the registered completion
    /// the turn the transition finishes, clearing the slot so it cannot fire
    /// again on a later play.
    pub fn advance(&mut self, dt: f32) -> Option<PendingTransition> {
        if !self.playing {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed < self.duration() {
            return None;
        }
        match self.pending.take() {
            Some(completion) => Some(completion),
            None => {
                // Finished with nothing registered: settle on the last frame.
                self.playing = false;
                None
            }
        }
    }
}
