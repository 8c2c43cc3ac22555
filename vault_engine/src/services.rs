use std::fmt;
use std::rc::Rc;

use crate::audio::AudioSink;
use crate::lighting::LightingSink;

/// Collaborator seams handed to the location runtime at construction. Every
/// subsystem the door machine drives is reached through here; there is no
/// process-wide game singleton to consult.
#[derive(Default)]
pub struct WorldServices {
    audio: Option<Rc<dyn AudioSink>>,
    lighting: Option<Rc<dyn LightingSink>>,
}

impl WorldServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_audio(mut self, audio: Rc<dyn AudioSink>) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_lighting(mut self, lighting: Rc<dyn LightingSink>) -> Self {
        self.lighting = Some(lighting);
        self
    }

    pub fn play_sfx(&self, path: &str) {
        if let Some(audio) = self.audio.as_ref() {
            audio.play_sfx(path);
        }
    }

    pub fn recompute_lighting(&self) {
        if let Some(lighting) = self.lighting.as_ref() {
            lighting.recompute();
        }
    }
}

impl fmt::Debug for WorldServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldServices")
            .field("audio", &self.audio.is_some())
            .field("lighting", &self.lighting.is_some())
            .finish()
    }
}
