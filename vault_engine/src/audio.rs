use std::{cell::RefCell, fmt, rc::Rc};

use serde::Serialize;

/// Minimal adapter for routing cue playback to the platform mixer.
pub trait AudioSink {
    fn play_sfx(&self, _path: &str) {}
}

impl fmt::Debug for dyn AudioSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AudioSink")
    }
}

/// Asset path for a door's opening cue. The naming convention is fixed by
/// the sound archive layout.
pub fn opening_cue_path(cue: &str) -> String {
    format!("sound/sfx/sodoors{cue}.acm")
}

/// Asset path for a door's closing cue.
pub fn closing_cue_path(cue: &str) -> String {
    format!("sound/sfx/scdoors{cue}.acm")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AudioEvent {
    SfxPlay { path: String },
}

/// Sink that records every cue request, used by the CLI's audio log and by
/// tests asserting on dispatched assets.
#[derive(Clone, Default)]
pub struct RecordingAudioSink {
    events: Rc<RefCell<Vec<AudioEvent>>>,
}

impl RecordingAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AudioEvent> {
        self.events.borrow().clone()
    }

    #[allow(dead_code)]
    pub fn paths(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .map(|event| match event {
                AudioEvent::SfxPlay { path } => path.clone(),
            })
            .collect()
    }
}

impl AudioSink for RecordingAudioSink {
    fn play_sfx(&self, path: &str) {
        self.events.borrow_mut().push(AudioEvent::SfxPlay {
            path: path.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_paths_follow_archive_convention() {
        assert_eq!(opening_cue_path("3"), "sound/sfx/sodoors3.acm");
        assert_eq!(closing_cue_path("3"), "sound/sfx/scdoors3.acm");
    }

    #[test]
    fn recording_sink_tracks_cue_requests() {
        let sink = RecordingAudioSink::new();
        sink.play_sfx("sound/sfx/sodoors1.acm");
        sink.play_sfx("sound/sfx/scdoors1.acm");

        assert_eq!(
            sink.events(),
            vec![
                AudioEvent::SfxPlay {
                    path: "sound/sfx/sodoors1.acm".to_string(),
                },
                AudioEvent::SfxPlay {
                    path: "sound/sfx/scdoors1.acm".to_string(),
                },
            ]
        );
    }
}
