//! Playback controller - single-clip state machine
//!
//! At most one resource is ever playing: every start is preceded by a
//! synchronous stop (pause + rewind) of whatever was playing before.
//!
//! Each opened resource gets a generation number. Host notifications carry
//! it back, so a late event from a superseded resource never touches a newer
//! playback of the same clip.

use super::backend::{AudioBackend, AudioHandle};
use super::events::PlaybackEvent;
use crate::error::PlaybackError;
use crate::model::Clip;

/// Controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing { clip_id: String },
}

/// The clip currently holding the audio resource
struct Current<H> {
    clip_id: String,
    title: String,
    generation: u64,
    handle: H,
}

/// Exclusive owner of the playback resource
pub struct PlaybackController<B: AudioBackend> {
    backend: B,
    current: Option<Current<B::Handle>>,
    last_generation: u64,
    pending_events: Vec<PlaybackEvent>,
}

impl<B: AudioBackend> PlaybackController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
            last_generation: 0,
            pending_events: Vec::new(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        match &self.current {
            Some(current) => PlaybackState::Playing {
                clip_id: current.clip_id.clone(),
            },
            None => PlaybackState::Idle,
        }
    }

    /// Id of the clip in the Playing state, if any
    pub fn currently_playing_id(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.clip_id.as_str())
    }

    /// Title for the now-playing display
    pub fn now_playing(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.title.as_str())
    }

    /// Generation of the resource currently playing
    pub fn current_generation(&self) -> Option<u64> {
        self.current.as_ref().map(|c| c.generation)
    }

    pub fn is_playing(&self, clip_id: &str) -> bool {
        self.currently_playing_id() == Some(clip_id)
    }

    fn is_current(&self, clip_id: &str, generation: u64) -> bool {
        self.current
            .as_ref()
            .is_some_and(|c| c.clip_id == clip_id && c.generation == generation)
    }

    /// Play `clip`, or stop it if it is the one already playing
    ///
    /// Starting a clip first stops the previous one. If the new resource
    /// cannot be opened or started the controller ends Idle and the error is
    /// returned; there is no retry.
    pub fn toggle_play(&mut self, clip: &Clip) -> Result<PlaybackState, PlaybackError> {
        if self.is_playing(&clip.id) {
            self.stop();
            return Ok(PlaybackState::Idle);
        }

        self.stop();

        let mut handle = match self.backend.open(&clip.url) {
            Ok(handle) => handle,
            Err(e) => {
                self.emit_failed(clip, &e);
                return Err(e);
            }
        };

        if let Err(e) = handle.play() {
            silence(&mut handle);
            self.emit_failed(clip, &e);
            return Err(e);
        }

        self.last_generation += 1;
        let generation = self.last_generation;
        log::debug!("Playing {} ({}) as #{}", clip.id, clip.url, generation);
        self.current = Some(Current {
            clip_id: clip.id.clone(),
            title: clip.title.clone(),
            generation,
            handle,
        });
        self.pending_events.push(PlaybackEvent::Started {
            clip_id: clip.id.clone(),
            title: clip.title.clone(),
            generation,
        });

        Ok(self.state())
    }

    /// Stop whatever is playing, rewinding it to the start
    ///
    /// Returns the id of the clip that was stopped.
    pub fn stop(&mut self) -> Option<String> {
        let mut current = self.current.take()?;
        silence(&mut current.handle);

        log::debug!("Stopped {}", current.clip_id);
        self.pending_events.push(PlaybackEvent::Stopped {
            clip_id: current.clip_id.clone(),
        });
        Some(current.clip_id)
    }

    /// Resource `generation` of `clip_id` reached its end
    ///
    /// Returns false when the notification is stale (that resource is no
    /// longer the current one).
    pub fn on_ended(&mut self, clip_id: &str, generation: u64) -> bool {
        if !self.is_current(clip_id, generation) {
            log::debug!("Ignoring stale end-of-playback for {} #{}", clip_id, generation);
            return false;
        }

        if let Some(mut current) = self.current.take() {
            current.handle.rewind();
        }
        self.pending_events.push(PlaybackEvent::Finished {
            clip_id: clip_id.to_string(),
        });
        true
    }

    /// Resource `generation` of `clip_id` reported an error
    ///
    /// Returns the failing clip's title, or None when the notification is
    /// stale.
    pub fn on_error(&mut self, clip_id: &str, generation: u64, reason: &str) -> Option<String> {
        if !self.is_current(clip_id, generation) {
            log::debug!("Ignoring stale playback error for {} #{}: {}", clip_id, generation, reason);
            return None;
        }

        let mut current = self.current.take()?;
        silence(&mut current.handle);

        log::warn!("Playback of {} failed: {}", current.title, reason);
        self.pending_events.push(PlaybackEvent::Failed {
            clip_id: current.clip_id,
            title: current.title.clone(),
            reason: reason.to_string(),
        });
        Some(current.title)
    }

    /// Update the now-playing title after a rename
    pub fn retitle(&mut self, clip_id: &str, title: &str) {
        if let Some(current) = self.current.as_mut().filter(|c| c.clip_id == clip_id) {
            current.title = title.to_string();
        }
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn emit_failed(&mut self, clip: &Clip, err: &PlaybackError) {
        log::warn!("Could not play {}: {}", clip.title, err);
        self.pending_events.push(PlaybackEvent::Failed {
            clip_id: clip.id.clone(),
            title: clip.title.clone(),
            reason: err.to_string(),
        });
    }
}

/// Pause and rewind a resource
fn silence<H: AudioHandle>(handle: &mut H) {
    handle.pause();
    handle.rewind();
    debug_assert!(!handle.is_playing(), "resource still playing after pause");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::testing::FakeAudio;

    fn clip(id: &str, title: &str) -> Clip {
        Clip {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("audio/{}.mp3", id),
            file: None,
            size_bytes: None,
        }
    }

    #[test]
    fn test_toggle_starts_and_stops() {
        let mut controller = PlaybackController::new(FakeAudio::new());
        let x = clip("x", "X");

        let state = controller.toggle_play(&x).unwrap();
        assert_eq!(state, PlaybackState::Playing { clip_id: "x".to_string() });
        assert_eq!(controller.now_playing(), Some("X"));

        let state = controller.toggle_play(&x).unwrap();
        assert_eq!(state, PlaybackState::Idle);
        assert_eq!(controller.now_playing(), None);
        assert_eq!(controller.backend().playing_count(), 0);
        assert!(controller.backend().handle(0).rewound);
    }

    #[test]
    fn test_switching_stops_previous_first() {
        let mut controller = PlaybackController::new(FakeAudio::new());

        controller.toggle_play(&clip("x", "X")).unwrap();
        controller.toggle_play(&clip("y", "Y")).unwrap();

        assert_eq!(controller.currently_playing_id(), Some("y"));
        let audio = controller.backend();
        assert_eq!(audio.playing_count(), 1);
        assert!(!audio.handle(0).playing);
        assert!(audio.handle(0).rewound);
        assert!(audio.handle(1).playing);
        assert_eq!(audio.handle(1).url, "audio/y.mp3");

        assert_eq!(
            controller.drain_events(),
            vec![
                PlaybackEvent::Started { clip_id: "x".into(), title: "X".into(), generation: 1 },
                PlaybackEvent::Stopped { clip_id: "x".into() },
                PlaybackEvent::Started { clip_id: "y".into(), title: "Y".into(), generation: 2 },
            ]
        );
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn test_at_most_one_playing_after_many_toggles() {
        let mut controller = PlaybackController::new(FakeAudio::new());
        let clips = [clip("a", "A"), clip("b", "B"), clip("c", "C")];

        for i in [0, 1, 1, 2, 0, 0, 2, 1] {
            controller.toggle_play(&clips[i]).unwrap();
            assert!(controller.backend().playing_count() <= 1);
        }
        assert_eq!(controller.currently_playing_id(), Some("b"));
    }

    #[test]
    fn test_natural_end_returns_to_idle() {
        let mut controller = PlaybackController::new(FakeAudio::new());
        controller.toggle_play(&clip("x", "X")).unwrap();
        let generation = controller.current_generation().unwrap();

        assert!(!controller.on_ended("other", generation));
        assert!(controller.on_ended("x", generation));
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(!controller.on_ended("x", generation));
    }

    #[test]
    fn test_error_mid_play_reports_title() {
        let mut controller = PlaybackController::new(FakeAudio::new());
        controller.toggle_play(&clip("x", "Air Horn")).unwrap();
        let generation = controller.current_generation().unwrap();

        assert_eq!(
            controller.on_error("x", generation, "decode failed"),
            Some("Air Horn".to_string())
        );
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(!controller.backend().handle(0).playing);
        assert_eq!(controller.on_error("x", generation, "again"), None);
    }

    #[test]
    fn test_replayed_clip_ignores_superseded_resource() {
        let mut controller = PlaybackController::new(FakeAudio::new());
        let x = clip("x", "X");

        controller.toggle_play(&x).unwrap();
        let first = controller.current_generation().unwrap();
        controller.stop();
        controller.toggle_play(&x).unwrap();
        let second = controller.current_generation().unwrap();
        assert_ne!(first, second);

        assert_eq!(controller.on_error("x", first, "late decode error"), None);
        assert!(!controller.on_ended("x", first));
        assert_eq!(controller.currently_playing_id(), Some("x"));
        assert!(controller.backend().handle(1).playing);

        assert!(controller.on_ended("x", second));
        assert_eq!(controller.current_generation(), None);
    }

    #[test]
    fn test_open_failure_leaves_idle() {
        let mut controller = PlaybackController::new(FakeAudio::new().failing_open("audio/bad.mp3"));
        controller.toggle_play(&clip("x", "X")).unwrap();

        let err = controller.toggle_play(&clip("bad", "Bad")).unwrap_err();
        assert!(matches!(err, PlaybackError::Open { .. }));
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert_eq!(controller.backend().playing_count(), 0);
    }

    #[test]
    fn test_start_failure_leaves_idle() {
        let mut controller = PlaybackController::new(FakeAudio::new().refusing_start("audio/mute.mp3"));

        let err = controller.toggle_play(&clip("mute", "Mute")).unwrap_err();
        assert!(matches!(err, PlaybackError::Start(_)));
        assert_eq!(controller.currently_playing_id(), None);
        assert!(matches!(
            controller.drain_events().last(),
            Some(PlaybackEvent::Failed { clip_id, .. }) if clip_id == "mute"
        ));
    }
}
