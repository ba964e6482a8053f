//! Platform-agnostic audio resource traits
//!
//! The controller never decodes audio itself. A host (browser bridge,
//! desktop output, test fake) opens a resource per clip URL and reports
//! end-of-playback and errors back through the controller.

use crate::error::PlaybackError;

/// One playable resource bound to a clip URL
pub trait AudioHandle {
    /// Begin (or resume) playback
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pause without releasing the resource
    fn pause(&mut self);

    /// Seek back to the start
    fn rewind(&mut self);

    /// Whether the resource is currently producing sound
    fn is_playing(&self) -> bool;
}

/// Factory for audio handles
pub trait AudioBackend {
    type Handle: AudioHandle;

    /// Acquire a fresh resource for `url`
    fn open(&mut self, url: &str) -> Result<Self::Handle, PlaybackError>;
}
