//! Playback layer
//!
//! Owns "which single clip, if any, is playing" through a trait-based audio
//! abstraction, so the same controller drives any host output.

mod backend;
mod controller;
mod events;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{AudioBackend, AudioHandle};
pub use controller::{PlaybackController, PlaybackState};
pub use events::PlaybackEvent;
