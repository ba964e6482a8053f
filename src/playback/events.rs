//! Playback events
//!
//! Recorded on every controller transition and drained by the presentation
//! layer to restyle clip cards and the now-playing display.

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A clip started playing on resource `generation`
    Started {
        clip_id: String,
        title: String,
        generation: u64,
    },

    /// A clip was stopped by the user or superseded by another clip
    Stopped { clip_id: String },

    /// A clip reached its end
    Finished { clip_id: String },

    /// A clip could not start or errored mid-play
    Failed {
        clip_id: String,
        title: String,
        reason: String,
    },
}
