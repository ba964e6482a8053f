/// A user intent forwarded by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Stop playback and fetch the catalog again
    Reload,

    /// Change the search term
    Search(String),

    /// Toggle playback of a clip
    Play(String),

    /// Drop `source` onto `target`
    Reorder { source: String, target: String },

    Upload { file_name: String, bytes: Vec<u8> },

    Delete(String),

    Rename { clip_id: String, title: String },

    SignIn,

    SignOut,

    /// Resource `generation` of a clip reached its end
    PlaybackEnded { clip_id: String, generation: u64 },

    /// Resource `generation` of a clip reported an error
    PlaybackFailed {
        clip_id: String,
        generation: u64,
        reason: String,
    },
}
