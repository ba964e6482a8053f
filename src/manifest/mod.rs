//! Manifest generation
//!
//! Produces the `manifest.json` listing consumed by the static catalog
//! source, either by scanning an audio directory at build time or from the
//! list of deployed asset keys at request time.

mod edge;
mod generator;

pub use edge::{handle_manifest_request, manifest_from_asset_keys, ManifestResponse, MANIFEST_ROUTE};
pub use generator::{generate_manifest, write_manifest};

use crate::model::{compare_names, ClipRecord};
use std::cmp::Ordering;

/// File name of the manifest inside the audio directory
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Extensions (lowercase, without dot) treated as playable clips
pub const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "ogg", "m4a", "flac", "aac"];

/// Whether `name` has one of the accepted audio extensions
pub fn is_audio_file(name: &str) -> bool {
    match name.rfind('.') {
        Some(idx) => {
            let ext = name[idx + 1..].to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Whether a file name carries the `(peanut)` marker (any case)
pub fn is_peanut(name: &str) -> bool {
    name.to_lowercase().contains("(peanut)")
}

/// Manifest ordering: peanut clips first, then by file name
///
/// Names compare like clip titles do (see `compare_names`).
pub fn compare_file_names(a: &str, b: &str) -> Ordering {
    is_peanut(b)
        .cmp(&is_peanut(a))
        .then_with(|| compare_names(a, b))
}

fn sort_records(records: &mut [ClipRecord]) {
    records.sort_by(|a, b| {
        compare_file_names(
            a.file.as_deref().unwrap_or_default(),
            b.file.as_deref().unwrap_or_default(),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_audio_file() {
        assert!(is_audio_file("boo.mp3"));
        assert!(is_audio_file("LOUD.WAV"));
        assert!(is_audio_file("a.b.flac"));
        assert!(!is_audio_file("notes.txt"));
        assert!(!is_audio_file("mp3"));
        assert!(!is_audio_file("manifest.json"));
    }

    #[test]
    fn test_peanut_sorts_first() {
        let mut names = vec!["b.mp3", "A.mp3", "zed (Peanut).wav", "(peanut) c.mp3"];
        names.sort_by(|a, b| compare_file_names(a, b));
        assert_eq!(names, vec!["(peanut) c.mp3", "zed (Peanut).wav", "A.mp3", "b.mp3"]);
    }
}
