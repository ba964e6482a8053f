//! Request-time manifest responder
//!
//! Synthesizes the manifest from the deployed asset keys, so newly deployed
//! clips show up without a checked-in manifest. Sizes are unknown here.

use super::{is_audio_file, sort_records, MANIFEST_FILE_NAME};
use crate::model::{ClipRecord, Manifest};
use chrono::{SecondsFormat, Utc};

/// Path the manifest is served from
pub const MANIFEST_ROUTE: &str = "/audio/manifest.json";

const AUDIO_PREFIX: &str = "audio/";

/// A synthesized manifest response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

/// Build a manifest from deployed asset keys such as `audio/boo.mp3`
pub fn manifest_from_asset_keys<I, S>(keys: I) -> Manifest
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut clips: Vec<ClipRecord> = keys
        .into_iter()
        .filter_map(|key| {
            let file = key.as_ref().strip_prefix(AUDIO_PREFIX)?;
            if file == MANIFEST_FILE_NAME || !is_audio_file(file) {
                return None;
            }
            Some(ClipRecord::for_file(file, None))
        })
        .collect();

    sort_records(&mut clips);

    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    Manifest::new(generated_at, clips)
}

/// Answer a request for `path`
///
/// Returns None for anything but the manifest route; the caller falls back
/// to static asset serving.
pub fn handle_manifest_request<I, S>(path: &str, keys: I) -> Option<serde_json::Result<ManifestResponse>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if path != MANIFEST_ROUTE {
        return None;
    }

    let body = manifest_from_asset_keys(keys).to_json_pretty();
    Some(body.map(|body| ManifestResponse {
        status: 200,
        headers: vec![
            ("content-type", "application/json; charset=utf-8"),
            ("cache-control", "no-cache"),
        ],
        body,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 6] = [
        "index.html",
        "audio/manifest.json",
        "audio/boo.mp3",
        "audio/(peanut) hi.wav",
        "audio/cover.png",
        "styles/app.css",
    ];

    #[test]
    fn test_manifest_from_asset_keys() {
        let manifest = manifest_from_asset_keys(KEYS);
        let files: Vec<&str> = manifest
            .clips
            .iter()
            .map(|c| c.file.as_deref().unwrap())
            .collect();
        assert_eq!(files, vec!["(peanut) hi.wav", "boo.mp3"]);
        assert!(manifest.clips.iter().all(|c| c.size_bytes.is_none()));
    }

    #[test]
    fn test_handle_manifest_route() {
        let response = handle_manifest_request(MANIFEST_ROUTE, KEYS).unwrap().unwrap();
        assert_eq!(response.status, 200);
        assert!(response.headers.contains(&("cache-control", "no-cache")));

        let manifest = Manifest::from_json(&response.body).unwrap();
        assert_eq!(manifest.clips.len(), 2);
    }

    #[test]
    fn test_other_routes_fall_through() {
        assert!(handle_manifest_request("/index.html", KEYS).is_none());
    }
}
