//! Catalog sources
//!
//! A source yields the raw clip listing. The static board reads a
//! `manifest.json` (from disk or over HTTP); the hosted board queries its
//! document store through `ClipBackend`.

use crate::account::User;
use crate::error::CatalogError;
use crate::model::Manifest;
use std::path::PathBuf;

/// Clip listing provider trait
pub trait CatalogSource {
    /// Fetch the current listing
    ///
    /// `user` is the active session, if any. Anonymous sources ignore it;
    /// authenticated ones fail with `CatalogError::NotSignedIn` without it.
    fn fetch(&self, user: Option<&User>) -> Result<Manifest, CatalogError>;
}

/// Manifest read from the local filesystem
#[derive(Debug, Clone)]
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for ManifestFile {
    fn fetch(&self, _user: Option<&User>) -> Result<Manifest, CatalogError> {
        log::debug!("Reading manifest from {:?}", self.path);
        let text = std::fs::read_to_string(&self.path)?;
        Ok(Manifest::from_json(&text)?)
    }
}

/// Manifest fetched over HTTP, bypassing caches
#[derive(Debug, Clone)]
pub struct HttpManifest {
    url: String,
}

impl HttpManifest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogSource for HttpManifest {
    fn fetch(&self, _user: Option<&User>) -> Result<Manifest, CatalogError> {
        log::debug!("Fetching manifest from {}", self.url);
        let response = match ureq::get(&self.url).set("Cache-Control", "no-store").call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(CatalogError::Http(code)),
            Err(ureq::Error::Transport(err)) => {
                return Err(CatalogError::Transport(err.to_string()))
            }
        };

        let text = response.into_string()?;
        Ok(Manifest::from_json(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_file_reads_listing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(&path, r#"{"generatedAt":null,"clips":[{"file":"boo.mp3","sizeBytes":3}]}"#)
            .unwrap();

        let manifest = ManifestFile::new(&path).fetch(None).unwrap();
        assert_eq!(manifest.clips.len(), 1);
        assert_eq!(manifest.clips[0].file.as_deref(), Some("boo.mp3"));
    }

    #[test]
    fn test_manifest_file_missing_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = ManifestFile::new(dir.path().join("nope.json"))
            .fetch(None)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_manifest_file_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ManifestFile::new(&path).fetch(None).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed catalog"));
    }

    #[test]
    fn test_http_manifest_unreachable_is_transport_error() {
        let err = HttpManifest::new("http://127.0.0.1:9/audio/manifest.json")
            .fetch(None)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }
}
