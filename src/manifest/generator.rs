//! Build-time manifest generator (directory scan)

use super::{is_audio_file, sort_records, MANIFEST_FILE_NAME};
use crate::model::{ClipRecord, Manifest};
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scan `audio_dir` (one level deep) and build a manifest
///
/// The directory is created when missing, so a fresh checkout yields an
/// empty manifest instead of an error.
pub fn generate_manifest(audio_dir: &Path) -> Result<Manifest> {
    fs::create_dir_all(audio_dir)
        .with_context(|| format!("Failed to create audio directory {:?}", audio_dir))?;

    let mut clips = Vec::new();

    for entry in WalkDir::new(audio_dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read audio directory {:?}", audio_dir))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name == MANIFEST_FILE_NAME || !is_audio_file(&name) {
            log::debug!("Skipping {}", name);
            continue;
        }

        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to stat {:?}", entry.path()))?;
        clips.push(ClipRecord::for_file(name, Some(metadata.len())));
    }

    sort_records(&mut clips);

    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    Ok(Manifest::new(generated_at, clips))
}

/// Generate the manifest for `audio_dir` and write it
///
/// `output` defaults to `<audio_dir>/manifest.json`. Returns the path
/// written and the manifest.
pub fn write_manifest(audio_dir: &Path, output: Option<&Path>) -> Result<(PathBuf, Manifest)> {
    let manifest = generate_manifest(audio_dir)?;
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| audio_dir.join(MANIFEST_FILE_NAME));

    let json = manifest
        .to_json_pretty()
        .context("Failed to serialize manifest")?;
    fs::write(&path, json).with_context(|| format!("Failed to write manifest {:?}", path))?;

    log::info!(
        "Manifest updated with {} clip(s) at {:?}",
        manifest.clips.len(),
        path
    );
    Ok((path, manifest))
}
