use anyhow::{Context, Result};
use clap::Parser;
use soundboard::catalog::{CatalogSource, CatalogState, ManifestFile};
use soundboard::manifest::{write_manifest, MANIFEST_FILE_NAME};
use soundboard::BoardConfig;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "soundboard")]
#[command(about = "Generate the soundboard clip manifest", long_about = None)]
struct Args {
    /// Directory holding the audio clips
    #[arg(short = 'd', long, default_value = "audio")]
    dir: String,

    /// Manifest output path (default: <dir>/manifest.json)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Only check an existing manifest (don't regenerate it)
    #[arg(long)]
    check: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let audio_dir = PathBuf::from(shellexpand::tilde(&args.dir).as_ref());
    let manifest_path = args
        .output
        .clone()
        .unwrap_or_else(|| audio_dir.join(MANIFEST_FILE_NAME));

    if args.check {
        log::info!("Checking manifest at {:?}", manifest_path);
        return check_manifest(&manifest_path);
    }

    write_manifest(&audio_dir, Some(manifest_path.as_path())).context("Failed to generate manifest")?;
    Ok(())
}

/// Load a manifest through the catalog pipeline the board uses
fn check_manifest(path: &Path) -> Result<()> {
    let source = ManifestFile::new(path);
    let config = BoardConfig::default();

    let manifest = source
        .fetch(None)
        .with_context(|| format!("Failed to read manifest {:?}", path))?;
    let listed = manifest.clips.len();

    let mut catalog = CatalogState::new();
    let report = catalog
        .load(&source, None, None, &config.asset_base)
        .with_context(|| format!("Failed to load manifest {:?}", path))?;

    if report.count != listed {
        log::warn!("{} of {} entries were unusable or duplicated", listed - report.count, listed);
    }
    for clip in catalog.clips() {
        log::debug!("{} -> {} ({})", clip.title, clip.url, clip.meta_line());
    }

    log::info!(
        "✅ Manifest OK: {} clip(s), generated {}",
        report.count,
        report.generated_at.as_deref().unwrap_or("at an unknown time")
    );
    Ok(())
}
