//! Soundboard - clip catalog, playback and ordering core
//!
//! This library keeps one authoritative list of short audio clips, a
//! search-filtered view of it, a single "now playing" clip and a persisted
//! custom order. It also generates the `manifest.json` listing the static
//! board is served from.

pub mod account;
pub mod backend;
pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod manifest;
pub mod model;
pub mod order;
pub mod playback;

pub use board::{Intent, Soundboard};
pub use config::{BoardConfig, ReorderPolicy};
pub use error::SoundboardError;
