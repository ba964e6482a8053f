//! Data model shared by the catalog, playback and manifest layers
//!
//! These structures are independent of where clips come from (static
//! manifest or hosted backend) and of how they are presented.

mod clip;
mod manifest;

pub use clip::{compare_names, format_bytes, humanize, Clip};
pub use manifest::{ClipRecord, Manifest};
