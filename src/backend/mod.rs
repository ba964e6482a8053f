//! Hosted clip backend
//!
//! Write-capable counterpart of the static manifest: a document store that
//! lists, uploads, renames and deletes clips on behalf of a signed-in user.

mod memory;

pub use memory::MemoryBackend;

use crate::account::User;
use crate::catalog::CatalogSource;
use crate::error::{BackendError, CatalogError};
use crate::model::{ClipRecord, Manifest};

/// Document-store backend trait
///
/// Listing goes through `CatalogSource::fetch`, which requires a session.
/// Callers check the account gate before any write, so implementations may
/// assume `user` is the authenticated identity.
pub trait ClipBackend: CatalogSource {
    /// Store a new audio file, returning its descriptor
    fn upload(&mut self, user: &User, file_name: &str, bytes: &[u8]) -> Result<ClipRecord, BackendError>;

    /// Delete a stored clip
    fn delete(&mut self, user: &User, id: &str) -> Result<(), BackendError>;

    /// Change a stored clip's title
    fn rename(&mut self, user: &User, id: &str, title: &str) -> Result<(), BackendError>;
}

/// Where the soundboard gets its clips from
pub enum ClipSource {
    /// Anonymous, read-only listing (static manifest)
    ReadOnly(Box<dyn CatalogSource>),

    /// Authenticated document store supporting writes
    Hosted(Box<dyn ClipBackend>),
}

impl ClipSource {
    /// Write access, when the source supports it
    pub fn writer(&mut self) -> Option<&mut dyn ClipBackend> {
        match self {
            ClipSource::ReadOnly(_) => None,
            ClipSource::Hosted(backend) => Some(backend.as_mut()),
        }
    }
}

impl CatalogSource for ClipSource {
    fn fetch(&self, user: Option<&User>) -> Result<Manifest, CatalogError> {
        match self {
            ClipSource::ReadOnly(source) => source.fetch(user),
            ClipSource::Hosted(backend) => backend.fetch(user),
        }
    }
}
