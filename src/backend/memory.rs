use super::ClipBackend;
use crate::account::User;
use crate::catalog::CatalogSource;
use crate::error::{BackendError, CatalogError};
use crate::manifest::is_audio_file;
use crate::model::{humanize, ClipRecord, Manifest};

/// Stored clip document
#[derive(Debug, Clone)]
struct Document {
    id: String,
    file: String,
    title: String,
    size: u64,
    owner: String,
}

/// In-process document store
///
/// Lists clips to any signed-in user; only a clip's uploader may rename or
/// delete it.
#[derive(Debug)]
pub struct MemoryBackend {
    endpoint: String,
    documents: Vec<Document>,
    next_seq: u64,
}

impl MemoryBackend {
    /// Empty store whose file URLs live under `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            documents: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn file_url(&self, id: &str) -> String {
        format!("{}/storage/files/{}/view", self.endpoint, id)
    }

    fn record(&self, doc: &Document) -> ClipRecord {
        ClipRecord {
            id: Some(doc.id.clone()),
            file: Some(doc.file.clone()),
            title: Some(doc.title.clone()),
            size_bytes: Some(doc.size),
            url: Some(self.file_url(&doc.id)),
        }
    }

    fn owned_mut(&mut self, user: &User, id: &str) -> Result<&mut Document, BackendError> {
        let doc = self
            .documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| BackendError::NotFound(id.to_string()))?;
        if doc.owner != user.id {
            return Err(BackendError::Rejected(format!(
                "{} does not own {}",
                user.name, id
            )));
        }
        Ok(doc)
    }
}

impl CatalogSource for MemoryBackend {
    fn fetch(&self, user: Option<&User>) -> Result<Manifest, CatalogError> {
        if user.is_none() {
            return Err(CatalogError::NotSignedIn);
        }
        Ok(Manifest {
            generated_at: None,
            clips: self.documents.iter().map(|doc| self.record(doc)).collect(),
        })
    }
}

impl ClipBackend for MemoryBackend {
    fn upload(&mut self, user: &User, file_name: &str, bytes: &[u8]) -> Result<ClipRecord, BackendError> {
        if !is_audio_file(file_name) {
            return Err(BackendError::UnsupportedFile(file_name.to_string()));
        }
        if bytes.is_empty() {
            return Err(BackendError::Rejected(format!("{} is empty", file_name)));
        }

        let seed = format!("{}:{}:{}", user.id, file_name, self.next_seq);
        self.next_seq += 1;
        let digest = format!("{:x}", md5::compute(seed.as_bytes()));
        let id = digest[..20].to_string();

        let doc = Document {
            id,
            file: file_name.to_string(),
            title: humanize(file_name),
            size: bytes.len() as u64,
            owner: user.id.clone(),
        };
        log::info!("Stored {} as {}", doc.file, doc.id);

        let record = self.record(&doc);
        self.documents.push(doc);
        Ok(record)
    }

    fn delete(&mut self, user: &User, id: &str) -> Result<(), BackendError> {
        self.owned_mut(user, id)?;
        self.documents.retain(|doc| doc.id != id);
        Ok(())
    }

    fn rename(&mut self, user: &User, id: &str, title: &str) -> Result<(), BackendError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BackendError::Rejected("title cannot be empty".to_string()));
        }
        self.owned_mut(user, id)?.title = title.to_string();
        Ok(())
    }
}
