use super::merge::reconcile_order;
use super::source::CatalogSource;
use crate::account::User;
use crate::error::CatalogError;
use crate::model::Clip;
use std::collections::HashSet;

/// Outcome of a successful catalog load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of clips now in the catalog
    pub count: usize,

    /// Listing timestamp, when the source provided one
    pub generated_at: Option<String>,
}

/// Authoritative clip list plus the search-derived view
///
/// The filtered view is recomputed synchronously after every mutation, so
/// it is always consistent with the catalog and the current search term.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Clips in display order
    clips: Vec<Clip>,

    /// Normalized (trimmed, lowercase) search term
    search: String,

    /// Indices into `clips` matching `search`, in catalog order
    filtered: Vec<usize>,
}

impl CatalogState {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog with a fresh listing from `source`
    ///
    /// The listing is merged with `saved_order` before it is installed. On
    /// failure the catalog and filtered view are left empty and the error is
    /// returned for the caller to report.
    pub fn load<S: CatalogSource + ?Sized>(
        &mut self,
        source: &S,
        user: Option<&User>,
        saved_order: Option<&[String]>,
        asset_base: &str,
    ) -> Result<LoadReport, CatalogError> {
        let manifest = match source.fetch(user) {
            Ok(manifest) => manifest,
            Err(err) => {
                log::warn!("Catalog load failed: {}", err);
                self.clips.clear();
                self.refilter();
                return Err(err);
            }
        };

        let mut seen = HashSet::new();
        let fetched: Vec<Clip> = manifest
            .clips
            .into_iter()
            .filter_map(|record| record.into_clip(asset_base))
            .filter(|clip| {
                let fresh = seen.insert(clip.id.clone());
                if !fresh {
                    log::warn!("Dropping duplicate clip id: {}", clip.id);
                }
                fresh
            })
            .collect();

        self.clips = reconcile_order(fetched, saved_order.unwrap_or(&[]));
        self.refilter();

        log::info!("Catalog loaded: {} clip(s)", self.clips.len());
        Ok(LoadReport {
            count: self.clips.len(),
            generated_at: manifest.generated_at,
        })
    }

    /// Set the search term and return the number of matches
    pub fn set_search(&mut self, term: &str) -> usize {
        self.search = term.trim().to_lowercase();
        self.refilter();
        self.filtered.len()
    }

    /// Current normalized search term
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// All clips in display order
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    /// Clips matching the search term, in display order
    pub fn filtered(&self) -> impl Iterator<Item = &Clip> {
        self.filtered.iter().map(|&idx| &self.clips[idx])
    }

    /// Number of clips in the filtered view
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn get(&self, id: &str) -> Option<&Clip> {
        self.clips.iter().find(|clip| clip.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Ids in display order, as persisted to the order store
    pub fn ids(&self) -> Vec<String> {
        self.clips.iter().map(|clip| clip.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Append a newly created clip; refused when the id is already present
    pub fn insert(&mut self, clip: Clip) -> bool {
        if self.contains(&clip.id) {
            return false;
        }
        self.clips.push(clip);
        self.refilter();
        true
    }

    /// Remove a clip by id
    pub fn remove(&mut self, id: &str) -> Option<Clip> {
        let idx = self.position(id)?;
        let clip = self.clips.remove(idx);
        self.refilter();
        Some(clip)
    }

    /// Change a clip's title; returns false if the id is unknown
    pub fn rename(&mut self, id: &str, title: &str) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.clips[idx].title = title.to_string();
        self.refilter();
        true
    }

    /// Move `source_id` so it sits immediately before `target_id`
    ///
    /// No-op returning false if the ids are equal or either is missing.
    pub fn move_before(&mut self, source_id: &str, target_id: &str) -> bool {
        if source_id == target_id {
            return false;
        }
        let (Some(from), Some(_)) = (self.position(source_id), self.position(target_id)) else {
            return false;
        };

        let clip = self.clips.remove(from);
        // Target index is taken after removal so the clip always lands in front of it
        let to = self.position(target_id).unwrap_or(self.clips.len());
        self.clips.insert(to, clip);
        self.refilter();
        true
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.clips.iter().position(|clip| clip.id == id)
    }

    fn refilter(&mut self) {
        let term = self.search.as_str();
        self.filtered = self
            .clips
            .iter()
            .enumerate()
            .filter(|(_, clip)| clip.matches(term))
            .map(|(idx, _)| idx)
            .collect();
    }
}
