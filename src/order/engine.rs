//! Reorder engine
//!
//! Applies drag-sourced moves to the catalog and keeps the saved order in
//! step. Persistence is best-effort: a failed write is logged and the
//! in-memory order stands.

use super::store::OrderStore;
use crate::catalog::CatalogState;

/// Owns the order store and every write to it
pub struct ReorderEngine<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> ReorderEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved order, read at catalog load time
    pub fn saved_order(&self) -> Option<Vec<String>> {
        self.store.get()
    }

    /// Move `source_id` to sit immediately before `target_id`
    ///
    /// Returns false (catalog and saved order untouched) if the ids are equal
    /// or either is absent. On success the new order is persisted.
    pub fn move_clip(&mut self, catalog: &mut CatalogState, source_id: &str, target_id: &str) -> bool {
        if !catalog.move_before(source_id, target_id) {
            log::debug!("Ignoring move of {:?} before {:?}", source_id, target_id);
            return false;
        }

        log::debug!("Moved {} before {}", source_id, target_id);
        self.persist(catalog);
        true
    }

    /// Write the catalog's current id order; failures are swallowed
    ///
    /// Returns whether the write succeeded.
    pub fn persist(&mut self, catalog: &CatalogState) -> bool {
        match self.store.set(&catalog.ids()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not save clip order: {}", e);
                false
            }
        }
    }
}
