//! Catalog state
//!
//! Owns the authoritative clip list, the search term and the filtered view,
//! and reconciles fetched listings with the user's saved order.

mod merge;
mod source;
mod state;

pub use merge::{ids_of, reconcile_order};
pub use source::{CatalogSource, HttpManifest, ManifestFile};
pub use state::{CatalogState, LoadReport};
