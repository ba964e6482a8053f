//! Saved clip order and the reorder engine

mod engine;
mod store;

pub use engine::ReorderEngine;
pub use store::{FileOrderStore, MemoryOrderStore, OrderStore};
