//! Account gate
//!
//! Supplies the signed-in user (if any). Write-capable intents check
//! `current_user()` and are refused before any backend call when it is None.

mod gate;

pub use gate::{AccountGate, AnonymousGate, MemoryAccount, User};
