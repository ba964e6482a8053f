//! Soundboard controller
//!
//! Explicit state container that replaces page-global state: the
//! presentation layer forwards `Intent`s and renders `BoardView`s.

mod intent;
mod soundboard;
pub mod status;
mod view;

pub use intent::Intent;
pub use soundboard::Soundboard;
pub use view::{BoardView, CardView, NOW_PLAYING_IDLE};
