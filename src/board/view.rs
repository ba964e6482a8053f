//! Render model for the presentation layer
//!
//! Cards are rebuilt from the filtered view and the single current clip id
//! on every render, so at most one card can ever show as playing.

use crate::model::Clip;

/// Now-playing text shown while idle
pub const NOW_PLAYING_IDLE: &str = "—";

/// One rendered clip card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub clip_id: String,
    pub title: String,
    pub meta: String,
    pub playing: bool,
}

impl CardView {
    pub fn new(clip: &Clip, currently_playing: Option<&str>) -> Self {
        Self {
            clip_id: clip.id.clone(),
            title: clip.title.clone(),
            meta: clip.meta_line(),
            playing: currently_playing == Some(clip.id.as_str()),
        }
    }

    /// Label for the card's play button
    pub fn button_label(&self) -> &'static str {
        if self.playing {
            "Pause"
        } else {
            "Play"
        }
    }
}

/// Whole-board render model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub cards: Vec<CardView>,
    pub now_playing: String,
    pub status: String,
    pub signed_in_as: Option<String>,
}

impl BoardView {
    /// Whether the empty-state placeholder should be shown
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
