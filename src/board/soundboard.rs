//! Soundboard - the single state container behind the page
//!
//! Every user intent is routed through one of the methods below. Each
//! method catches its own failures, turns them into a status message and a
//! safe state, and records the error for inspection; nothing propagates
//! past this boundary.

use super::intent::Intent;
use super::status;
use super::view::{BoardView, CardView, NOW_PLAYING_IDLE};
use crate::account::{AccountGate, AnonymousGate, User};
use crate::backend::ClipSource;
use crate::catalog::CatalogState;
use crate::config::{BoardConfig, ReorderPolicy};
use crate::error::{BackendError, PlaybackError, SoundboardError};
use crate::model::Clip;
use crate::order::{OrderStore, ReorderEngine};
use crate::playback::{AudioBackend, PlaybackController, PlaybackEvent, PlaybackState};

/// Soundboard state and intent handling
pub struct Soundboard<B: AudioBackend, S: OrderStore> {
    config: BoardConfig,
    source: ClipSource,
    account: Box<dyn AccountGate>,
    catalog: CatalogState,
    reorder: ReorderEngine<S>,
    player: PlaybackController<B>,
    status: String,
    last_error: Option<SoundboardError>,
}

impl<B: AudioBackend, S: OrderStore> Soundboard<B, S> {
    /// Create an anonymous board; call `load` to fetch the catalog
    pub fn new(config: BoardConfig, source: ClipSource, order_store: S, audio: B) -> Self {
        Self {
            config,
            source,
            account: Box::new(AnonymousGate),
            catalog: CatalogState::new(),
            reorder: ReorderEngine::new(order_store),
            player: PlaybackController::new(audio),
            status: String::new(),
            last_error: None,
        }
    }

    /// Attach an account gate
    pub fn with_account(mut self, account: Box<dyn AccountGate>) -> Self {
        self.account = account;
        self
    }

    /// Route a user intent to its handler
    pub fn dispatch(&mut self, intent: Intent) {
        log::debug!("Intent: {:?}", intent);
        match intent {
            Intent::Reload => self.reload(),
            Intent::Search(term) => {
                self.set_search(&term);
            }
            Intent::Play(clip_id) => self.toggle_play(&clip_id),
            Intent::Reorder { source, target } => {
                self.move_clip(&source, &target);
            }
            Intent::Upload { file_name, bytes } => self.upload(&file_name, &bytes),
            Intent::Delete(clip_id) => self.delete(&clip_id),
            Intent::Rename { clip_id, title } => self.rename(&clip_id, &title),
            Intent::SignIn => self.sign_in(),
            Intent::SignOut => self.sign_out(),
            Intent::PlaybackEnded { clip_id, generation } => self.playback_ended(&clip_id, generation),
            Intent::PlaybackFailed {
                clip_id,
                generation,
                reason,
            } => self.playback_failed(&clip_id, generation, &reason),
        }
    }

    // ===== Catalog =====

    /// Fetch the catalog and merge it with the saved order
    ///
    /// On failure the catalog is left empty and the status carries the
    /// reason. A clip that is playing but no longer listed is stopped.
    pub fn load(&mut self) {
        self.status = status::LOADING.to_string();
        let saved = self.reorder.saved_order();
        let user = self.account.current_user();

        match self
            .catalog
            .load(&self.source, user, saved.as_deref(), &self.config.asset_base)
        {
            Ok(report) => {
                self.status = status::loaded(&report);
                self.last_error = None;
            }
            Err(e) => {
                self.status = status::load_failed(&e);
                self.last_error = Some(e.into());
            }
        }

        let orphaned = self
            .player
            .currently_playing_id()
            .is_some_and(|id| !self.catalog.contains(id));
        if orphaned {
            self.player.stop();
        }
    }

    /// Stop playback, then load again
    pub fn reload(&mut self) {
        self.player.stop();
        self.load();
    }

    /// Set the search term; returns the number of matching clips
    pub fn set_search(&mut self, term: &str) -> usize {
        let count = self.catalog.set_search(term);
        self.status = status::matches(count);
        count
    }

    // ===== Playback =====

    /// Play a clip from the catalog, or stop it if it is already playing
    ///
    /// The clip does not need to be in the filtered view.
    pub fn toggle_play(&mut self, clip_id: &str) {
        let Some(clip) = self.catalog.get(clip_id).cloned() else {
            self.fail(SoundboardError::UnknownClip(clip_id.to_string()), "Clip not found.".to_string());
            return;
        };

        match self.player.toggle_play(&clip) {
            Ok(_) => self.last_error = None,
            Err(source) => self.fail(
                SoundboardError::Playback {
                    title: clip.title.clone(),
                    source,
                },
                status::play_failed(&clip.title),
            ),
        }
    }

    /// The host reports that resource `generation` of a clip finished
    pub fn playback_ended(&mut self, clip_id: &str, generation: u64) {
        self.player.on_ended(clip_id, generation);
    }

    /// The host reports that resource `generation` of a clip errored
    pub fn playback_failed(&mut self, clip_id: &str, generation: u64, reason: &str) {
        if let Some(title) = self.player.on_error(clip_id, generation, reason) {
            let message = status::play_failed(&title);
            self.fail(
                SoundboardError::Playback {
                    title,
                    source: PlaybackError::Resource(reason.to_string()),
                },
                message,
            );
        }
    }

    /// Stop whatever is playing
    pub fn stop(&mut self) {
        self.player.stop();
    }

    // ===== Reordering =====

    /// Move `source_id` in front of `target_id` and persist the order
    ///
    /// Returns whether the catalog changed.
    pub fn move_clip(&mut self, source_id: &str, target_id: &str) -> bool {
        if self.config.reorder_policy == ReorderPolicy::RequireSignIn
            && self.account.current_user().is_none()
        {
            self.refuse("reorder clips");
            return false;
        }

        self.reorder.move_clip(&mut self.catalog, source_id, target_id)
    }

    // ===== Writes =====

    /// Upload a new clip and append it to the catalog
    pub fn upload(&mut self, file_name: &str, bytes: &[u8]) {
        let Some(user) = self.signed_in_user("upload clips") else {
            return;
        };
        let Some(writer) = self.source.writer() else {
            self.read_only();
            return;
        };

        let record = match writer.upload(&user, file_name, bytes) {
            Ok(record) => record,
            Err(e) => {
                let message = format!("Could not upload {} ({}).", file_name, e);
                self.fail(e.into(), message);
                return;
            }
        };

        let Some(clip) = record.into_clip(&self.config.asset_base) else {
            self.fail(
                BackendError::Rejected(format!("no id returned for {}", file_name)).into(),
                format!("Could not upload {}.", file_name),
            );
            return;
        };

        let title = clip.title.clone();
        if self.catalog.insert(clip) {
            self.reorder.persist(&self.catalog);
        }
        self.status = format!("Uploaded {}.", title);
        self.last_error = None;
    }

    /// Delete a clip, stopping it first if it is playing
    pub fn delete(&mut self, clip_id: &str) {
        let Some(user) = self.signed_in_user("delete clips") else {
            return;
        };
        let Some(title) = self.known_title(clip_id) else {
            return;
        };
        let Some(writer) = self.source.writer() else {
            self.read_only();
            return;
        };

        if let Err(e) = writer.delete(&user, clip_id) {
            let message = format!("Could not delete {} ({}).", title, e);
            self.fail(e.into(), message);
            return;
        }

        if self.player.is_playing(clip_id) {
            self.player.stop();
        }
        self.catalog.remove(clip_id);
        self.reorder.persist(&self.catalog);
        self.status = format!("Deleted {}.", title);
        self.last_error = None;
    }

    /// Give a clip a new title
    pub fn rename(&mut self, clip_id: &str, title: &str) {
        let Some(user) = self.signed_in_user("rename clips") else {
            return;
        };
        let Some(old_title) = self.known_title(clip_id) else {
            return;
        };
        let Some(writer) = self.source.writer() else {
            self.read_only();
            return;
        };

        let title = title.trim();
        if let Err(e) = writer.rename(&user, clip_id, title) {
            let message = format!("Could not rename {} ({}).", old_title, e);
            self.fail(e.into(), message);
            return;
        }

        self.catalog.rename(clip_id, title);
        self.player.retitle(clip_id, title);
        self.status = format!("Renamed to {}.", title);
        self.last_error = None;
    }

    // ===== Account =====

    /// Sign in, then reload the catalog for the new session
    pub fn sign_in(&mut self) {
        match self.account.sign_in() {
            Ok(Some(user)) => {
                log::info!("Signed in as {}", user.name);
                self.load();
            }
            Ok(None) => {
                self.status = "Sign-in cancelled.".to_string();
            }
            Err(e) => {
                let message = format!("Could not sign in ({}).", e);
                self.fail(e.into(), message);
            }
        }
    }

    /// Stop playback, sign out and reload
    pub fn sign_out(&mut self) {
        self.player.stop();
        if let Err(e) = self.account.sign_out() {
            let message = format!("Could not sign out ({}).", e);
            self.fail(e.into(), message);
            return;
        }
        log::info!("Signed out");
        self.load();
    }

    // ===== Accessors =====

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Error recorded by the most recent failing operation, if it has not
    /// since been cleared by a successful one
    pub fn last_error(&self) -> Option<&SoundboardError> {
        self.last_error.as_ref()
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Clip> {
        self.catalog.filtered()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.player.state()
    }

    pub fn currently_playing_id(&self) -> Option<&str> {
        self.player.currently_playing_id()
    }

    /// Generation the host must quote when reporting on the playing resource
    pub fn playback_generation(&self) -> Option<u64> {
        self.player.current_generation()
    }

    /// Now-playing display text
    pub fn now_playing(&self) -> &str {
        self.player.now_playing().unwrap_or(NOW_PLAYING_IDLE)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.account.current_user()
    }

    pub fn saved_order(&self) -> Option<Vec<String>> {
        self.reorder.saved_order()
    }

    pub fn audio(&self) -> &B {
        self.player.backend()
    }

    /// Playback events since the last drain
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.player.drain_events()
    }

    /// Cards for the filtered view
    pub fn cards(&self) -> Vec<CardView> {
        let playing = self.player.currently_playing_id();
        self.catalog
            .filtered()
            .map(|clip| CardView::new(clip, playing))
            .collect()
    }

    /// Full render model
    pub fn view(&self) -> BoardView {
        BoardView {
            cards: self.cards(),
            now_playing: self.now_playing().to_string(),
            status: self.status.clone(),
            signed_in_as: self.current_user().map(|u| u.name.clone()),
        }
    }

    // ===== Helpers =====

    fn fail(&mut self, err: SoundboardError, message: String) {
        log::warn!("{}", err);
        self.status = message;
        self.last_error = Some(err);
    }

    fn refuse(&mut self, action: &str) {
        self.fail(
            SoundboardError::WriteRefused(action.to_string()),
            status::write_refused(action),
        );
    }

    fn read_only(&mut self) {
        self.fail(
            BackendError::Rejected("this board is read-only".to_string()).into(),
            "This board is read-only.".to_string(),
        );
    }

    fn signed_in_user(&mut self, action: &str) -> Option<User> {
        let user = self.account.current_user().cloned();
        if user.is_none() {
            self.refuse(action);
        }
        user
    }

    fn known_title(&mut self, clip_id: &str) -> Option<String> {
        let title = self.catalog.get(clip_id).map(|clip| clip.title.clone());
        if title.is_none() {
            self.fail(
                SoundboardError::UnknownClip(clip_id.to_string()),
                "Clip not found.".to_string(),
            );
        }
        title
    }
}
