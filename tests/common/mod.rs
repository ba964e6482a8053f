//! Shared fakes for integration tests

#![allow(dead_code)]

use soundboard::account::User;
use soundboard::catalog::CatalogSource;
use soundboard::error::{CatalogError, PlaybackError};
use soundboard::model::{ClipRecord, Manifest};
use soundboard::playback::{AudioBackend, AudioHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// State of one opened resource
#[derive(Debug, Clone, Default)]
pub struct Resource {
    pub url: String,
    pub playing: bool,
    pub at_start: bool,
}

/// Audio backend that remembers every resource it hands out
#[derive(Debug, Default)]
pub struct RecordingAudio {
    resources: Rc<RefCell<Vec<Resource>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resources(&self) -> Vec<Resource> {
        self.resources.borrow().clone()
    }

    pub fn playing(&self) -> Vec<Resource> {
        self.resources().into_iter().filter(|r| r.playing).collect()
    }
}

pub struct RecordingHandle {
    index: usize,
    resources: Rc<RefCell<Vec<Resource>>>,
}

impl AudioHandle for RecordingHandle {
    fn play(&mut self) -> Result<(), PlaybackError> {
        let mut resources = self.resources.borrow_mut();
        resources[self.index].playing = true;
        resources[self.index].at_start = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.resources.borrow_mut()[self.index].playing = false;
    }

    fn rewind(&mut self) {
        self.resources.borrow_mut()[self.index].at_start = true;
    }

    fn is_playing(&self) -> bool {
        self.resources.borrow()[self.index].playing
    }
}

impl AudioBackend for RecordingAudio {
    type Handle = RecordingHandle;

    fn open(&mut self, url: &str) -> Result<RecordingHandle, PlaybackError> {
        let mut resources = self.resources.borrow_mut();
        resources.push(Resource {
            url: url.to_string(),
            playing: false,
            at_start: true,
        });
        Ok(RecordingHandle {
            index: resources.len() - 1,
            resources: Rc::clone(&self.resources),
        })
    }
}

/// Catalog source returning fixed `(id, title)` records, or a fixed failure
pub struct StaticListing {
    clips: Vec<(String, String)>,
    fail_with: Option<u16>,
}

impl StaticListing {
    pub fn new(clips: &[(&str, &str)]) -> Self {
        Self {
            clips: clips
                .iter()
                .map(|(id, title)| (id.to_string(), title.to_string()))
                .collect(),
            fail_with: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            clips: Vec::new(),
            fail_with: Some(status),
        }
    }
}

impl CatalogSource for StaticListing {
    fn fetch(&self, _user: Option<&User>) -> Result<Manifest, CatalogError> {
        if let Some(status) = self.fail_with {
            return Err(CatalogError::Http(status));
        }
        Ok(Manifest {
            generated_at: None,
            clips: self
                .clips
                .iter()
                .map(|(id, title)| ClipRecord {
                    id: Some(id.clone()),
                    title: Some(title.clone()),
                    ..ClipRecord::default()
                })
                .collect(),
        })
    }
}
