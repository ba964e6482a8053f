//! In-memory audio backend for unit tests

use super::backend::{AudioBackend, AudioHandle};
use crate::error::PlaybackError;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct HandleRecord {
    pub url: String,
    pub playing: bool,
    pub rewound: bool,
}

/// Records every handle it opens so tests can inspect them after the fact
#[derive(Debug, Default)]
pub struct FakeAudio {
    handles: Rc<RefCell<Vec<HandleRecord>>>,
    fail_open: HashSet<String>,
    refuse_start: HashSet<String>,
}

impl FakeAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_open(mut self, url: &str) -> Self {
        self.fail_open.insert(url.to_string());
        self
    }

    pub fn refusing_start(mut self, url: &str) -> Self {
        self.refuse_start.insert(url.to_string());
        self
    }

    pub fn handle(&self, index: usize) -> HandleRecord {
        self.handles.borrow()[index].clone()
    }

    pub fn playing_count(&self) -> usize {
        self.handles.borrow().iter().filter(|h| h.playing).count()
    }
}

pub struct FakeHandle {
    index: usize,
    refuse_start: bool,
    handles: Rc<RefCell<Vec<HandleRecord>>>,
}

impl AudioHandle for FakeHandle {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.refuse_start {
            return Err(PlaybackError::Start("unsupported format".to_string()));
        }
        let mut handles = self.handles.borrow_mut();
        handles[self.index].playing = true;
        handles[self.index].rewound = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.handles.borrow_mut()[self.index].playing = false;
    }

    fn rewind(&mut self) {
        self.handles.borrow_mut()[self.index].rewound = true;
    }

    fn is_playing(&self) -> bool {
        self.handles.borrow()[self.index].playing
    }
}

impl AudioBackend for FakeAudio {
    type Handle = FakeHandle;

    fn open(&mut self, url: &str) -> Result<FakeHandle, PlaybackError> {
        if self.fail_open.contains(url) {
            return Err(PlaybackError::Open {
                url: url.to_string(),
                reason: "unreachable".to_string(),
            });
        }

        let mut handles = self.handles.borrow_mut();
        handles.push(HandleRecord {
            url: url.to_string(),
            ..HandleRecord::default()
        });
        Ok(FakeHandle {
            index: handles.len() - 1,
            refuse_start: self.refuse_start.contains(url),
            handles: Rc::clone(&self.handles),
        })
    }
}
