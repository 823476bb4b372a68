//! In-memory backend, mainly for tests and dry runs.

use std::cell::{Cell, RefCell};

use super::traits::NoteBackend;
use super::types::NoteMap;
use crate::error::{HapError, Result};

/// Note log held in memory, with switches to simulate storage faults.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    notes: RefCell<NoteMap>,
    fail_load: bool,
    fail_save: bool,
    saves: Cell<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: NoteMap) -> Self {
        Self {
            notes: RefCell::new(notes),
            ..Self::default()
        }
    }

    /// Make every `load` fail.
    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Make every `save` fail, leaving the stored log untouched.
    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    /// Copy of the currently stored log.
    pub fn snapshot(&self) -> NoteMap {
        self.notes.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl NoteBackend for MemoryBackend {
    fn load(&self) -> Result<NoteMap> {
        if self.fail_load {
            return Err(HapError::Storage("simulated read failure".to_string()));
        }
        Ok(self.notes.borrow().clone())
    }

    fn save(&self, notes: &NoteMap) -> Result<()> {
        if self.fail_save {
            return Err(HapError::Storage("simulated write failure".to_string()));
        }
        *self.notes.borrow_mut() = notes.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
