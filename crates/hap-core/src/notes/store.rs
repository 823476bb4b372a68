//! Note store: the in-memory log plus best-effort persistence.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use super::traits::NoteBackend;
use super::types::{Note, NoteKey, NoteMap};

/// Result of adding a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedNote {
    pub key: NoteKey,
    /// Whether the updated log reached the backend.
    pub persisted: bool,
}

/// Note log loaded once per invocation.
///
/// Storage failures never escape: a log that cannot be read is treated as
/// empty, and a failed write leaves the note in memory only. Both are
/// logged at `warn` level.
#[derive(Debug)]
pub struct NoteStore<B: NoteBackend> {
    backend: B,
    notes: NoteMap,
}

impl<B: NoteBackend> NoteStore<B> {
    /// Load the log from `backend`, starting empty if it cannot be read.
    pub fn load(backend: B) -> Self {
        let notes = match backend.load() {
            Ok(notes) => {
                debug!(count = notes.len(), "loaded notes");
                notes
            }
            Err(err) => {
                warn!(error = %err, "could not read notes; continuing with none");
                NoteMap::new()
            }
        };
        Self { backend, notes }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes whose domain equals `domain` exactly, oldest first.
    pub fn notes_for_domain<'a>(
        &'a self,
        domain: &'a str,
    ) -> impl Iterator<Item = (&'a NoteKey, &'a Note)> + 'a {
        self.notes
            .iter()
            .filter(move |(_, note)| note.domain == domain)
    }

    /// Notes for `domain` rendered as `<time> => <text>`, oldest first.
    pub fn list_for_domain(&self, domain: &str) -> Vec<String> {
        self.notes_for_domain(domain)
            .map(|(key, note)| format!("{} => {}", key.display_time(), note.text))
            .collect()
    }

    /// Add a note stamped with the current local time and persist the log.
    ///
    /// Returns `None` without touching anything when `text` is empty.
    pub fn add(&mut self, domain: &str, text: &str) -> Option<AddedNote> {
        self.add_at(domain, text, Local::now().naive_local())
    }

    /// Add a note stamped with `at` and persist the log.
    ///
    /// A note already stored under the same second is replaced.
    pub fn add_at(&mut self, domain: &str, text: &str, at: NaiveDateTime) -> Option<AddedNote> {
        if text.is_empty() {
            return None;
        }
        let key = NoteKey::from_datetime(at);
        if self
            .notes
            .insert(key.clone(), Note::new(domain, text))
            .is_some()
        {
            debug!(key = %key, "replaced note with the same timestamp");
        }
        let persisted = self.save();
        Some(AddedNote { key, persisted })
    }

    /// Write the full log to the backend. Returns whether the write succeeded.
    pub fn save(&self) -> bool {
        match self.backend.save(&self.notes) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "could not save notes");
                false
            }
        }
    }
}
