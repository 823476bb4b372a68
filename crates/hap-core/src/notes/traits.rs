//! Persistence interface for the note log.

use super::types::NoteMap;
use crate::error::Result;

/// Where the note log is read from and written to.
///
/// Backends report failures honestly; deciding to carry on regardless is
/// the [`NoteStore`](super::NoteStore)'s job.
pub trait NoteBackend {
    /// Read the full note log.
    ///
    /// A log that does not exist yet is an empty map, not an error.
    ///
    /// # Errors
    ///
    /// Returns `HapError::Storage` if the log cannot be read and
    /// `HapError::Format` if it is not a valid note mapping.
    fn load(&self) -> Result<NoteMap>;

    /// Replace the stored log with `notes`.
    ///
    /// # Errors
    ///
    /// Returns `HapError::Storage` if the log cannot be written.
    fn save(&self, notes: &NoteMap) -> Result<()>;
}
