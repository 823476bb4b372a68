//! JSON file backend.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::traits::NoteBackend;
use super::types::NoteMap;
use crate::error::Result;
use crate::fs::write_atomic;

/// Note log stored as one JSON object in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NoteBackend for JsonFileBackend {
    fn load(&self) -> Result<NoteMap> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(NoteMap::new()),
            Err(err) => return Err(err.into()),
        };
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(NoteMap::new());
        }
        // `null` is what an empty log serialized as in older files.
        let notes: Option<NoteMap> = serde_json::from_slice(&data)?;
        Ok(notes.unwrap_or_default())
    }

    fn save(&self, notes: &NoteMap) -> Result<()> {
        let data = serde_json::to_vec(notes)?;
        write_atomic(&self.path, &data)?;
        Ok(())
    }
}
