//! Per-domain note log.
//!
//! Notes are short annotations ("rotated after breach", "uses PIN not
//! password") keyed by the second they were written. The whole log lives in
//! a single JSON object and is rewritten in full whenever a note is added.

pub mod json_file;
pub mod memory;
pub mod store;
pub mod traits;
pub mod types;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use store::{AddedNote, NoteStore};
pub use traits::NoteBackend;
pub use types::{Note, NoteKey, NoteMap};
