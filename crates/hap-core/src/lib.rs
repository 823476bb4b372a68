//! # Hap Core
//!
//! Core library for Hap - a deterministic, per-domain password generator
//! with a small local note log.
//!
//! Nothing here touches the terminal; the CLI crate owns all prompting.
//!
//! ## Architecture
//!
//! - **password**: HMAC-SHA1 + base64 password derivation
//! - **notes**: Note model, persistence backends, and the note store
//! - **fs**: Atomic file replacement used by the JSON backend
//! - **error**: Error type shared by the modules above

pub mod error;
pub mod fs;
pub mod notes;
pub mod password;

pub use error::{HapError, Result};
pub use notes::{JsonFileBackend, MemoryBackend, Note, NoteBackend, NoteKey, NoteStore};
pub use password::{derive_password, DEFAULT_LENGTH, MAX_LENGTH};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
