//! Note data model.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// `strftime` pattern of a note key: 14 digits, year through second.
pub const KEY_FORMAT: &str = "%Y%m%d%H%M%S";

/// `strftime` pattern used when showing a note's time, e.g. `Jan 2, 2006 at 3:04 PM`.
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

/// A free-text annotation attached to a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub text: String,
}

impl Note {
    pub fn new(domain: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            text: text.into(),
        }
    }
}

/// Timestamp key of a note.
///
/// Keys are 14-digit local wall-clock timestamps, so lexicographic order is
/// chronological order. Two notes written in the same second share a key and
/// the later one replaces the earlier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteKey(String);

impl NoteKey {
    /// Build the key for a note written at `at`.
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self(at.format(KEY_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the key back into a timestamp, if it is well formed.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.0, KEY_FORMAT).ok()
    }

    /// Human-readable time, falling back to the raw key when it does not parse.
    pub fn display_time(&self) -> String {
        match self.to_datetime() {
            Some(at) => at.format(DISPLAY_FORMAT).to_string(),
            None => self.0.clone(),
        }
    }
}

impl From<&str> for NoteKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full note log, ordered by key.
pub type NoteMap = BTreeMap<NoteKey, Note>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_key_is_fourteen_digits() {
        let key = NoteKey::from_datetime(at(2024, 3, 7, 9, 5, 2));
        assert_eq!(key.as_str(), "20240307090502");
        assert_eq!(key.to_datetime(), Some(at(2024, 3, 7, 9, 5, 2)));
    }

    #[test]
    fn test_key_order_is_chronological() {
        let earlier = NoteKey::from_datetime(at(2023, 12, 31, 23, 59, 59));
        let later = NoteKey::from_datetime(at(2024, 1, 1, 0, 0, 0));
        assert!(earlier < later);
    }

    #[test]
    fn test_display_time() {
        assert_eq!(
            NoteKey::from("20060102150405").display_time(),
            "Jan 2, 2006 at 3:04 PM"
        );
        assert_eq!(
            NoteKey::from("20241115000000").display_time(),
            "Nov 15, 2024 at 12:00 AM"
        );
    }

    #[test]
    fn test_display_time_falls_back_to_raw_key() {
        assert_eq!(NoteKey::from("not-a-time").display_time(), "not-a-time");
    }

    #[test]
    fn test_note_json_shape() {
        let mut notes = NoteMap::new();
        notes.insert(
            NoteKey::from("20240101120000"),
            Note::new("example.com", "hello"),
        );
        let json = serde_json::to_string(&notes).unwrap();
        assert_eq!(
            json,
            r#"{"20240101120000":{"domain":"example.com","text":"hello"}}"#
        );
    }

    #[test]
    fn test_note_missing_fields_default() {
        let note: Note = serde_json::from_str(r#"{"domain":"a.com"}"#).unwrap();
        assert_eq!(note, Note::new("a.com", ""));
    }
}
