//! # Domain Model: Date Keys and Day Entries
//!
//! A [`DateKey`] is a plain (year, month, day) triple. The store performs no
//! calendar-validity checking on it: day 31 of a 30-day month is accepted
//! and stored as-is. Whether a date exists in the real calendar is the
//! shell's concern.
//!
//! ## The canonical key string
//!
//! Keys serialize as `"{year}-{month}-{day}"` with no zero padding
//! (`"2024-3-7"`). That exact shape is the on-disk map key, so
//! `Display`/`FromStr` here define the file format.
//!
//! ## Legacy entry values
//!
//! Older data files stored a bare string where the `{choice, note}` record
//! now lives. [`DayEntry`] deserializes through an untagged representation
//! enum and normalizes immediately, so the rest of the crate only ever sees
//! the structured shape:
//!
//! - `"Turtle"` → `{ choice: "Turtle", note: "" }`
//! - `{ "choice": "Turtle" }` → `{ choice: "Turtle", note: "" }`

use crate::error::DaymarkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar date as the user typed it. No validity checking beyond
/// integer parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = DaymarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad_key = || DaymarkError::Store(format!("Invalid date key (expected Y-M-D): {}", s));

        let mut parts = s.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) => (y, m, d),
            _ => return Err(bad_key()),
        };

        Ok(DateKey {
            year: year.trim().parse().map_err(|_| bad_key())?,
            month: month.trim().parse().map_err(|_| bad_key())?,
            day: day.trim().parse().map_err(|_| bad_key())?,
        })
    }
}

// Keys serialize as their canonical string so the whole map can be fed to
// serde_json directly.
impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// What the user attached to a day. Both fields may be empty; a fully
/// blank entry is still a valid stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub choice: String,
    pub note: String,
}

impl DayEntry {
    pub fn new(choice: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            choice: choice.into(),
            note: note.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.choice.is_empty() && self.note.is_empty()
    }
}

// The two shapes an entry value may take on disk. Saves always write the
// structured form; `Bare` exists for files written by old versions.
#[derive(Deserialize)]
#[serde(untagged)]
enum DayEntryRepr {
    Full {
        #[serde(default)]
        choice: String,
        #[serde(default)]
        note: String,
    },
    Bare(String),
}

impl<'de> Deserialize<'de> for DayEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match DayEntryRepr::deserialize(deserializer)? {
            DayEntryRepr::Full { choice, note } => DayEntry { choice, note },
            DayEntryRepr::Bare(choice) => DayEntry {
                choice,
                note: String::new(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display_no_padding() {
        let key = DateKey::new(2024, 3, 7);
        assert_eq!(key.to_string(), "2024-3-7");
    }

    #[test]
    fn test_key_parse_roundtrip() {
        let key: DateKey = "2024-3-7".parse().unwrap();
        assert_eq!(key, DateKey::new(2024, 3, 7));
        assert_eq!(key.to_string().parse::<DateKey>().unwrap(), key);
    }

    #[test]
    fn test_key_parse_rejects_garbage() {
        assert!("2024-3".parse::<DateKey>().is_err());
        assert!("2024-3-7-1".parse::<DateKey>().is_err());
        assert!("march-3-7".parse::<DateKey>().is_err());
        assert!("".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_key_serializes_as_map_key() {
        let mut map = std::collections::HashMap::new();
        map.insert(DateKey::new(2024, 3, 7), DayEntry::new("Turtle", ""));
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("\"2024-3-7\""));
    }

    #[test]
    fn test_entry_roundtrip() {
        let entry = DayEntry::new("Butter Pecan", "order early");
        let json = serde_json::to_string(&entry).unwrap();
        let loaded: DayEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, entry);
    }

    #[test]
    fn test_legacy_bare_string_upgrades() {
        let loaded: DayEntry = serde_json::from_str("\"Turtle\"").unwrap();
        assert_eq!(loaded, DayEntry::new("Turtle", ""));
    }

    #[test]
    fn test_entry_missing_fields_default_empty() {
        let loaded: DayEntry = serde_json::from_str(r#"{"choice": "Turtle"}"#).unwrap();
        assert_eq!(loaded, DayEntry::new("Turtle", ""));

        let loaded: DayEntry = serde_json::from_str("{}").unwrap();
        assert!(loaded.is_blank());
    }

    #[test]
    fn test_entry_unicode_roundtrip() {
        let entry = DayEntry::new("Georgia Peach 🍑", "zum Geburtstag — früh da sein");
        let json = serde_json::to_string(&entry).unwrap();
        let loaded: DayEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, entry);
    }

    #[test]
    fn test_blank_entry_is_valid() {
        let entry = DayEntry::new("", "");
        assert!(entry.is_blank());
        let json = serde_json::to_string(&entry).unwrap();
        let loaded: DayEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, entry);
    }
}
