//! Reference data for the standard 88-key piano
//!
//! Key 1 is A0 (note index 21) and key 88 is C8 (note index 108).

use std::ops::RangeInclusive;

use crate::error::{NoteError, Result};
use crate::note::Note;

/// Piano key numbers, lowest key first
pub const KEY_RANGE: RangeInclusive<i64> = 1..=88;

/// Octaves spanned by the keyboard, rounded up
pub const OCTAVES: i64 = (88 + 11) / 12;

/// Note index of key 0, one below the lowest key
const KEY_OFFSET: i64 = 20;

const SPECIAL_NAMES: [(i64, &str); 8] = [
    (4, "Pedal C"),
    (16, "Deep C"),
    (40, "Middle C"),
    (49, "A440"),
    (52, "Tenor C"),
    (64, "Soprano C (High C)"),
    (76, "Double high C"),
    (88, "Eighth octave"),
];

/// Traditional name of a piano key, if it has one
pub fn special_name(key: i64) -> Option<&'static str> {
    SPECIAL_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

impl Note {
    pub fn from_piano_key(key: i64) -> Result<Note> {
        if !KEY_RANGE.contains(&key) {
            return Err(NoteError::PianoKeyOutOfRange(key));
        }
        Ok(Note::from(key + KEY_OFFSET))
    }

    /// Piano key number, `None` for notes off the keyboard
    pub fn piano_key(&self) -> Option<u8> {
        self.index()
            .checked_sub(KEY_OFFSET)
            .filter(|key| KEY_RANGE.contains(key))
            .and_then(|key| u8::try_from(key).ok())
    }

    pub fn special_name(&self) -> Option<&'static str> {
        self.piano_key().and_then(|key| special_name(key.into()))
    }
}
