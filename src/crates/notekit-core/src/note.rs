use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{NoteError, Result};
use crate::input::NoteInput;
use crate::table::{self, NOTE_RANGE, SEMITONES};

lazy_static! {
    static ref NOTE_REGEX: Regex = Regex::new(&format!(
        r"(?i)^({})(-?)([0-9]+)$",
        table::pitch_class_alternation()
    ))
    .expect("note name regex is valid");
}

/// Piano key colour of a pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyColor {
    Black,
    White,
}

impl fmt::Display for KeyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyColor::Black => write!(f, "black"),
            KeyColor::White => write!(f, "white"),
        }
    }
}

/// A musical note identified by its index, the number of semitones above
/// C in octave -1 (index 60 is C4, index 69 is A4)
///
/// Every other property is derived from the index. The index is not range
/// checked on construction; arithmetic results are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    index: i64,
}

impl Note {
    /// Build a note from an index, a scientific string, a (name, octave)
    /// pair or another note
    ///
    /// # Examples
    /// ```
    /// use notekit_core::Note;
    ///
    /// assert_eq!(Note::new("A4").unwrap().index(), 69);
    /// assert_eq!(Note::new(("CD", 1)).unwrap().scientific_name(), "C#1/D♭1");
    /// assert_eq!(Note::new(60).unwrap().base_name(), "C4");
    /// ```
    pub fn new(input: impl Into<NoteInput>) -> Result<Self> {
        let index = input.into().resolve()?;
        Ok(Note { index })
    }

    /// Build a note from a dynamically typed value
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Note::new(NoteInput::try_from(value)?)
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    /// Whether the index lies in the valid 0..=127 note range
    pub fn in_range(&self) -> bool {
        NOTE_RANGE.contains(&self.index)
    }

    /// Scientific octave, -1 for the lowest C
    pub fn octave(&self) -> i64 {
        self.index.div_euclid(SEMITONES) - 1
    }

    /// MIDI octave numbering, which starts at -5
    pub fn midi_octave(&self) -> i64 {
        self.index.div_euclid(SEMITONES) - 5
    }

    /// Pitch class name, e.g. "C" or "CD"
    pub fn pitch_class(&self) -> &'static str {
        table::pitch_class_name(self.index)
    }

    pub fn is_black_key(&self) -> bool {
        table::is_black_key(self.pitch_class())
    }

    pub fn is_white_key(&self) -> bool {
        !self.is_black_key()
    }

    pub fn key_color(&self) -> KeyColor {
        if self.is_black_key() {
            KeyColor::Black
        } else {
            KeyColor::White
        }
    }

    /// `<pitch class><octave>`, the form accepted by [`Note::from_str`]
    pub fn base_name(&self) -> String {
        format!("{}{}", self.pitch_class(), self.octave())
    }

    pub fn octave_label(&self) -> Result<&'static str> {
        let octave = self.octave();
        table::octave_label(octave).ok_or(NoteError::OctaveOutOfRange(octave))
    }

    /// Scientific pitch name: "A4" for naturals, "G#4/A♭4" for black keys
    pub fn scientific_name(&self) -> String {
        let name = self.pitch_class();
        let octave = self.octave();
        let mut letters = name.chars();
        match (self.is_black_key(), letters.next(), letters.next()) {
            (true, Some(sharp), Some(flat)) => {
                format!("{}#{}/{}♭{}", sharp, octave, flat, octave)
            }
            _ => format!("{}{}", name, octave),
        }
    }

    /// `<index>: <base name> / <scientific name>`
    pub fn describe(&self) -> String {
        format!("{}: {} / {}", self.index, self.base_name(), self.scientific_name())
    }

    /// All notes from `from` to `to`, both included
    pub fn range(from: Note, to: Note) -> impl Iterator<Item = Note> {
        (from.index..=to.index).map(|index| Note { index })
    }
}

/// Parse scientific notation ("A1", "a-1", "CD4") into a note index
pub(crate) fn parse_index(value: &str) -> Result<i64> {
    let caps = match NOTE_REGEX.captures(value) {
        Some(caps) => caps,
        None => {
            log::debug!("rejected note string {:?}", value);
            return Err(NoteError::invalid_note(value));
        }
    };

    let name = &caps[1];
    let pitch_class = table::pitch_class_index(name).ok_or_else(|| NoteError::invalid_note(value))?;
    let magnitude: i64 = caps[3]
        .parse()
        .map_err(|_| NoteError::invalid_note(value))?;
    let octave = if caps[2].is_empty() { magnitude } else { -magnitude };

    let index = octave
        .checked_add(1)
        .and_then(|o| o.checked_mul(SEMITONES))
        .and_then(|base| base.checked_add(pitch_class as i64))
        .ok_or_else(|| NoteError::invalid_note(value))?;

    log::debug!("parsed note {:?} as index {}", value, index);
    Ok(index)
}

impl FromStr for Note {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Note {
            index: parse_index(s)?,
        })
    }
}

impl From<i64> for Note {
    fn from(index: i64) -> Self {
        Note { index }
    }
}

impl From<i32> for Note {
    fn from(index: i32) -> Self {
        Note {
            index: index.into(),
        }
    }
}

impl From<u8> for Note {
    fn from(index: u8) -> Self {
        Note {
            index: index.into(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scientific_name())
    }
}
