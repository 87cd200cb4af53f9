//! Inputs accepted when building notes and when applying operators
//!
//! Statically typed callers go through the `From` impls. Dynamically typed
//! data (JSON coming from a UI or a config) is checked once, in the
//! `TryFrom<serde_json::Value>` impls, and every later step works on the
//! resolved variant.

use serde_json::Value as JsonValue;

use crate::error::{NoteError, Result};
use crate::note::Note;
use crate::table;

/// Everything a [`Note`] can be built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteInput {
    /// Raw note index, not range checked
    Index(i64),
    /// Scientific notation such as "A4", "CD-1"
    Scientific(String),
    /// Pitch class name and octave, e.g. ("A", 4)
    NameOctave(String, i64),
    /// Copy of an existing note
    Note(Note),
}

impl NoteInput {
    /// Resolve to a note index
    pub fn resolve(&self) -> Result<i64> {
        match self {
            NoteInput::Index(index) => Ok(*index),
            NoteInput::Scientific(s) => crate::note::parse_index(s),
            NoteInput::NameOctave(name, octave) => name_octave_index(name, *octave),
            NoteInput::Note(note) => Ok(note.index()),
        }
    }
}

/// The name must be a pitch class on its own; it never contributes to the
/// octave
fn name_octave_index(name: &str, octave: i64) -> Result<i64> {
    let invalid = || NoteError::invalid_note(format!("{}{}", name, octave));
    let pitch_class = table::pitch_class_index(name).ok_or_else(invalid)?;
    octave
        .checked_add(1)
        .and_then(|o| o.checked_mul(table::SEMITONES))
        .and_then(|base| base.checked_add(pitch_class as i64))
        .ok_or_else(invalid)
}

impl From<i64> for NoteInput {
    fn from(index: i64) -> Self {
        NoteInput::Index(index)
    }
}

impl From<i32> for NoteInput {
    fn from(index: i32) -> Self {
        NoteInput::Index(index.into())
    }
}

impl From<u8> for NoteInput {
    fn from(index: u8) -> Self {
        NoteInput::Index(index.into())
    }
}

impl From<&str> for NoteInput {
    fn from(s: &str) -> Self {
        NoteInput::Scientific(s.to_string())
    }
}

impl From<String> for NoteInput {
    fn from(s: String) -> Self {
        NoteInput::Scientific(s)
    }
}

impl<S: Into<String>> From<(S, i64)> for NoteInput {
    fn from((name, octave): (S, i64)) -> Self {
        NoteInput::NameOctave(name.into(), octave)
    }
}

impl From<Note> for NoteInput {
    fn from(note: Note) -> Self {
        NoteInput::Note(note)
    }
}

impl TryFrom<JsonValue> for NoteInput {
    type Error = NoteError;

    fn try_from(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Number(n) => n
                .as_i64()
                .map(NoteInput::Index)
                .ok_or_else(|| NoteError::invalid_argument("integer", format!("number {}", n))),
            JsonValue::String(s) => Ok(NoteInput::Scientific(s)),
            JsonValue::Array(items) => match items.as_slice() {
                [JsonValue::String(name), octave] => match octave.as_i64() {
                    Some(octave) => Ok(NoteInput::NameOctave(name.clone(), octave)),
                    None => Err(NoteError::invalid_argument(
                        "integer octave",
                        json_type_name(octave),
                    )),
                },
                _ => Err(NoteError::invalid_argument(
                    "(name, octave) pair",
                    format!("array of {} items", items.len()),
                )),
            },
            other => Err(NoteError::invalid_argument(
                "integer, string or (name, octave) pair",
                json_type_name(&other),
            )),
        }
    }
}

/// Right-hand side of an arithmetic or comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Note(Note),
    Int(i64),
}

impl Operand {
    pub fn value(self) -> i64 {
        match self {
            Operand::Note(note) => note.index(),
            Operand::Int(n) => n,
        }
    }
}

impl From<Note> for Operand {
    fn from(note: Note) -> Self {
        Operand::Note(note)
    }
}

impl From<&Note> for Operand {
    fn from(note: &Note) -> Self {
        Operand::Note(*note)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Int(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Int(n.into())
    }
}

impl From<u8> for Operand {
    fn from(n: u8) -> Self {
        Operand::Int(n.into())
    }
}

impl TryFrom<JsonValue> for Operand {
    type Error = NoteError;

    /// Integers become [`Operand::Int`], serialized notes (`{"index": n}`,
    /// no other keys) become [`Operand::Note`]
    fn try_from(value: JsonValue) -> Result<Self> {
        if let Some(n) = value.as_i64() {
            return Ok(Operand::Int(n));
        }
        if value.is_object() {
            if let Ok(note) = serde_json::from_value::<Note>(value.clone()) {
                return Ok(Operand::Note(note));
            }
        }
        Err(NoteError::UnsupportedOperandType(
            json_type_name(&value).to_string(),
        ))
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(n) if n.is_i64() || n.is_u64() => "integer",
        JsonValue::Number(_) => "float",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_note_input() {
        assert_eq!(NoteInput::try_from(json!(60)), Ok(NoteInput::Index(60)));
        assert_eq!(
            NoteInput::try_from(json!("A4")),
            Ok(NoteInput::Scientific("A4".into()))
        );
        assert_eq!(
            NoteInput::try_from(json!(["CD", -1])),
            Ok(NoteInput::NameOctave("CD".into(), -1))
        );
    }

    #[test]
    fn test_json_note_input_rejects_bad_types() {
        let pair = NoteInput::try_from(json!(["A", "4"]));
        assert!(matches!(pair, Err(NoteError::InvalidArgumentType { .. })));

        let pair = NoteInput::try_from(json!(["A", 4.5]));
        assert!(matches!(pair, Err(NoteError::InvalidArgumentType { .. })));

        for value in [json!(4.5), json!(null), json!(true), json!({"a": 1}), json!([1, 2, 3])] {
            assert!(matches!(
                NoteInput::try_from(value),
                Err(NoteError::InvalidArgumentType { .. })
            ));
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(NoteInput::from(5).resolve(), Ok(5));
        assert_eq!(NoteInput::from("A1").resolve(), Ok(33));
        assert_eq!(NoteInput::from(("A", 1)).resolve(), Ok(33));
        assert_eq!(NoteInput::from(("CD", -1)).resolve(), Ok(1));
        assert_eq!(NoteInput::from(("gA", 3)).resolve(), Ok(56));
    }

    #[test]
    fn test_pair_name_is_checked_alone() {
        assert_eq!(
            NoteInput::from(("A-", 1)).resolve(),
            Err(NoteError::InvalidNoteString("A-1".into()))
        );
        assert_eq!(
            NoteInput::from(("A1", 2)).resolve(),
            Err(NoteError::InvalidNoteString("A12".into()))
        );
        assert!(NoteInput::from(("", 4)).resolve().is_err());
        assert!(NoteInput::from(("C", i64::MAX)).resolve().is_err());
    }

    #[test]
    fn test_pair_matches_scientific_string() {
        for name in table::PITCH_CLASS_NAMES {
            for octave in -3..=10 {
                let pair = NoteInput::from((name, octave)).resolve();
                let text = NoteInput::from(format!("{}{}", name, octave)).resolve();
                assert_eq!(pair, text, "{}{}", name, octave);
            }
        }
    }

    #[test]
    fn test_json_operand() {
        assert_eq!(Operand::try_from(json!(7)), Ok(Operand::Int(7)));
        assert_eq!(
            Operand::try_from(json!({"index": 60})),
            Ok(Operand::Note(Note::from(60)))
        );
        assert_eq!(
            Operand::try_from(json!("C4")),
            Err(NoteError::UnsupportedOperandType("string".into()))
        );
        assert_eq!(
            Operand::try_from(json!({"index": 60, "foo": 1})),
            Err(NoteError::UnsupportedOperandType("object".into()))
        );
        assert_eq!(
            Operand::try_from(json!(1.5)),
            Err(NoteError::UnsupportedOperandType("float".into()))
        );
    }
}
