use std::ops::RangeInclusive;

pub type Result<T> = std::result::Result<T, NoteError>;

/// Errors raised while building or operating on a [`Note`](crate::Note)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteError {
    #[error("Invalid argument type: expected {expected}, found {found}")]
    InvalidArgumentType { expected: &'static str, found: String },

    #[error("'{0}' is not a valid note")]
    InvalidNoteString(String),

    #[error("Octave {0} has no name")]
    OctaveOutOfRange(i64),

    #[error("Result {index} out of range {}..={}", .range.start(), .range.end())]
    ResultOutOfRange {
        index: i64,
        range: RangeInclusive<i64>,
    },

    #[error("Unsupported operand type: {0}, expected a note or an integer")]
    UnsupportedOperandType(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Piano key {0} out of range 1..=88")]
    PianoKeyOutOfRange(i64),
}

impl NoteError {
    pub fn invalid_argument(expected: &'static str, found: impl Into<String>) -> Self {
        NoteError::InvalidArgumentType {
            expected,
            found: found.into(),
        }
    }

    pub fn invalid_note(value: impl Into<String>) -> Self {
        NoteError::InvalidNoteString(value.into())
    }

    pub fn out_of_range(index: i64) -> Self {
        NoteError::ResultOutOfRange {
            index,
            range: crate::table::NOTE_RANGE,
        }
    }
}
