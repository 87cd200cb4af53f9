//! Musical note values for notekit
//!
//! This crate models a single note as an index: the number of semitones
//! above C in octave -1, the same numbering MIDI uses. Names, octaves, key
//! colours and scientific notation are all derived from that index.
//!
//! # Examples
//!
//! ```
//! use notekit_core::Note;
//!
//! let a = Note::new("A1").unwrap();
//! assert_eq!(a.index(), 33);
//! assert_eq!(a.octave_label().unwrap(), "Contra");
//!
//! let b = (a + 3).unwrap();
//! assert_eq!(b.base_name(), "C2");
//! assert!(b > a);
//! ```
//!
//! # Main Components
//!
//! - **Note**: the note value with its derived properties and operators
//! - **NoteInput** / **Operand**: accepted inputs, checked at the boundary
//! - **table**: static pitch class and octave tables
//! - **piano**: 88-key piano reference data

pub mod error;
pub mod input;
pub mod note;
pub mod ops;
pub mod piano;
pub mod table;

pub use error::{NoteError, Result};
pub use input::{NoteInput, Operand};
pub use note::{KeyColor, Note};
