//! Command line front end for notekit
//!
//! The binary in `main.rs` only parses arguments and prints; everything it
//! prints is built here so it can be tested without a process.

pub mod args;
pub mod report;

pub use args::{parse_note_arg, parse_operand_arg, BinaryOp};
pub use report::{note_table, NoteReport};
