use anyhow::{bail, Result};
use notekit_core::table::NOTE_RANGE;
use notekit_core::{KeyColor, Note};
use serde::Serialize;
use std::fmt;

/// Everything the CLI knows about a single note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteReport {
    pub index: i64,
    pub pitch_class: &'static str,
    pub octave: i64,
    pub midi_octave: i64,
    pub base_name: String,
    pub scientific_name: String,
    /// `None` when the octave has no label
    pub octave_label: Option<&'static str>,
    pub key_color: KeyColor,
    pub in_range: bool,
    pub piano_key: Option<u8>,
    pub special_name: Option<&'static str>,
}

impl NoteReport {
    pub fn new(note: Note) -> Self {
        NoteReport {
            index: note.index(),
            pitch_class: note.pitch_class(),
            octave: note.octave(),
            midi_octave: note.midi_octave(),
            base_name: note.base_name(),
            scientific_name: note.scientific_name(),
            octave_label: note.octave_label().ok(),
            key_color: note.key_color(),
            in_range: note.in_range(),
            piano_key: note.piano_key(),
            special_name: note.special_name(),
        }
    }

    /// One line summary used by `table`
    pub fn summary(&self) -> String {
        format!(
            "{:>4}  {:<6} {:<12} {}",
            self.index, self.base_name, self.scientific_name, self.key_color
        )
    }
}

/// Reports for every note from `from` to `to`
///
/// Both bounds must lie in the 0..=127 note range.
pub fn note_table(from: Note, to: Note) -> Result<Vec<NoteReport>> {
    for (label, bound) in [("--from", from), ("--to", to)] {
        if !bound.in_range() {
            bail!(
                "{} {} is outside the note range {}..={}",
                label,
                bound.index(),
                NOTE_RANGE.start(),
                NOTE_RANGE.end()
            );
        }
    }
    Ok(Note::range(from, to).map(NoteReport::new).collect())
}

impl fmt::Display for NoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} / {}", self.index, self.base_name, self.scientific_name)?;
        writeln!(f, "  pitch class:  {}", self.pitch_class)?;
        writeln!(f, "  octave:       {} (MIDI {})", self.octave, self.midi_octave)?;
        match self.octave_label {
            Some("") => writeln!(f, "  octave label: (unnamed)")?,
            Some(label) => writeln!(f, "  octave label: {}", label)?,
            None => writeln!(f, "  octave label: (none)")?,
        }
        writeln!(f, "  key:          {}", self.key_color)?;
        if !self.in_range {
            writeln!(f, "  outside the 0..=127 note range")?;
        }
        if let Some(key) = self.piano_key {
            match self.special_name {
                Some(name) => writeln!(f, "  piano key:    {} ({})", key, name)?,
                None => writeln!(f, "  piano key:    {}", key)?,
            }
        }
        Ok(())
    }
}
