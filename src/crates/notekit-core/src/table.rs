//! Static lookup tables shared by every note
//!
//! Pitch classes are stored with two-letter composite names for the
//! sharps/flats: "CD" is C♯/D♭, "FG" is F♯/G♭ and so on.

use std::ops::RangeInclusive;

/// Valid note indices (the MIDI note number range)
pub const NOTE_RANGE: RangeInclusive<i64> = 0..=127;

/// Scientific octave numbers that carry a label
pub const OCTAVE_RANGE: RangeInclusive<i64> = -1..=11;

/// Number of pitch classes in an octave
pub const SEMITONES: i64 = 12;

/// Pitch class names in chromatic order, starting from C
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "CD", "D", "DE", "E", "F", "FG", "G", "GA", "A", "AB", "B",
];

/// Pitch classes played on black piano keys
pub const BLACK_KEYS: [&str; 5] = ["CD", "DE", "FG", "GA", "AB"];

const OCTAVE_LABELS: [&str; 13] = [
    "Dbl Contra",
    "Sub Contra",
    "Contra",
    "Great",
    "Small",
    "1 Line",
    "2 Line",
    "3 Line",
    "4 Line",
    "5 Line",
    "6 Line",
    "7 Line",
    "",
];

/// Look up the position (0..11) of a pitch class name, ignoring case
pub fn pitch_class_index(name: &str) -> Option<usize> {
    PITCH_CLASS_NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
}

/// Pitch class name for any index, wrapping negative indices
pub fn pitch_class_name(index: i64) -> &'static str {
    PITCH_CLASS_NAMES[index.rem_euclid(SEMITONES) as usize]
}

pub fn is_black_key(name: &str) -> bool {
    BLACK_KEYS.iter().any(|k| k.eq_ignore_ascii_case(name))
}

/// Human readable label of a scientific octave, `None` outside -1..=11
pub fn octave_label(octave: i64) -> Option<&'static str> {
    if !OCTAVE_RANGE.contains(&octave) {
        return None;
    }
    OCTAVE_LABELS.get((octave - OCTAVE_RANGE.start()) as usize).copied()
}

/// Alternation of every pitch class name, longest names first so that
/// "CD" is never shadowed by "C"
pub(crate) fn pitch_class_alternation() -> String {
    let mut names: Vec<&str> = PITCH_CLASS_NAMES.to_vec();
    names.sort_by(|a, b| b.len().cmp(&a.len()));
    names.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_index() {
        assert_eq!(pitch_class_index("C"), Some(0));
        assert_eq!(pitch_class_index("cd"), Some(1));
        assert_eq!(pitch_class_index("A"), Some(9));
        assert_eq!(pitch_class_index("B"), Some(11));
        assert_eq!(pitch_class_index("H"), None);
        assert_eq!(pitch_class_index(""), None);
    }

    #[test]
    fn test_pitch_class_name_wraps() {
        assert_eq!(pitch_class_name(0), "C");
        assert_eq!(pitch_class_name(13), "CD");
        assert_eq!(pitch_class_name(-1), "B");
        assert_eq!(pitch_class_name(-12), "C");
    }

    #[test]
    fn test_black_keys() {
        let black = PITCH_CLASS_NAMES.iter().filter(|n| is_black_key(n)).count();
        assert_eq!(black, 5);
        assert!(is_black_key("GA"));
        assert!(!is_black_key("G"));
    }

    #[test]
    fn test_octave_labels() {
        assert_eq!(octave_label(-1), Some("Dbl Contra"));
        assert_eq!(octave_label(1), Some("Contra"));
        assert_eq!(octave_label(4), Some("1 Line"));
        assert_eq!(octave_label(10), Some("7 Line"));
        assert_eq!(octave_label(11), Some(""));
        assert_eq!(octave_label(-2), None);
        assert_eq!(octave_label(12), None);
    }

    #[test]
    fn test_alternation_order() {
        let alternation = pitch_class_alternation();
        let cd = alternation.find("CD").unwrap();
        let c = alternation.find("|C|").unwrap();
        assert!(cd < c);
    }
}
