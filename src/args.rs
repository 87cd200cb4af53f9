use anyhow::{anyhow, Context, Result};
use notekit_core::{Note, NoteInput, Operand};
use std::cmp::Ordering;
use std::str::FromStr;

/// Parse a note given on the command line
///
/// Plain integers are note indices, anything else is scientific notation.
/// With `json` set the argument is a JSON value instead, so pairs such as
/// `["CD", 1]` can be passed.
pub fn parse_note_arg(arg: &str, json: bool) -> Result<Note> {
    let input = if json {
        let value: serde_json::Value =
            serde_json::from_str(arg).with_context(|| format!("'{}' is not valid JSON", arg))?;
        NoteInput::try_from(value)?
    } else if let Ok(index) = arg.parse::<i64>() {
        NoteInput::Index(index)
    } else {
        NoteInput::Scientific(arg.to_string())
    };
    Ok(Note::new(input)?)
}

/// Right-hand side of `calc`: an integer, or a note in scientific notation
pub fn parse_operand_arg(arg: &str) -> Result<Operand> {
    if let Ok(n) = arg.parse::<i64>() {
        return Ok(Operand::Int(n));
    }
    let note = arg
        .parse::<Note>()
        .with_context(|| format!("'{}' is neither an integer nor a note", arg))?;
    Ok(Operand::Note(note))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn apply(self, lhs: Note, rhs: Operand) -> notekit_core::Result<Note> {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
        }
    }
}

impl FromStr for BinaryOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" | "add" => Ok(BinaryOp::Add),
            "-" | "sub" => Ok(BinaryOp::Sub),
            "*" | "x" | "mul" => Ok(BinaryOp::Mul),
            "/" | "div" => Ok(BinaryOp::Div),
            _ => Err(anyhow!("Unknown operator '{}', expected one of + - * /", s)),
        }
    }
}

pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notekit_core::NoteError;
    use proptest::prelude::*;

    #[test]
    fn test_parse_note_arg() {
        assert_eq!(parse_note_arg("60", false).unwrap().index(), 60);
        assert_eq!(parse_note_arg("-3", false).unwrap().index(), -3);
        assert_eq!(parse_note_arg("A4", false).unwrap().index(), 69);
        assert_eq!(parse_note_arg("A-1", false).unwrap().index(), 9);
        assert!(parse_note_arg("H4", false).is_err());
    }

    #[test]
    fn test_parse_note_arg_json() {
        assert_eq!(parse_note_arg(r#"["CD", 1]"#, true).unwrap().index(), 25);
        assert_eq!(parse_note_arg(r#""A4""#, true).unwrap().index(), 69);
        assert_eq!(parse_note_arg("12", true).unwrap().index(), 12);

        let err = parse_note_arg(r#"["CD", "1"]"#, true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NoteError>(),
            Some(NoteError::InvalidArgumentType { .. })
        ));
        assert!(parse_note_arg("[CD", true).is_err());
    }

    #[test]
    fn test_parse_operand_arg() {
        assert_eq!(parse_operand_arg("7").unwrap(), Operand::Int(7));
        assert_eq!(
            parse_operand_arg("C0").unwrap(),
            Operand::Note(Note::from(12))
        );
        assert!(parse_operand_arg("seven").is_err());
    }

    #[test]
    fn test_binary_op() {
        let c4 = Note::from(60);
        let op: BinaryOp = "+".parse().unwrap();
        assert_eq!(op.apply(c4, Operand::Int(9)).unwrap().base_name(), "A4");
        let op: BinaryOp = "/".parse().unwrap();
        assert_eq!(op.apply(c4, Operand::Int(0)), Err(NoteError::DivisionByZero));
        let op: BinaryOp = "-".parse().unwrap();
        assert_eq!(
            op.apply(Note::from(0), Operand::Int(1)),
            Err(NoteError::out_of_range(-1))
        );
        assert!("%".parse::<BinaryOp>().is_err());
    }

    #[test]
    fn test_ordering_symbol() {
        assert_eq!(ordering_symbol(Note::from(1).compare(2)), "<");
        assert_eq!(ordering_symbol(Note::from(2).compare(2)), "=");
        assert_eq!(ordering_symbol(Note::from(3).compare(2)), ">");
    }

    proptest! {
        #[test]
        fn index_and_name_args_agree(index in 0i64..=127) {
            let by_index = parse_note_arg(&index.to_string(), false).unwrap();
            let by_name = parse_note_arg(&by_index.base_name(), false).unwrap();
            prop_assert_eq!(by_index, by_name);
        }
    }
}
