//! Arithmetic and comparison on note indices
//!
//! Arithmetic results are notes again and must land in the valid note range;
//! comparisons return plain booleans and are never range checked.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Sub};

use crate::error::{NoteError, Result};
use crate::input::Operand;
use crate::note::Note;
use crate::table::NOTE_RANGE;

impl Note {
    pub fn try_add(self, rhs: impl Into<Operand>) -> Result<Note> {
        let rhs = rhs.into().value();
        checked_result("+", self, rhs, self.index().saturating_add(rhs))
    }

    pub fn try_sub(self, rhs: impl Into<Operand>) -> Result<Note> {
        let rhs = rhs.into().value();
        checked_result("-", self, rhs, self.index().saturating_sub(rhs))
    }

    pub fn try_mul(self, rhs: impl Into<Operand>) -> Result<Note> {
        let rhs = rhs.into().value();
        checked_result("*", self, rhs, self.index().saturating_mul(rhs))
    }

    /// Floor division, rounding towards negative infinity
    pub fn try_div(self, rhs: impl Into<Operand>) -> Result<Note> {
        let rhs = rhs.into().value();
        if rhs == 0 {
            return Err(NoteError::DivisionByZero);
        }
        checked_result("/", self, rhs, floor_div(self.index(), rhs))
    }

    /// Compare the index against another note or a plain integer
    pub fn compare(&self, rhs: impl Into<Operand>) -> Ordering {
        self.index().cmp(&rhs.into().value())
    }
}

fn floor_div(lhs: i64, rhs: i64) -> i64 {
    let Some(quotient) = lhs.checked_div(rhs) else {
        // i64::MIN / -1
        return i64::MAX;
    };
    if lhs % rhs != 0 && ((lhs < 0) != (rhs < 0)) {
        quotient - 1
    } else {
        quotient
    }
}

fn checked_result(op: &str, lhs: Note, rhs: i64, index: i64) -> Result<Note> {
    if NOTE_RANGE.contains(&index) {
        log::trace!("{} {} {} = {}", lhs.index(), op, rhs, index);
        Ok(Note::from(index))
    } else {
        log::trace!("{} {} {} = {} is out of range", lhs.index(), op, rhs, index);
        Err(NoteError::out_of_range(index))
    }
}

impl<T: Into<Operand>> Add<T> for Note {
    type Output = Result<Note>;

    fn add(self, rhs: T) -> Result<Note> {
        self.try_add(rhs)
    }
}

impl<T: Into<Operand>> Sub<T> for Note {
    type Output = Result<Note>;

    fn sub(self, rhs: T) -> Result<Note> {
        self.try_sub(rhs)
    }
}

impl<T: Into<Operand>> Mul<T> for Note {
    type Output = Result<Note>;

    fn mul(self, rhs: T) -> Result<Note> {
        self.try_mul(rhs)
    }
}

impl<T: Into<Operand>> Div<T> for Note {
    type Output = Result<Note>;

    fn div(self, rhs: T) -> Result<Note> {
        self.try_div(rhs)
    }
}

impl PartialEq<i64> for Note {
    fn eq(&self, other: &i64) -> bool {
        self.index() == *other
    }
}

impl PartialOrd<i64> for Note {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.compare(*other))
    }
}
