//! Errors reported by [`DynArray`](crate::DynArray) operations.
//!
//! A failed operation never mutates the array, so every error is recoverable.

use core::fmt;

/// The array operation that was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Delete,
    Pop,
    Insert,
    RemoveOne,
}

impl Op {
    pub fn name(self) -> &'static str {
        match self {
            Op::Delete => "delete",
            Op::Pop => "pop",
            Op::Insert => "insert",
            Op::RemoveOne => "remove_one",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// Removal from an array with no elements.
    #[error("{op}: array is empty")]
    EmptyStructure { op: Op },

    /// Insertion positions range over `0..=len`, element positions over `0..len`.
    #[error("{op}: index {index} is out of range for length {len}")]
    IndexOutOfRange { op: Op, index: usize, len: usize },
}

impl ArrayError {
    pub fn op(&self) -> Op {
        match *self {
            ArrayError::EmptyStructure { op } | ArrayError::IndexOutOfRange { op, .. } => op,
        }
    }
}
