use std::fmt;

/// Which side of a multiplication an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ShapeError {
    #[error("{operand} matrix is empty")]
    Empty { operand: Operand },
    #[error("row {row} has {found} elements, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{operand} matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        operand: Operand,
        rows: usize,
        cols: usize,
    },
    #[error("incompatible dimensions: {left}x{left} and {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("candidate is {rows}x{cols}, expected {expected}x{expected}")]
    CandidateShape {
        expected: usize,
        rows: usize,
        cols: usize,
    },
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("overflow while accumulating result element ({row}, {col})")]
    Overflow { row: usize, col: usize },
    #[error("invalid element {token:?} at row {row}, column {col}")]
    Parse {
        row: usize,
        col: usize,
        token: String,
    },
    #[error("element width must be between 1 and 32 bits, got {0}")]
    Width(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
