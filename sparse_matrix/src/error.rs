//! Error types for sparse matrix loading and arithmetic

use crate::operation::Operation;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias using the crate's [`MatrixError`]
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors surfaced by [`SparseMatrix`](crate::SparseMatrix) operations
#[derive(Error, Debug)]
pub enum MatrixError {
    /// The input file could not be read or does not follow the matrix format.
    ///
    /// The message is the same for every cause; the cause itself is kept as
    /// the error source.
    #[error("Invalid format in input file")]
    InvalidFormat {
        #[from]
        source: ParseError,
    },

    /// Operand shapes are incompatible with the requested operation
    #[error("{}", .op.dimension_message())]
    DimensionMismatch {
        /// The operation that rejected its operands
        op: Operation,
        /// Shape of the left operand as (rows, cols)
        lhs: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        rhs: (usize, usize),
    },

    /// An accumulated value does not fit in an `i64`
    #[error("Integer overflow at ({row}, {col})")]
    Overflow { row: i64, col: i64 },
}

/// Detailed reason a matrix file was rejected
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing `{name}=` header line")]
    MissingHeader { name: &'static str },

    #[error("line {line}: expected `{name}=<int>`")]
    BadHeader { line: usize, name: &'static str },

    #[error("line {line}: invalid integer {text:?}")]
    BadInteger {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: expected `(<row>,<col>,<value>)`")]
    MalformedEntry { line: usize },
}

impl ParseError {
    /// One-based line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::BadHeader { line, .. }
            | Self::BadInteger { line, .. }
            | Self::MalformedEntry { line } => Some(*line),
            Self::Io(_) | Self::MissingHeader { .. } => None,
        }
    }
}
