use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored nonzero element of a [`SparseMatrix`](crate::SparseMatrix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub row: i64,
    pub col: i64,
    pub value: i64,
}

impl Entry {
    pub fn new(row: i64, col: i64, value: i64) -> Self {
        Self { row, col, value }
    }

    pub(crate) fn is_at(&self, row: i64, col: i64) -> bool {
        self.row == row && self.col == col
    }
}

/// Formats as `(row, col, value)`, which the loader accepts back as a body line
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}
