//! Element-wise addition and subtraction, and dispatch by [`Operation`]

use crate::entry::Entry;
use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;
use crate::operation::Operation;

impl SparseMatrix {
    /// Element-wise sum. Positions that cancel to zero are not stored.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Add, i64::checked_add)
    }

    /// Element-wise difference `self - other`
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Subtract, i64::checked_sub)
    }

    /// Runs `op` with `self` as the left operand
    pub fn apply(&self, op: Operation, other: &SparseMatrix) -> Result<SparseMatrix> {
        log::debug!(
            "{} {}x{} ({} entries) with {}x{} ({} entries)",
            op,
            self.num_rows(),
            self.num_cols(),
            self.len(),
            other.num_rows(),
            other.num_cols(),
            other.len()
        );
        let result = match op {
            Operation::Add => self.add(other),
            Operation::Subtract => self.subtract(other),
            Operation::Multiply => self.multiply(other),
        }?;
        log::debug!("{} produced {} entries", op, result.len());
        Ok(result)
    }

    /// Copies `self` into a fresh matrix, then folds each entry of `other`
    /// into it with `merge(current, value)`.
    fn combine(
        &self,
        other: &SparseMatrix,
        op: Operation,
        merge: fn(i64, i64) -> Option<i64>,
    ) -> Result<SparseMatrix> {
        if self.shape() != other.shape() {
            return Err(self.dimension_mismatch(op, other));
        }

        let mut result = SparseMatrix::new(self.num_rows(), self.num_cols());
        for e in self.entries() {
            result.set_element(e.row, e.col, e.value);
        }
        for &Entry { row, col, value } in other.entries() {
            let merged = merge(result.get_element(row, col), value)
                .ok_or(MatrixError::Overflow { row, col })?;
            result.set_element(row, col, merged);
        }
        Ok(result)
    }

    pub(crate) fn dimension_mismatch(&self, op: Operation, other: &SparseMatrix) -> MatrixError {
        MatrixError::DimensionMismatch {
            op,
            lhs: self.shape(),
            rhs: other.shape(),
        }
    }
}
