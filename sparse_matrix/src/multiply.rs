use crate::entry::Entry;
use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;
use crate::operation::Operation;
use std::collections::HashMap;

impl SparseMatrix {
    /// Matrix product `self * other`.
    ///
    /// Requires `self.num_cols() == other.num_rows()`; the result is
    /// `self.num_rows() x other.num_cols()`.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.num_cols() != other.num_rows() {
            return Err(self.dimension_mismatch(Operation::Multiply, other));
        }

        // Entries of `other` grouped by row, each group in list order
        let mut other_rows: HashMap<i64, Vec<&Entry>> = HashMap::new();
        for entry in other.entries() {
            other_rows.entry(entry.row).or_default().push(entry);
        }

        let mut result = SparseMatrix::new(self.num_rows(), other.num_cols());

        // Pairs are visited in the same order as a full scan of both lists,
        // so entry order in the result does not depend on the grouping.
        for a in self.entries() {
            let Some(row_of_other) = other_rows.get(&a.col) else {
                continue;
            };
            for b in row_of_other {
                let overflow = || MatrixError::Overflow {
                    row: a.row,
                    col: b.col,
                };
                let sum = a
                    .value
                    .checked_mul(b.value)
                    .and_then(|product| result.get_element(a.row, b.col).checked_add(product))
                    .ok_or_else(overflow)?;
                result.set_element(a.row, b.col, sum);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_triples(rows: usize, cols: usize, values: &[(i64, i64, i64)]) -> SparseMatrix {
        values
            .iter()
            .fold(SparseMatrix::new(rows, cols), |mut m, &(r, c, v)| {
                m.set_element(r, c, v);
                m
            })
    }

    /// Reference product over every pair of entries
    fn naive_product(a: &SparseMatrix, b: &SparseMatrix) -> SparseMatrix {
        let mut result = SparseMatrix::new(a.num_rows(), b.num_cols());
        for x in a.entries() {
            for y in b.entries() {
                if x.col == y.row {
                    let acc = result.get_element(x.row, y.col) + x.value * y.value;
                    result.set_element(x.row, y.col, acc);
                }
            }
        }
        result
    }

    #[test]
    fn identity_leaves_matrix_unchanged() {
        let a: SparseMatrix = "rows=2\ncols=2\n(0,0,1)\n(0,1,2)\n(1,0,3)\n(1,1,4)"
            .parse()
            .unwrap();
        let id: SparseMatrix = "rows=2\ncols=2\n(0,0,1)\n(1,1,1)".parse().unwrap();

        let product = a.multiply(&id).unwrap();
        assert_eq!(product, a);
    }

    #[test]
    fn rectangular_product() {
        let a = from_triples(3, 4, &[(0, 0, 1), (0, 2, 2), (1, 1, 3), (2, 0, 4), (2, 3, 5)]);
        let b = from_triples(4, 2, &[(0, 0, 1), (1, 1, 2), (2, 0, 3), (3, 1, 4)]);

        let c = a.multiply(&b).unwrap();
        assert_eq!(c.shape(), (3, 2));
        assert_eq!(c.get_element(0, 0), 7);
        assert_eq!(c.get_element(0, 1), 0);
        assert_eq!(c.get_element(1, 1), 6);
        assert_eq!(c.get_element(2, 0), 4);
        assert_eq!(c.get_element(2, 1), 20);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn same_entry_order_as_full_scan() {
        let a = from_triples(3, 3, &[(2, 1, 1), (0, 0, 2), (1, 1, -1), (0, 1, 3)]);
        let b = from_triples(3, 3, &[(1, 2, 4), (0, 0, 5), (1, 0, 1), (0, 2, 6)]);

        assert_eq!(a.multiply(&b).unwrap(), naive_product(&a, &b));
    }

    #[test]
    fn cancelling_products_are_dropped() {
        let a = from_triples(1, 2, &[(0, 0, 1), (0, 1, 1)]);
        let b = from_triples(2, 1, &[(0, 0, 2), (1, 0, -2)]);

        let c = a.multiply(&b).unwrap();
        assert!(c.is_empty());
        assert_eq!(c.get_element(0, 0), 0);
    }

    #[test]
    fn inner_dimension_mismatch() {
        let a = SparseMatrix::new(2, 3);
        let b = SparseMatrix::new(4, 2);

        let err = a.multiply(&b).unwrap_err();
        assert_eq!(err.to_string(), "Invalid dimensions for multiplication");
        assert!(matches!(
            err,
            MatrixError::DimensionMismatch {
                op: Operation::Multiply,
                lhs: (2, 3),
                rhs: (4, 2)
            }
        ));
    }

    #[test]
    fn empty_operand_gives_empty_product() {
        let a = from_triples(2, 3, &[(0, 0, 1)]);
        let b = SparseMatrix::new(3, 5);

        let c = a.multiply(&b).unwrap();
        assert_eq!(c.shape(), (2, 5));
        assert!(c.is_empty());
    }

    #[test]
    fn product_overflow_is_reported() {
        let a = from_triples(1, 1, &[(0, 0, i64::MAX)]);
        let b = from_triples(1, 1, &[(0, 0, 2)]);

        assert!(matches!(
            a.multiply(&b),
            Err(MatrixError::Overflow { row: 0, col: 0 })
        ));
    }
}
