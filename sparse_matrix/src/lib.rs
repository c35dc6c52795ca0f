//! Integer sparse matrices stored as an ordered list of nonzero entries.
//!
//! Matrices are read from a small text format, combined with
//! [`add`](SparseMatrix::add), [`subtract`](SparseMatrix::subtract) and
//! [`multiply`](SparseMatrix::multiply), and printed back as
//! `(row, col, value)` lines.
//!
//! ```
//! use sparse_matrix::SparseMatrix;
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0,0,1)\n(1,1,4)".parse()?;
//! let b: SparseMatrix = "rows=2\ncols=2\n(0,0,5)".parse()?;
//!
//! let sum = a.add(&b)?;
//! assert_eq!(sum.get_element(0, 0), 6);
//! assert_eq!(sum.to_string(), "(0, 0, 6)\n(1, 1, 4)\n");
//! # Ok::<(), sparse_matrix::MatrixError>(())
//! ```

mod entry;
mod error;
mod matrix;
mod multiply;
mod operation;
mod ops;
mod parser;

pub use entry::Entry;
pub use error::{MatrixError, ParseError, Result};
pub use matrix::SparseMatrix;
pub use operation::{Operation, UnknownOperation};
