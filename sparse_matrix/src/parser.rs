//! Reader for the text matrix format:
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! (<row>,<col>,<value>)
//! ...
//! ```
//!
//! Blank lines are allowed after the header. Zero values are dropped and
//! repeated positions are kept as they appear.

use crate::entry::Entry;
use crate::error::{ParseError, Result};
use crate::matrix::SparseMatrix;
use crate::MatrixError;
use std::fs;
use std::path::Path;
use std::str::FromStr;

impl SparseMatrix {
    /// Reads and parses a matrix file.
    ///
    /// Every failure, including I/O errors, is reported as
    /// [`MatrixError::InvalidFormat`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            log::debug!("cannot read {}: {}", path.display(), e);
            ParseError::from(e)
        })?;
        let matrix = text.parse::<SparseMatrix>().map_err(|e: MatrixError| {
            if let MatrixError::InvalidFormat { source } = &e {
                log::debug!("rejected {}: {}", path.display(), source);
            }
            e
        })?;
        log::debug!(
            "loaded {}x{} matrix with {} entries from {}",
            matrix.num_rows(),
            matrix.num_cols(),
            matrix.len(),
            path.display()
        );
        Ok(matrix)
    }
}

impl FromStr for SparseMatrix {
    type Err = MatrixError;

    fn from_str(text: &str) -> Result<Self> {
        Ok(parse_matrix(text)?)
    }
}

fn parse_matrix(text: &str) -> std::result::Result<SparseMatrix, ParseError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let num_rows = parse_header(lines.next(), "rows")?;
    let num_cols = parse_header(lines.next(), "cols")?;
    let mut matrix = SparseMatrix::new(num_rows, num_cols);

    for (line_no, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry = parse_entry(line_no, line)?;
        if entry.value == 0 {
            continue;
        }
        log::trace!("line {}: {}", line_no, entry);
        matrix.push_entry(entry);
    }

    Ok(matrix)
}

fn parse_header(
    line: Option<(usize, &str)>,
    name: &'static str,
) -> std::result::Result<usize, ParseError> {
    let (line_no, line) = line.ok_or(ParseError::MissingHeader { name })?;
    match line.split_once('=') {
        Some((key, value)) if key.trim() == name => parse_int(line_no, value),
        _ => Err(ParseError::BadHeader {
            line: line_no,
            name,
        }),
    }
}

fn parse_entry(line_no: usize, line: &str) -> std::result::Result<Entry, ParseError> {
    let malformed = || ParseError::MalformedEntry { line: line_no };

    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let fields: Vec<&str> = inner.split(',').collect();
    let [row, col, value] = fields[..] else {
        return Err(malformed());
    };

    Ok(Entry::new(
        parse_int(line_no, row)?,
        parse_int(line_no, col)?,
        parse_int(line_no, value)?,
    ))
}

fn parse_int<T>(line_no: usize, text: &str) -> std::result::Result<T, ParseError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let text = text.trim();
    text.parse().map_err(|source| ParseError::BadInteger {
        line: line_no,
        text: text.to_string(),
        source,
    })
}
