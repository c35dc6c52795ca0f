use crate::entry::Entry;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Integer matrix that stores only its nonzero entries.
///
/// Entries are kept in insertion order. [`set_element`](Self::set_element)
/// never stores a zero and never stores two entries for the same position.
/// The loader appends raw triples, so a loaded matrix may hold duplicate
/// positions; lookups then see the earliest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseMatrix {
    #[serde(rename = "rows")]
    num_rows: usize,
    #[serde(rename = "cols")]
    num_cols: usize,
    entries: Vec<Entry>,
}

impl SparseMatrix {
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: Vec::new(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Value at (row, col), or 0 when nothing is stored there.
    ///
    /// Positions outside the declared shape are not rejected; they read as 0
    /// unless an entry was stored there.
    pub fn get_element(&self, row: i64, col: i64) -> i64 {
        self.entries
            .iter()
            .find(|e| e.is_at(row, col))
            .map_or(0, |e| e.value)
    }

    /// Inserts, overwrites or removes the entry at (row, col).
    ///
    /// Writing 0 removes an existing entry and keeps the order of the others.
    pub fn set_element(&mut self, row: i64, col: i64, value: i64) {
        match self.entries.iter().position(|e| e.is_at(row, col)) {
            Some(idx) if value == 0 => {
                self.entries.remove(idx);
            }
            Some(idx) => self.entries[idx].value = value,
            None if value != 0 => self.push_entry(Entry::new(row, col, value)),
            None => {}
        }
    }

    /// Appends without checking for an existing entry at the same position
    pub(crate) fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Prints every entry as `(row, col, value)` on its own line
    pub fn print_matrix(&self) {
        print!("{}", self);
    }

    /// Writes a complete matrix file: the `rows=`/`cols=` header, then the entries
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "rows={}", self.num_rows)?;
        writeln!(writer, "cols={}", self.num_cols)?;
        for entry in &self.entries {
            writeln!(writer, "{}", entry)?;
        }
        writer.flush()
    }

    /// Saves the matrix to `path` in the same format [`load`](Self::load) reads
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        self.write_to(BufWriter::new(File::create(path)?))?;
        log::debug!("saved {}x{} matrix to {}", self.num_rows, self.num_cols, path.display());
        Ok(())
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
