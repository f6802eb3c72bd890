//! Line-splitting helpers for the order/addenda formats.
//!
//! The addenda files are column-aligned rather than delimiter
//! separated: fields are padded apart with runs of two or more spaces,
//! while a single space can occur inside a field.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::types::{AddendaError, AddendaResult};

/// Splits a line on runs of 2+ whitespace characters.
///
/// Single whitespace characters are kept inside their field, so a
/// description like `Type 2 diabetes mellitus` survives as one field.
pub(crate) fn split_wide(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut field_start = 0;
    let mut run_start = None;
    let mut run_len = 0;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(i);
                run_len = 0;
            }
            run_len += 1;
        } else {
            if let Some(start) = run_start {
                if run_len >= 2 {
                    fields.push(&line[field_start..start]);
                    field_start = i;
                }
            }
            run_start = None;
        }
    }

    fields.push(&line[field_start..]);
    fields
}

/// Opens a mandatory input file for buffered line reading.
///
/// # Errors
/// Returns [`AddendaError::FileNotFound`] if the path does not exist,
/// or an I/O error if it cannot be opened.
pub(crate) fn open_input(path: &Path) -> AddendaResult<BufReader<File>> {
    if !path.exists() {
        return Err(AddendaError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    Ok(BufReader::new(File::open(path)?))
}
