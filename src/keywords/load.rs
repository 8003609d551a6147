//! Keyword table files.
//!
//! A table file holds one `spelling = translation` pair per line.
//! Surrounding whitespace is ignored, as are blank lines and lines
//! starting with `#`.
use std::fs;
use std::path::Path;

use super::result::{TableErr, TableErrKind, TableResult};
use super::table::KeywordTable;

/// Read and parse the keyword table file at `path`.
pub fn load_table_file<P: AsRef<Path>>(path: P) -> TableResult<KeywordTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| {
        TableErr::new(TableErrKind::CouldNotReadTableFile(
            path.display().to_string(),
            err.to_string(),
        ))
    })?;
    log::debug!("Loaded keyword table file {} ({} bytes)", path.display(), text.len());
    parse_table(text.as_str())
}

/// Parse keyword table text.
pub fn parse_table(text: &str) -> TableResult<KeywordTable> {
    let mut pairs = vec![];
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;
        let (spelling, translation) = match line.split_once('=') {
            Some((spelling, translation)) => (spelling.trim(), translation.trim()),
            None => return Err(TableErr::invalid_line(line_no, line)),
        };
        if !is_ident(spelling) || translation.is_empty() {
            return Err(TableErr::invalid_line(line_no, line));
        }
        pairs.push((spelling, translation));
    }
    KeywordTable::new(pairs)
}

/// Check whether `spelling` could ever be produced by the scanner:
/// an ASCII letter or underscore followed by ASCII letters, digits,
/// and underscores.
fn is_ident(spelling: &str) -> bool {
    let mut chars = spelling.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
