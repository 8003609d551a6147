use std::fmt;
use std::fmt::Formatter;

pub type TableResult<T> = Result<T, TableErr>;

#[derive(Clone, Debug, PartialEq)]
pub struct TableErr {
    pub kind: TableErrKind,
}

impl TableErr {
    pub fn new(kind: TableErrKind) -> Self {
        Self { kind }
    }

    pub fn duplicate_spelling<S: Into<String>>(spelling: S) -> Self {
        Self::new(TableErrKind::DuplicateSpelling(spelling.into()))
    }

    pub fn invalid_line<S: Into<String>>(line_no: usize, line: S) -> Self {
        Self::new(TableErrKind::InvalidLine(line_no, line.into()))
    }
}

impl fmt::Display for TableErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableErrKind {
    DuplicateSpelling(String),
    InvalidLine(usize, String), // line number (1-based), line text
    CouldNotReadTableFile(String, String), // path, reason
}

impl fmt::Display for TableErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use TableErrKind::*;
        let msg = match self {
            DuplicateSpelling(spelling) => {
                format!("Keyword spelling appears more than once: {spelling}")
            }
            InvalidLine(line_no, line) => format!(
                concat!(
                    "Invalid keyword table entry on line {}: {:?}\n",
                    "Expected: <spelling> = <translation>"
                ),
                line_no, line
            ),
            CouldNotReadTableFile(path, reason) => {
                format!("Could not read keyword table file: {path} ({reason})")
            }
        };
        write!(f, "{msg}")
    }
}
