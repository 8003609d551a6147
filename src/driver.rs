//! Front end for scanning sources and reporting the keywords found.
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::config::Config;
use crate::keywords::KeywordTable;
use crate::report::{write_keywords, Report};
use crate::result::{DriverErr, DriverErrKind, DriverResult};
use crate::scanner::scan;

/// Read the whole file at `path` into memory.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<String, DriverErr> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            log::debug!("Loaded source file {} ({} bytes)", path.display(), text.len());
            Ok(text)
        }
        Err(err) => Err(DriverErr::new(DriverErrKind::CouldNotReadSourceFile(
            path.display().to_string(),
            err.to_string(),
        ))),
    }
}

pub struct Driver<'t> {
    table: &'t KeywordTable,
    report: Report,
    max_token_len: Option<usize>,
    debug: bool,
}

impl<'t> Driver<'t> {
    pub fn new(table: &'t KeywordTable, config: &Config) -> Result<Self, DriverErr> {
        Ok(Self {
            table,
            report: Report::new(config.format()?, config.quiet()?),
            max_token_len: config.max_token_len()?,
            debug: config.debug()?,
        })
    }

    pub fn table(&self) -> &'t KeywordTable {
        self.table
    }

    // Execute ---------------------------------------------------------

    /// Scan the file at `path` and report its keywords to `out`.
    pub fn execute_file(&self, path: &str, out: &mut impl Write) -> DriverResult {
        let text = load_source(path)?;
        self.execute_text(path, text.as_str(), out)
    }

    /// Scan all of stdin and report its keywords to `out`.
    pub fn execute_stdin(&self, out: &mut impl Write) -> DriverResult {
        self.execute_reader("<stdin>", &mut io::stdin().lock(), out)
    }

    /// Read `input` to the end, then scan it like `execute_text`.
    pub fn execute_reader(
        &self,
        name: &str,
        input: &mut impl Read,
        out: &mut impl Write,
    ) -> DriverResult {
        let mut text = String::new();
        input
            .read_to_string(&mut text)
            .map_err(|err| DriverErr::new(DriverErrKind::CouldNotReadStdin(err.to_string())))?;
        log::debug!("Loaded source from {name} ({} bytes)", text.len());
        self.execute_text(name, text.as_str(), out)
    }

    /// Scan `text` and report its keywords to `out`. `name` identifies
    /// the source in the report.
    pub fn execute_text(&self, name: &str, text: &str, out: &mut impl Write) -> DriverResult {
        log::trace!("BEGIN: execute {name}");
        let debug = self.debug;
        let matches = scan(text, self.table)
            .with_max_token_len(self.max_token_len)
            .inspect(move |found| {
                if debug {
                    eprintln!("{found:?}");
                }
            });
        let count = self
            .report
            .write_matches(out, name, matches)
            .map_err(|err| DriverErr::new(DriverErrKind::CouldNotWriteOutput(err.to_string())))?;
        log::trace!("END: execute {name} ({count} keywords)");
        Ok(count)
    }

    /// Write the active keyword table to `out`.
    pub fn list_keywords(&self, out: &mut impl Write) -> Result<(), DriverErr> {
        write_keywords(out, self.table)
            .map_err(|err| DriverErr::new(DriverErrKind::CouldNotWriteOutput(err.to_string())))
    }
}
