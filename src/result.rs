use core::fmt;
use std::fmt::Formatter;

use crate::config::{ConfigErr, ConfigErrKind};
use crate::keywords::{TableErr, TableErrKind};

/// Result type used by the top level driver. The success value is the
/// number of keywords found.
pub type DriverResult = Result<usize, DriverErr>;

#[derive(Debug)]
pub struct DriverErr {
    pub kind: DriverErrKind,
}

impl DriverErr {
    pub fn new(kind: DriverErrKind) -> Self {
        Self { kind }
    }

    /// Exit code to use when this error ends the program.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[derive(Debug)]
pub enum DriverErrKind {
    CouldNotReadSourceFile(String, String), // path, reason
    CouldNotReadStdin(String),
    CouldNotWriteOutput(String),
    Table(TableErrKind),
    Config(ConfigErrKind),
}

impl From<TableErr> for DriverErr {
    fn from(err: TableErr) -> Self {
        Self::new(DriverErrKind::Table(err.kind))
    }
}

impl From<ConfigErr> for DriverErr {
    fn from(err: ConfigErr) -> Self {
        Self::new(DriverErrKind::Config(err.kind))
    }
}

impl fmt::Display for DriverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for DriverErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use DriverErrKind::*;
        let msg = match self {
            CouldNotReadSourceFile(path, reason) => {
                format!("Could not read source file: {path} ({reason})")
            }
            CouldNotReadStdin(reason) => format!("Could not read stdin: {reason}"),
            CouldNotWriteOutput(reason) => format!("Could not write output: {reason}"),
            Table(kind) => format!("Keyword table error: {kind}"),
            Config(kind) => format!("Configuration error: {kind}"),
        };
        write!(f, "{msg}")
    }
}
