use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;

use crate::report::ReportFormat;
use crate::scanner::MAX_TOKEN_LEN;

pub struct Config {
    entries: HashMap<String, ValKind>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValKind {
    Bool(bool),
    Str(String),
    Usize(usize),
}

type NameResult = Result<(), ConfigErr>;

impl Default for Config {
    fn default() -> Self {
        use ValKind::*;
        let mut entries = HashMap::new();
        entries.insert("debug".to_owned(), Bool(false));
        entries.insert("quiet".to_owned(), Bool(false));
        entries.insert("format".to_owned(), Str(ReportFormat::default().to_string()));
        // 0 means no limit
        entries.insert("max_token_len".to_owned(), Usize(MAX_TOKEN_LEN));
        Self { entries }
    }
}

impl Config {
    fn check_name(&self, name: &str) -> NameResult {
        if self.entries.contains_key(name) {
            Ok(())
        } else {
            Err(ConfigErr::new(ConfigErrKind::NameNotKnown(name.to_owned())))
        }
    }

    fn get(&self, name: &str) -> Result<&ValKind, ConfigErr> {
        self.check_name(name)?;
        if let Some(val) = self.entries.get(name) {
            Ok(val)
        } else {
            Err(ConfigErr::new(ConfigErrKind::ValueNotSet(name.to_owned())))
        }
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, ConfigErr> {
        let val = self.get(name)?;
        if let ValKind::Bool(val) = val {
            Ok(*val)
        } else {
            Err(ConfigErr::not_valid(name, "expected bool"))
        }
    }

    pub fn get_str(&self, name: &str) -> Result<&String, ConfigErr> {
        let val = self.get(name)?;
        if let ValKind::Str(val) = val {
            Ok(val)
        } else {
            Err(ConfigErr::not_valid(name, "expected string"))
        }
    }

    pub fn get_usize(&self, name: &str) -> Result<usize, ConfigErr> {
        let val = self.get(name)?;
        if let ValKind::Usize(val) = val {
            Ok(*val)
        } else {
            Err(ConfigErr::not_valid(name, "expected usize"))
        }
    }

    fn set(&mut self, name: &str, val: ValKind) -> NameResult {
        self.check_name(name)?;
        if let Some(current) = self.entries.get(name) {
            if std::mem::discriminant(current) != std::mem::discriminant(&val) {
                return Err(ConfigErr::not_valid(name, "wrong type"));
            }
        }
        self.entries.insert(name.to_owned(), val);
        Ok(())
    }

    pub fn set_bool(&mut self, name: &str, val: bool) -> NameResult {
        self.set(name, ValKind::Bool(val))
    }

    pub fn set_str(&mut self, name: &str, val: &str) -> NameResult {
        if name == "format" && val.parse::<ReportFormat>().is_err() {
            return Err(ConfigErr::not_valid(name, "expected text, plain, or summary"));
        }
        self.set(name, ValKind::Str(val.to_owned()))
    }

    pub fn set_usize(&mut self, name: &str, val: usize) -> NameResult {
        self.set(name, ValKind::Usize(val))
    }

    // Typed accessors -------------------------------------------------

    pub fn debug(&self) -> Result<bool, ConfigErr> {
        self.get_bool("debug")
    }

    pub fn quiet(&self) -> Result<bool, ConfigErr> {
        self.get_bool("quiet")
    }

    pub fn format(&self) -> Result<ReportFormat, ConfigErr> {
        self.get_str("format")?
            .parse()
            .map_err(|_| ConfigErr::not_valid("format", "expected text, plain, or summary"))
    }

    /// The identifier length limit to scan with, `None` for no limit.
    pub fn max_token_len(&self) -> Result<Option<usize>, ConfigErr> {
        match self.get_usize("max_token_len")? {
            0 => Ok(None),
            n => Ok(Some(n)),
        }
    }
}

// Errors --------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigErr {
    pub kind: ConfigErrKind,
}

impl ConfigErr {
    pub fn new(kind: ConfigErrKind) -> Self {
        Self { kind }
    }

    fn not_valid(name: &str, reason: &str) -> Self {
        Self::new(ConfigErrKind::ValueNotValid(name.to_owned(), reason.to_owned()))
    }
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigErrKind {
    NameNotKnown(String),
    ValueNotSet(String),
    ValueNotValid(String, String), // name, reason
}

impl fmt::Display for ConfigErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ConfigErrKind::*;
        let msg = match self {
            NameNotKnown(name) => format!("Config name not known: {name}"),
            ValueNotSet(name) => format!("Config value not set: {name}"),
            ValueNotValid(name, reason) => {
                format!("Config value is not valid for {name}: {reason}")
            }
        };
        write!(f, "{msg}")
    }
}
