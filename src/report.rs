//! Rendering of keyword matches.
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use indexmap::IndexMap;

use crate::keywords::KeywordTable;
use crate::scanner::Match;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Banner lines around one descriptive line per match.
    #[default]
    Text,
    /// One tab-separated `spelling translation` line per match.
    Plain,
    /// Per-keyword counts in first-seen order, then a total.
    Summary,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "plain" => Ok(Self::Plain),
            "summary" => Ok(Self::Summary),
            other => Err(format!("Unknown report format: {other}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Plain => "plain",
            Self::Summary => "summary",
        };
        write!(f, "{name}")
    }
}

pub struct Report {
    format: ReportFormat,
    quiet: bool,
}

impl Report {
    pub fn new(format: ReportFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Write `matches` for the source called `name` to `out`. Matches
    /// are written as they're pulled from the iterator, except in
    /// summary mode. Returns the number of matches.
    pub fn write_matches<'t, W, I>(
        &self,
        out: &mut W,
        name: &str,
        matches: I,
    ) -> io::Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = Match<'t>>,
    {
        match self.format {
            ReportFormat::Text => self.write_text(out, name, matches),
            ReportFormat::Plain => {
                let mut count = 0;
                for m in matches {
                    writeln!(out, "{}\t{}", m.spelling, m.translation)?;
                    count += 1;
                }
                Ok(count)
            }
            ReportFormat::Summary => self.write_summary(out, matches),
        }
    }

    fn write_text<'t, W, I>(&self, out: &mut W, name: &str, matches: I) -> io::Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = Match<'t>>,
    {
        if !self.quiet {
            writeln!(out, "--- Starting analysis: {name} ---")?;
        }
        let mut count = 0;
        for m in matches {
            writeln!(
                out,
                "  Keyword found: C = '{}', translation = '{}'",
                m.spelling, m.translation
            )?;
            count += 1;
        }
        if !self.quiet {
            writeln!(out, "--- Analysis finished ({count} keywords) ---")?;
        }
        Ok(count)
    }

    fn write_summary<'t, W, I>(&self, out: &mut W, matches: I) -> io::Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = Match<'t>>,
    {
        let mut counts: IndexMap<Match<'t>, usize> = IndexMap::new();
        let mut total = 0;
        for m in matches {
            *counts.entry(m).or_insert(0) += 1;
            total += 1;
        }
        for (m, count) in counts.iter() {
            writeln!(out, "{}\t{}\t{}", m.spelling, m.translation, count)?;
        }
        writeln!(out, "total\t{total}")?;
        Ok(total)
    }
}

/// Write every entry of `table`, one tab-separated pair per line.
pub fn write_keywords<W: Write>(out: &mut W, table: &KeywordTable) -> io::Result<()> {
    for (spelling, translation) in table.iter() {
        writeln!(out, "{spelling}\t{translation}")?;
    }
    Ok(())
}
