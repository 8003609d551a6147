use indexmap::map::Entry;
use indexmap::IndexMap;

use super::result::{TableErr, TableResult};

/// An immutable mapping from keyword spelling to translation.
///
/// Entries keep the order they were declared in so the table can be
/// listed the way it was written. Lookups are exact and case-sensitive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeywordTable {
    entries: IndexMap<String, String>,
}

impl KeywordTable {
    /// Build a table from (spelling, translation) pairs. Fails on the
    /// first spelling that has already been seen.
    pub fn new<I, S, T>(pairs: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut entries: IndexMap<String, String> = IndexMap::new();
        for (spelling, translation) in pairs {
            match entries.entry(spelling.into()) {
                Entry::Occupied(entry) => {
                    return Err(TableErr::duplicate_spelling(entry.key().as_str()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(translation.into());
                }
            }
        }
        Ok(Self { entries })
    }

    /// Get the translation for `spelling`, if it's a keyword.
    pub fn lookup(&self, spelling: &str) -> Option<&str> {
        self.entries.get(spelling).map(|t| t.as_str())
    }

    /// Get the stored spelling and translation for `spelling`.
    pub fn get_entry(&self, spelling: &str) -> Option<(&str, &str)> {
        self.entries.get_key_value(spelling).map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.entries.contains_key(spelling)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (spelling, translation) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }
}
