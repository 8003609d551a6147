use std::fmt;

/// A keyword found in code along with its translation. Both strings
/// are borrowed from the keyword table that produced the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match<'t> {
    pub spelling: &'t str,
    pub translation: &'t str,
}

impl<'t> Match<'t> {
    pub fn new(spelling: &'t str, translation: &'t str) -> Self {
        Self { spelling, translation }
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.spelling, self.translation)
    }
}
