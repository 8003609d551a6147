use std::fmt;

/// The region of the source the scanner is currently in. Exactly one
/// mode is active at any position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Code,
    LineComment,  // // ... \n
    BlockComment, // /* ... */
    StringLiteral, // "..."
    CharLiteral,  // '...'
}

impl Mode {
    /// Identifiers are only collected in code.
    pub fn is_code(&self) -> bool {
        matches!(self, Mode::Code)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Mode::*;
        let name = match self {
            Code => "code",
            LineComment => "line comment",
            BlockComment => "block comment",
            StringLiteral => "string literal",
            CharLiteral => "char literal",
        };
        write!(f, "{name}")
    }
}
