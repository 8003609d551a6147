use std::iter::Peekable;
use std::str::Chars;

use crate::keywords::KeywordTable;

use super::mode::Mode;
use super::token::Match;

/// Identifiers longer than this are truncated by default.
pub const MAX_TOKEN_LEN: usize = 99;

/// Create a scanner over `text` that reports keywords from `table`.
pub fn scan<'a, 't>(text: &'a str, table: &'t KeywordTable) -> Scanner<'a, 't> {
    Scanner::new(text, table)
}

/// Scan all of `text` and collect the matches.
pub fn scan_text<'t>(text: &str, table: &'t KeywordTable) -> Vec<Match<'t>> {
    scan(text, table).collect()
}

/// Single pass scanner that yields keyword matches found in code.
///
/// Comments, string literals, and char literals are skipped. Text
/// inside them never contributes to an identifier. Opening one of them
/// does *not* end the identifier being collected, so `in/**/t` is read
/// as `int`.
///
/// A closing quote is recognized only when the character right before
/// it is not a backslash. This is a plain one character lookback, so
/// `"\\"` is not seen as closed.
pub struct Scanner<'a, 't> {
    chars: Peekable<Chars<'a>>,
    table: &'t KeywordTable,
    mode: Mode,
    /// Characters of the identifier currently being collected.
    buffer: String,
    /// Characters past this length are dropped; `None` means no limit.
    max_token_len: Option<usize>,
    previous_char: Option<char>,
    current_char: Option<char>,
}

impl<'a, 't> Scanner<'a, 't> {
    pub fn new(text: &'a str, table: &'t KeywordTable) -> Self {
        log::trace!("BEGIN: scan ({} bytes)", text.len());
        Self {
            chars: text.chars().peekable(),
            table,
            mode: Mode::default(),
            buffer: String::with_capacity(MAX_TOKEN_LEN),
            max_token_len: Some(MAX_TOKEN_LEN),
            previous_char: None,
            current_char: None,
        }
    }

    /// Set the maximum identifier length. Pass `None` to collect
    /// identifiers of any length.
    pub fn with_max_token_len(mut self, max_token_len: Option<usize>) -> Self {
        self.max_token_len = max_token_len;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Consume and return the next character, remembering the one
    /// before it for escape checks.
    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.previous_char = self.current_char.replace(c);
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn set_mode(&mut self, mode: Mode) {
        log::trace!("MODE: {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    /// Process the character that was just consumed.
    fn step(&mut self, c: char) -> Option<Match<'t>> {
        match self.mode {
            Mode::Code => return self.step_code(c),
            Mode::LineComment => {
                if c == '\n' {
                    self.set_mode(Mode::Code);
                }
            }
            Mode::BlockComment => {
                if c == '*' && self.peek() == Some('/') {
                    self.next_char();
                    self.set_mode(Mode::Code);
                }
            }
            Mode::StringLiteral => {
                if c == '"' && self.previous_char != Some('\\') {
                    self.set_mode(Mode::Code);
                }
            }
            Mode::CharLiteral => {
                if c == '\'' && self.previous_char != Some('\\') {
                    self.set_mode(Mode::Code);
                }
            }
        }
        None
    }

    fn step_code(&mut self, c: char) -> Option<Match<'t>> {
        match (c, self.peek()) {
            ('/', Some('/')) => {
                self.next_char();
                self.set_mode(Mode::LineComment);
            }
            ('/', Some('*')) => {
                self.next_char();
                self.set_mode(Mode::BlockComment);
            }
            ('"', _) => self.set_mode(Mode::StringLiteral),
            ('\'', _) => self.set_mode(Mode::CharLiteral),
            (c, _) if c.is_ascii_alphabetic() || c == '_' => self.push_char(c),
            (c, _) if c.is_ascii_digit() && !self.buffer.is_empty() => {
                self.push_char(c)
            }
            _ => return self.flush(),
        }
        None
    }

    fn push_char(&mut self, c: char) {
        // Only ASCII is ever pushed, so byte length == char count.
        match self.max_token_len {
            Some(max) if self.buffer.len() >= max => (),
            _ => self.buffer.push(c),
        }
    }

    /// End the current identifier, returning a match if it's a keyword.
    /// The buffer is cleared either way.
    fn flush(&mut self) -> Option<Match<'t>> {
        if self.buffer.is_empty() {
            return None;
        }
        let table = self.table;
        let result = table
            .get_entry(self.buffer.as_str())
            .map(|(spelling, translation)| Match::new(spelling, translation));
        if let Some(found) = &result {
            log::trace!("MATCH: {found}");
        }
        self.buffer.clear();
        result
    }

    /// Handle end of input. An identifier that runs up to the end of
    /// the text is still reported, but nothing is reported from inside
    /// an unterminated comment or literal.
    fn finish(&mut self) -> Option<Match<'t>> {
        if self.mode.is_code() {
            self.flush()
        } else {
            if !self.buffer.is_empty() {
                log::trace!("END: discarding {:?} inside {}", self.buffer, self.mode);
                self.buffer.clear();
            }
            None
        }
    }
}

impl<'a, 't> Iterator for Scanner<'a, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(c) = self.next_char() {
            if let Some(found) = self.step(c) {
                return Some(found);
            }
        }
        self.finish()
    }
}
