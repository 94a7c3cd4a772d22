//! Lexer
//!
//! Splits raw markup into a flat sequence of tokens. There are two token shapes:
//!
//!     Tag-like:
//!         Everything from a `<` up to the next `>`. The run may itself contain a `<`
//!         (`<a<b>`), in which case the classifier will not accept it as a tag and it
//!         ends up as plain text further down the pipeline.
//!
//!     Text:
//!         A maximal run of characters that are neither `<` nor `>`.
//!
//! Both shapes are trimmed of ASCII whitespace and empty results are dropped. Brackets that belong to
//! neither shape (a `<` with no later `>`, a stray `>`) are skipped, so any input
//! tokenizes without error.
//!
//! Classification of tag-like tokens lives in [tag_classification].

pub mod tag_classification;

pub use tag_classification::{classify, normalized_name, TokenKind};

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::Range;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>|[^<>]+").expect("token pattern is valid"));

/// A trimmed slice of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Token<'a> {
    /// The trimmed token text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte range of the trimmed text in the source.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    pub fn kind(&self) -> TokenKind {
        classify(self.text)
    }

    pub fn name(&self) -> Option<String> {
        normalized_name(self.text)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// ASCII whitespace, vertical tab and NUL. Non-ASCII spaces such as U+00A0 are
/// content and survive trimming.
fn is_strip_char(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B' || c == '\0'
}

/// Tokenize source text.
///
/// Tokens come back in source order, each one trimmed and non-empty.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = TOKEN_PATTERN
        .find_iter(source)
        .filter_map(|found| {
            let raw = found.as_str();
            let text = raw.trim_matches(is_strip_char);
            if text.is_empty() {
                return None;
            }
            let leading = raw.len() - raw.trim_start_matches(is_strip_char).len();
            Some(Token {
                text,
                start: found.start() + leading,
            })
        })
        .collect();

    tracing::debug!(bytes = source.len(), tokens = tokens.len(), "tokenized source");
    tokens
}
