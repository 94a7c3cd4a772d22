//! Tag Classification
//!
//! Categorizes a token by pattern and extracts the name used to pair openers
//! with closers.
//!
//! Classification order matters: a token such as `< /a>` satisfies both the
//! opening and the closing pattern, and is a closer.

use once_cell::sync::Lazy;
use regex::Regex;

static CLOSING_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A<(?-u:\s)*/[^<>]*>\z").expect("closing tag pattern is valid"));
static OPENING_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A<(?-u:\s)*[^/<>][^<>]*>\z").expect("opening tag pattern is valid"));
static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A<[^<>]*>\z").expect("tag pattern is valid"));

/// The shape of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<name ...>`
    Opening,
    /// `</name>`, whitespace allowed before the slash
    Closing,
    /// Bracketed but neither of the above, e.g. `<>`
    OtherTag,
    Text,
}

/// Determine the kind of a token from its text.
pub fn classify(token: &str) -> TokenKind {
    if CLOSING_TAG.is_match(token) {
        TokenKind::Closing
    } else if OPENING_TAG.is_match(token) {
        TokenKind::Opening
    } else if ANY_TAG.is_match(token) {
        TokenKind::OtherTag
    } else {
        TokenKind::Text
    }
}

/// The lowercase first ASCII-alphanumeric word of a token.
///
/// Every other character separates words, so `<DIV class=x>` and `</div>` both
/// yield `div`. Returns `None` when the token has no alphanumeric content.
pub fn normalized_name(token: &str) -> Option<String> {
    token
        .split(|c: char| !c.is_ascii_alphanumeric())
        .find(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
}

/// Whether an opener and a closer name the same tag.
///
/// Unnamed tags never match anything, including each other.
pub fn tags_match(opening: &str, closing: &str) -> bool {
    match (normalized_name(opening), normalized_name(closing)) {
        (Some(open), Some(close)) => open == close,
        _ => false,
    }
}

/// The closing tag synthesized for an opener, e.g. `</div>` for `<DIV id=1>`.
pub fn closing_tag_for(opening: &str) -> String {
    format!("</{}>", normalized_name(opening).unwrap_or_default())
}
