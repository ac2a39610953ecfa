/*
 * grammar.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! The canonical lexical grammar for placeholder tokens.
//!
//! Every match site in the crate goes through these predicates, so the
//! token families are defined exactly once:
//!
//! - standalone inline placeholder: `EEX<n>`
//! - split-pair opening half: `<EEXT<n>` (no closing bracket; the
//!   closing half is a bare `>` or `/>` fragment in a later leaf)
//! - complete tag form: `<EEXT<n>>` or `</EEXT<n>>` (block expression
//!   delimiters that survive layout as a single leaf)
//! - script-scoped placeholder: `EEXS<n>` (may recur verbatim before
//!   its enclosing scope closes)
//! - embedded occurrence: `EEX<n>` inside a larger literal, such as an
//!   attribute value
//!
//! The families cannot collide on the embedded pattern: `EEX` must be
//! followed immediately by a digit, which the `T` of a tag token and
//! the `S` of a script token both break.

use once_cell::sync::Lazy;
use regex::Regex;

static STANDALONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^EEX[0-9]+$").unwrap());
static SPLIT_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^</?EEXT[0-9]+$").unwrap());
static SPLIT_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/?>$").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^</?EEXT[0-9]+>$").unwrap());
static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^EEXS[0-9]+$").unwrap());
static EMBEDDED: Lazy<Regex> = Lazy::new(|| Regex::new(r"EEX[0-9]+").unwrap());

/// Whether trimmed leaf text is a standalone inline placeholder.
pub fn is_standalone(text: &str) -> bool {
    STANDALONE.is_match(text)
}

/// Whether trimmed leaf text is the opening half of a split placeholder tag.
pub fn is_split_open(text: &str) -> bool {
    SPLIT_OPEN.is_match(text)
}

/// Whether trimmed leaf text is the closing fragment of a split placeholder tag.
pub fn is_split_close(text: &str) -> bool {
    SPLIT_CLOSE.is_match(text)
}

/// Whether trimmed leaf text is a complete placeholder tag (`<EEXT<n>>` or
/// `</EEXT<n>>`).
pub fn is_tag(text: &str) -> bool {
    TAG.is_match(text)
}

/// Whether trimmed leaf text is a script-scoped placeholder.
pub fn is_script(text: &str) -> bool {
    SCRIPT.is_match(text)
}

/// Whether text contains a placeholder embedded in a larger literal.
pub fn has_embedded(text: &str) -> bool {
    EMBEDDED.is_match(text)
}

/// The embedded-occurrence pattern, for callers that substitute matches.
pub fn embedded() -> &'static Regex {
    &EMBEDDED
}
