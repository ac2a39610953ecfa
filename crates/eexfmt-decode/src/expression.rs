/*
 * expression.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! Expression records and the placeholder-to-expression map.
//!
//! The upstream tokenizer replaces every embedded expression with a
//! placeholder token and records the original expression here: the text
//! to substitute back, its structural role, and whether the source had
//! whitespace adjacent to it. The map is built once per document and is
//! mutably owned by a single decode invocation; entries are removed as
//! they are consumed, so a fully decoded document leaves the map empty
//! (script-scoped entries aside, which drain at their scope's close).
//!
//! Records arrive as JSON from the tokenizer, so the serde field names
//! keep the upstream spellings (`isMidExpression`, `beforeWhitespace`,
//! ...).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};

/// The structural role of an expression within its template construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionKind {
    /// A self-contained expression (`<%= ... %>`).
    #[default]
    Standalone,
    /// Opens a block construct (`<% if ... do %>`).
    Start,
    /// A middle delimiter (`<% else %>`).
    Middle,
    /// A middle delimiter of a nested construct.
    MiddleNested,
    /// Closes a block construct (`<% end %>`).
    End,
}

/// The original expression behind one placeholder token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionRecord {
    /// The expression text to substitute for the placeholder.
    pub print: String,

    /// Structural role of the expression.
    #[serde(rename = "type", default)]
    pub kind: ExpressionKind,

    /// Whether the expression sits mid-way through a surrounding
    /// expression statement.
    #[serde(rename = "isMidExpression", default)]
    pub is_mid_expression: bool,

    /// Whether the source had whitespace after the expression.
    #[serde(rename = "beforeWhitespace", default)]
    pub before_whitespace: bool,

    /// Whether the source had whitespace before the expression.
    #[serde(rename = "afterWhitespace", default)]
    pub after_whitespace: bool,

    /// Whether the expression sits directly before an inline closing tag.
    #[serde(rename = "beforeInlineEndTag", default)]
    pub before_inline_end_tag: bool,
}

impl ExpressionRecord {
    /// A standalone record with the given substitution text and no
    /// adjacent source whitespace.
    pub fn standalone(print: impl Into<String>) -> Self {
        Self {
            print: print.into(),
            kind: ExpressionKind::Standalone,
            is_mid_expression: false,
            before_whitespace: false,
            after_whitespace: false,
            before_inline_end_tag: false,
        }
    }
}

/// The placeholder-to-expression map for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpressionMap {
    entries: HashMap<String, ExpressionRecord>,
}

impl ExpressionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under a placeholder key.
    pub fn insert(&mut self, key: impl Into<String>, record: ExpressionRecord) {
        self.entries.insert(key.into(), record);
    }

    /// Whether any entries remain.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of remaining entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key, returning its record if it was present.
    pub fn remove(&mut self, key: &str) -> Option<ExpressionRecord> {
        self.entries.remove(key)
    }

    /// Look up a key without consuming it.
    ///
    /// Used for script-scoped placeholders, whose entries must survive
    /// until the enclosing scope closes. Fails with
    /// [`DecodeError::ExpressionNotFound`] when the key is absent.
    pub fn resolve(&self, key: &str) -> DecodeResult<&ExpressionRecord> {
        self.entries
            .get(key)
            .ok_or_else(|| DecodeError::ExpressionNotFound { key: key.to_string() })
    }

    /// Remove and return the record for a placeholder.
    ///
    /// Looks up `start` directly first; if absent, looks up `start`
    /// concatenated with `end` (the composite key of a split tag whose
    /// halves the caller recombined). A miss on both is fatal: the map
    /// is a closed set produced upstream, so an unknown key means the
    /// tokenizer and the tree disagree.
    pub fn take(&mut self, start: &str, end: &str) -> DecodeResult<ExpressionRecord> {
        if let Some(record) = self.entries.remove(start) {
            return Ok(record);
        }
        let full = format!("{start}{end}");
        self.entries
            .remove(&full)
            .ok_or(DecodeError::ExpressionNotFound { key: full })
    }
}

impl From<HashMap<String, ExpressionRecord>> for ExpressionMap {
    fn from(entries: HashMap<String, ExpressionRecord>) -> Self {
        Self { entries }
    }
}
