/*
 * error.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! Error types for placeholder decoding.
//!
//! Every fault here is fatal for the current document. The decode is a
//! deterministic function of the tree and the expression map, so a
//! failure indicates a tokenizer/layout mismatch upstream; retrying
//! without changing the inputs cannot help, and there is no degraded
//! best-effort output mode.

use thiserror::Error;

/// Errors that can abort a document decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A placeholder key has no matching expression map entry.
    #[error("expression not found: \"{key}\"")]
    ExpressionNotFound { key: String },

    /// Non-whitespace content appeared between the halves of a split
    /// placeholder tag that is not a valid closing fragment.
    #[error("malformed split tag: unexpected content \"{fragment}\"")]
    MalformedSplitTag { fragment: String },

    /// The layout engine handed us a structurally invalid document.
    #[error(transparent)]
    Doc(#[from] eexfmt_doc::DocError),
}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
