/*
 * error.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! Error types for document tree construction.

use thiserror::Error;

/// Errors raised while converting a layout-engine document into a [`crate::DocNode`].
///
/// Both faults are fatal for the current document: the layout engine is
/// expected to produce structurally valid trees, so a violation indicates
/// an upstream bug rather than a recoverable condition.
#[derive(Debug, Error)]
pub enum DocError {
    /// A node claims both the single-child (`contents`) and multi-child
    /// (`parts`) roles at once.
    #[error("node carries both a `contents` and a `parts` role")]
    ConflictingNodeRole,

    /// A node is neither a text leaf, a list, a role-bearing object, nor
    /// a known marker.
    #[error("unrecognized node kind: {kind}")]
    UnrecognizedNodeKind { kind: String },
}

/// Result type for document tree operations.
pub type DocResult<T> = Result<T, DocError>;
