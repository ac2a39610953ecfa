/*
 * lib.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! Pretty-printer document tree for eexfmt.
//!
//! The layout engine emits a generic document tree: text leaves, plain
//! lists, nodes wrapping a single child under a `contents` role, nodes
//! carrying an ordered child sequence under a `parts` role, and a small
//! set of line-breaking markers. This crate models that tree as a closed
//! tagged union, [`DocNode`], so that a node claiming both the `contents`
//! and `parts` roles at once is structurally unrepresentable.
//!
//! The shape-sniffed form the engine actually produces (JSON strings,
//! arrays, and role-keyed objects) is handled at the boundary by the
//! [`layout`] module, which is where the conflicting-role and
//! unrecognized-kind faults are raised.

pub mod error;
pub mod layout;
pub mod node;

pub use error::{DocError, DocResult};
pub use layout::{from_layout, to_layout};
pub use node::{DocNode, MarkerKind};
