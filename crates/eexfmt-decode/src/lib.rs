/*
 * lib.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! Placeholder decoding for pretty-printed documents with embedded
//! template expressions.
//!
//! Before layout, embedded template expressions are replaced by opaque
//! placeholder tokens so the layout engine can treat the document as
//! plain markup. This crate runs after layout and restores the original
//! expressions into the resulting document tree:
//!
//! - the [`walker`] resolves placeholders that appear whole in a single
//!   leaf, and recombines split open/close tag halves scattered across
//!   separate leaves;
//! - the [`decoder`] runs a per-node substitution pass that reconciles
//!   layout-inserted whitespace with the whitespace the expression had
//!   in its original source, defers script-scoped key deletion to the
//!   enclosing scope's close, and delegates table/head, self-closing,
//!   and attribute contexts to external [`strategy`] implementations;
//! - the [`grammar`] module is the single lexical definition of every
//!   placeholder token family;
//! - the [`expression`] module owns the placeholder-to-expression map
//!   produced by the upstream tokenizer.
//!
//! The whole decode of one document is synchronous and single-threaded;
//! the expression map is mutably owned by one [`decode_document`] call
//! and is drained as placeholders are consumed.
//!
//! # Example
//!
//! ```
//! use eexfmt_decode::{ExpressionMap, ExpressionRecord, NullStrategies, decode_document};
//! use eexfmt_doc::DocNode;
//!
//! let mut map = ExpressionMap::new();
//! map.insert("EEX1", ExpressionRecord::standalone("<%= @user %>"));
//!
//! let doc = DocNode::parts(vec![
//!     DocNode::text("<span>"),
//!     DocNode::text("EEX1"),
//!     DocNode::text("</span>"),
//! ]);
//!
//! let decoded = decode_document(doc, &mut map, &NullStrategies).unwrap();
//! assert_eq!(
//!     decoded,
//!     DocNode::parts(vec![
//!         DocNode::text("<span>"),
//!         DocNode::text("<%= @user %>"),
//!         DocNode::text("</span>"),
//!     ])
//! );
//! assert!(map.is_empty());
//! ```

pub mod decoder;
pub mod error;
pub mod expression;
pub mod grammar;
pub mod strategy;
pub mod walker;

pub use decoder::decode_document;
pub use error::{DecodeError, DecodeResult};
pub use expression::{ExpressionKind, ExpressionMap, ExpressionRecord};
pub use strategy::{ContextStrategies, NullStrategies};
pub use walker::walk;
