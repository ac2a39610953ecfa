/*
 * strategy.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! Context-specific decoding strategies.
//!
//! Some structural contexts own their decoding entirely: placeholders
//! inside table/head elements, self-closing tags inside text, and
//! attribute positions each need rewrites the generic pass does not
//! know about. The pass only decides *which* context applies; the
//! decoding itself is delegated through this trait.
//!
//! Implementations must return structurally valid child sequences. The
//! default methods claim no context and pass children through, so an
//! implementation overrides only the contexts it owns.

use eexfmt_doc::DocNode;

use crate::expression::ExpressionMap;

/// External decoders for the structural contexts the generic
/// substitution pass delegates to.
pub trait ContextStrategies {
    /// Whether the children sit in a table or head element context.
    fn is_in_table_or_head(&self, _children: &[DocNode]) -> bool {
        false
    }

    /// Decode the non-conditional placeholders a table/head context
    /// owns, returning the partially decoded children. The generic
    /// pass re-runs once over the result to catch the rest.
    fn decode_in_table_or_head(
        &self,
        children: Vec<DocNode>,
        _map: &mut ExpressionMap,
    ) -> Vec<DocNode> {
        children
    }

    /// Whether the children are a self-closing tag inside text content.
    fn is_self_closing_in_text(&self, _children: &[DocNode]) -> bool {
        false
    }

    /// Decode a self-closing-in-text context, returning the decoded
    /// children and the updated whitespace-removal flag.
    fn decode_self_closing_in_text(
        &self,
        children: Vec<DocNode>,
        _map: &mut ExpressionMap,
    ) -> (Vec<DocNode>, bool) {
        (children, false)
    }

    /// Whether the children sit in an element (attribute) context.
    fn is_in_element(&self, _children: &[DocNode]) -> bool {
        false
    }

    /// Decode placeholders in attribute positions.
    fn decode_in_attributes(
        &self,
        children: Vec<DocNode>,
        _map: &mut ExpressionMap,
    ) -> Vec<DocNode> {
        children
    }
}

/// Strategies that claim no context at all.
///
/// Use this when no specialized decoders are wired up, or in tests that
/// exercise only the generic rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStrategies;

impl ContextStrategies for NullStrategies {}
