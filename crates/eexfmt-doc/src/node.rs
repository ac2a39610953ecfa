/*
 * node.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! The document tree node type.
//!
//! [`DocNode`] is a closed tagged union of every node shape the layout
//! engine can hand us. Construction helpers mirror the engine's builder
//! vocabulary (`text`, `group`, `parts`, markers) so decoders and tests
//! can assemble trees without spelling out enum variants everywhere.

/// A node in the pretty-printed document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DocNode {
    /// A text leaf.
    Text(String),

    /// A bare ordered sequence of nodes.
    List(Vec<DocNode>),

    /// A node wrapping exactly one child under the `contents` role
    /// (the engine's group/indent family).
    Contents(Box<DocNode>),

    /// A node carrying an ordered child sequence under the `parts` role
    /// (the engine's concat family).
    Parts(Vec<DocNode>),

    /// A line-breaking marker leaf.
    Marker(MarkerKind),
}

/// The marker leaves the layout engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Forces every enclosing group to break.
    BreakParent,
    /// A line break that always renders as a newline.
    ForcedLine,
    /// A line break that renders as a space unless its group breaks.
    Line,
    /// A line break that renders as nothing unless its group breaks.
    SoftLine,
    /// Content that renders only when the enclosing group breaks.
    IfBreak,
}

impl Default for DocNode {
    fn default() -> Self {
        DocNode::Text(String::new())
    }
}

impl DocNode {
    /// Create a text leaf.
    pub fn text(s: impl Into<String>) -> Self {
        DocNode::Text(s.into())
    }

    /// Create a bare list node.
    pub fn list(children: Vec<DocNode>) -> Self {
        DocNode::List(children)
    }

    /// Wrap a single child under the `contents` role.
    pub fn group(inner: DocNode) -> Self {
        DocNode::Contents(Box::new(inner))
    }

    /// Create a node with children under the `parts` role.
    pub fn parts(children: Vec<DocNode>) -> Self {
        DocNode::Parts(children)
    }

    /// Create a break-parent marker.
    pub fn break_parent() -> Self {
        DocNode::Marker(MarkerKind::BreakParent)
    }

    /// Create a forced line break marker.
    pub fn forced_line() -> Self {
        DocNode::Marker(MarkerKind::ForcedLine)
    }

    /// Create a space-when-flat line break marker.
    pub fn line() -> Self {
        DocNode::Marker(MarkerKind::Line)
    }

    /// Create a soft line break marker.
    pub fn soft_line() -> Self {
        DocNode::Marker(MarkerKind::SoftLine)
    }

    /// Create an if-break marker.
    pub fn if_break() -> Self {
        DocNode::Marker(MarkerKind::IfBreak)
    }

    /// The leaf text, if this node is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DocNode::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this node is a text leaf containing only whitespace.
    pub fn is_whitespace_text(&self) -> bool {
        matches!(self, DocNode::Text(s) if s.trim().is_empty())
    }

    /// Whether this node is a space-when-flat line break marker.
    pub fn is_line(&self) -> bool {
        matches!(self, DocNode::Marker(MarkerKind::Line))
    }

    /// Whether this node is a soft line break marker.
    pub fn is_soft_line(&self) -> bool {
        matches!(self, DocNode::Marker(MarkerKind::SoftLine))
    }

    /// Whether this node is a forced line break marker.
    pub fn is_forced_line(&self) -> bool {
        matches!(self, DocNode::Marker(MarkerKind::ForcedLine))
    }
}
