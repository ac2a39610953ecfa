/*
 * layout.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! Conversion between the layout engine's generic JSON documents and
//! [`DocNode`] trees.
//!
//! The engine's form is shape-sniffed rather than tagged: a node is a
//! JSON string, an array, an object keyed by `contents` or `parts`, or a
//! `{type: ...}` marker object. This module is the single place where
//! those shapes are validated, so every malformed document fails here
//! rather than deep inside a traversal.

use serde_json::{Value, json};

use crate::error::{DocError, DocResult};
use crate::node::{DocNode, MarkerKind};

/// Parse a layout-engine document into a [`DocNode`] tree.
///
/// Fails with [`DocError::ConflictingNodeRole`] when an object carries
/// both a `contents` and a `parts` key, and with
/// [`DocError::UnrecognizedNodeKind`] for any other unknown shape.
pub fn from_layout(value: &Value) -> DocResult<DocNode> {
    match value {
        Value::String(s) => Ok(DocNode::Text(s.clone())),
        Value::Array(items) => {
            let children = items.iter().map(from_layout).collect::<DocResult<Vec<_>>>()?;
            Ok(DocNode::List(children))
        }
        Value::Object(obj) => {
            let contents = obj.get("contents");
            let parts = obj.get("parts");
            match (contents, parts) {
                (Some(_), Some(_)) => Err(DocError::ConflictingNodeRole),
                (Some(child), None) => Ok(DocNode::Contents(Box::new(from_layout(child)?))),
                (None, Some(children)) => {
                    // A single non-array child under `parts` is treated as a
                    // one-element sequence.
                    let children = match children {
                        Value::Array(items) => {
                            items.iter().map(from_layout).collect::<DocResult<Vec<_>>>()?
                        }
                        other => vec![from_layout(other)?],
                    };
                    Ok(DocNode::Parts(children))
                }
                (None, None) => marker_from_layout(obj),
            }
        }
        other => Err(DocError::UnrecognizedNodeKind {
            kind: json_kind(other).to_string(),
        }),
    }
}

fn marker_from_layout(obj: &serde_json::Map<String, Value>) -> DocResult<DocNode> {
    let kind = obj.get("type").and_then(Value::as_str).unwrap_or("");
    match kind {
        "break-parent" => Ok(DocNode::Marker(MarkerKind::BreakParent)),
        "line" => {
            if obj.get("hard").and_then(Value::as_bool).unwrap_or(false) {
                Ok(DocNode::Marker(MarkerKind::ForcedLine))
            } else if obj.get("soft").and_then(Value::as_bool).unwrap_or(false) {
                Ok(DocNode::Marker(MarkerKind::SoftLine))
            } else {
                Ok(DocNode::Marker(MarkerKind::Line))
            }
        }
        "if-break" => Ok(DocNode::Marker(MarkerKind::IfBreak)),
        other => Err(DocError::UnrecognizedNodeKind {
            kind: other.to_string(),
        }),
    }
}

/// Serialize a [`DocNode`] tree back into the layout engine's JSON form.
pub fn to_layout(node: &DocNode) -> Value {
    match node {
        DocNode::Text(s) => Value::String(s.clone()),
        DocNode::List(items) => Value::Array(items.iter().map(to_layout).collect()),
        DocNode::Contents(child) => json!({ "contents": to_layout(child) }),
        DocNode::Parts(items) => {
            json!({ "parts": items.iter().map(to_layout).collect::<Vec<_>>() })
        }
        DocNode::Marker(MarkerKind::BreakParent) => json!({ "type": "break-parent" }),
        DocNode::Marker(MarkerKind::ForcedLine) => json!({ "type": "line", "hard": true }),
        DocNode::Marker(MarkerKind::Line) => json!({ "type": "line" }),
        DocNode::Marker(MarkerKind::SoftLine) => json!({ "type": "line", "soft": true }),
        DocNode::Marker(MarkerKind::IfBreak) => json!({ "type": "if-break" }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
