/*
 * decoder.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! The generic substitution pass.
//!
//! After the tree walker has resolved every placeholder reachable by
//! direct tree identity, each `parts`-bearing node gets a substitution
//! pass over its child sequence: whitespace the layout engine inserted
//! next to an expression that had none in the source is removed,
//! placeholders embedded in larger literals are substituted, script-
//! scoped placeholders are substituted with deferred key deletion, and
//! the remaining placeholder shapes are rewritten with line-break
//! markers matching their structural role.
//!
//! The pass runs per document node, bottom-up. One [`PassState`] is
//! created per document and threaded through every per-node invocation,
//! so the whitespace-removal flag set while decoding one node can
//! consume a layout-inserted separator at the start of the next, but
//! nothing leaks across documents.

use eexfmt_doc::DocNode;

use crate::error::DecodeResult;
use crate::expression::{ExpressionKind, ExpressionMap};
use crate::grammar;
use crate::strategy::ContextStrategies;

/// Mutable state threaded through one document's substitution passes.
#[derive(Debug, Default)]
struct PassState {
    /// A pending request to drop the next layout-inserted space or soft
    /// line, because the preceding expression had no adjacent
    /// whitespace in its source.
    remove_whitespace: bool,
    /// Script-scoped keys substituted since the last scope close; their
    /// map entries are deleted when the closing `</script>` is reached.
    deferred_script_keys: Vec<String>,
}

/// Decode every placeholder in `doc`, consuming entries from `map`.
///
/// This is the entry point for one document: it visits every node
/// bottom-up, running the tree walker and then the substitution pass on
/// each `parts`-bearing node. The map should be fully drained when the
/// call returns; residual non-script entries indicate a tokenizer/tree
/// mismatch upstream, which is logged but left for the caller to judge.
pub fn decode_document<S: ContextStrategies>(
    doc: DocNode,
    map: &mut ExpressionMap,
    strategies: &S,
) -> DecodeResult<DocNode> {
    let mut state = PassState::default();
    let decoded = decode_below(doc, map, strategies, &mut state)?;
    if !map.is_empty() {
        tracing::debug!(residual = map.len(), "expression map not drained after decode");
    }
    Ok(decoded)
}

/// Visit children first, then apply the substitution pass to the node.
fn decode_below<S: ContextStrategies>(
    node: DocNode,
    map: &mut ExpressionMap,
    strategies: &S,
    state: &mut PassState,
) -> DecodeResult<DocNode> {
    let node = match node {
        DocNode::List(items) => DocNode::List(
            items
                .into_iter()
                .map(|child| decode_below(child, map, strategies, state))
                .collect::<DecodeResult<Vec<_>>>()?,
        ),
        DocNode::Parts(items) => DocNode::Parts(
            items
                .into_iter()
                .map(|child| decode_below(child, map, strategies, state))
                .collect::<DecodeResult<Vec<_>>>()?,
        ),
        DocNode::Contents(child) => {
            DocNode::Contents(Box::new(decode_below(*child, map, strategies, state)?))
        }
        leaf => leaf,
    };
    decode_node(node, map, strategies, state, false)
}

/// One substitution-pass invocation over a single node.
///
/// `reentry` is set for the bounded re-invocation after a table/head
/// delegation, which skips that classification so a node sees at most
/// two passes.
fn decode_node<S: ContextStrategies>(
    mut node: DocNode,
    map: &mut ExpressionMap,
    strategies: &S,
    state: &mut PassState,
    reentry: bool,
) -> DecodeResult<DocNode> {
    crate::walker::walk(&mut node, map)?;

    let DocNode::Parts(parts) = node else {
        return Ok(node);
    };
    if map.is_empty() && !state.remove_whitespace {
        return Ok(DocNode::Parts(parts));
    }

    // Classification order is a preserved behavior: table/head first,
    // then self-closing-in-text, then attributes.
    if !reentry && strategies.is_in_table_or_head(&parts) {
        tracing::debug!("delegating to table/head decoder");
        let partly = strategies.decode_in_table_or_head(parts, map);
        return decode_node(DocNode::Parts(partly), map, strategies, state, true);
    }

    if strategies.is_self_closing_in_text(&parts) {
        tracing::debug!("delegating to self-closing-in-text decoder");
        let (decoded, remove_whitespace) = strategies.decode_self_closing_in_text(parts, map);
        state.remove_whitespace = remove_whitespace;
        return Ok(DocNode::Parts(decoded));
    }

    if strategies.is_in_element(&parts) {
        tracing::debug!("delegating to attribute decoder");
        let decoded = strategies.decode_in_attributes(parts, map);
        return Ok(DocNode::Parts(decoded));
    }

    let mut out: Vec<DocNode> = Vec::with_capacity(parts.len());

    for part in parts {
        // A closing script tag ends the scope of every deferred
        // script-scoped key.
        if part.as_text().map(str::trim) == Some("</script>") {
            if !state.deferred_script_keys.is_empty() {
                tracing::debug!(
                    count = state.deferred_script_keys.len(),
                    "flushing deferred script keys"
                );
            }
            for key in state.deferred_script_keys.drain(..) {
                map.remove(&key);
            }
            out.push(part);
            continue;
        }

        // An expression that declared no trailing source whitespace
        // must not have a layout-inserted space resurrected next to it.
        if state.remove_whitespace && part.as_text() == Some(" ") {
            state.remove_whitespace = false;
            continue;
        }

        // Same for a layout-inserted line break instead of a space.
        if state.remove_whitespace && (part.is_line() || part.is_soft_line()) {
            state.remove_whitespace = false;
            continue;
        }

        // Placeholder embedded in a larger literal, e.g. an attribute
        // value like src="EEX3".
        let mut substituted = None;
        if let Some(text) = literal_text(&part) {
            if grammar::has_embedded(text) {
                substituted = Some(substitute_embedded(text, map)?);
            }
        }
        if let Some(text) = substituted {
            out.push(with_literal_text(&part, text));
            continue;
        }

        // Script-scoped placeholder: substitute, but keep the map entry
        // until the scope closes because the same token may recur.
        let mut script = None;
        if let Some(text) = literal_text(&part) {
            let trimmed = text.trim();
            if grammar::is_script(trimmed) {
                let record = map.resolve(trimmed)?;
                script = Some((trimmed.to_owned(), record.print.clone()));
            }
        }
        if let Some((key, print)) = script {
            if !state.deferred_script_keys.contains(&key) {
                state.deferred_script_keys.push(key);
            }
            out.push(with_literal_text(&part, print));
            continue;
        }

        // Self-closing tag printed immediately after an open tag.
        if let Some(shape) = self_closing_shape(&part) {
            let mut key = shape.payload.as_str();
            if let Some(rest) = key.strip_prefix("/>") {
                out.push(DocNode::text("/>"));
                key = rest.trim_start();
            }
            let record = map.take(key, "")?;

            // The child emitted just before this one is a
            // layout-synthesized separator unless the source had
            // whitespace there or the separator is a forced break.
            if !record.after_whitespace && out.last().is_some_and(|last| !last.is_forced_line()) {
                out.pop();
            }

            out.push(DocNode::text(record.print.clone()));

            if !record.before_whitespace && record.before_inline_end_tag {
                state.remove_whitespace = true;
            } else if record.before_whitespace && shape.trailing_line {
                // Keep the expression and its following break together
                // so layout cannot split them apart. The break renders
                // as a space when flat, matching the source whitespace.
                out.pop();
                out.push(DocNode::group(DocNode::parts(vec![
                    DocNode::text(record.print),
                    DocNode::line(),
                ])));
            }
            continue;
        }

        // Standalone placeholder tag still present in the map.
        let mut tag_key = None;
        if let Some(text) = literal_text(&part) {
            let key = text.trim();
            if grammar::is_tag(key) && map.contains(key) {
                tag_key = Some(key.to_owned());
            }
        }
        if let Some(key) = tag_key {
            let record = map.take(&key, "")?;

            if !record.print.is_empty() {
                out.push(DocNode::text(record.print));
                if record.is_mid_expression
                    || matches!(record.kind, ExpressionKind::Start | ExpressionKind::MiddleNested)
                {
                    out.push(DocNode::break_parent());
                }
                continue;
            }

            // A control-construct delimiter with no visible text.
            if record.is_mid_expression {
                state.remove_whitespace = true;
            }
            if record.kind == ExpressionKind::End {
                // Collapse the blank line a closed block leaves behind.
                if let Some(DocNode::Contents(inner)) = out.last_mut() {
                    if let DocNode::Parts(sub) = inner.as_mut() {
                        sub.pop();
                    }
                }
            }
            continue;
        }

        out.push(part);
    }

    Ok(DocNode::Parts(out))
}

/// The literal text of a `Text` or `Contents(Text)` child.
fn literal_text(part: &DocNode) -> Option<&str> {
    match part {
        DocNode::Text(text) => Some(text),
        DocNode::Contents(inner) => match inner.as_ref() {
            DocNode::Text(text) => Some(text),
            _ => None,
        },
        _ => None,
    }
}

/// Rebuild a `Text` or `Contents(Text)` child with new literal text.
fn with_literal_text(part: &DocNode, text: String) -> DocNode {
    match part {
        DocNode::Contents(_) => DocNode::group(DocNode::Text(text)),
        _ => DocNode::Text(text),
    }
}

/// Substitute every embedded placeholder occurrence in `text`,
/// consuming each key from the map.
fn substitute_embedded(text: &str, map: &mut ExpressionMap) -> DecodeResult<String> {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for found in grammar::embedded().find_iter(text) {
        result.push_str(&text[last..found.start()]);
        let record = map.take(found.as_str(), "")?;
        result.push_str(&record.print);
        last = found.end();
    }
    result.push_str(&text[last..]);
    Ok(result)
}

/// The extracted payload of a "self-closing tag immediately following
/// an open tag" child.
struct SelfClosing {
    /// Trimmed placeholder text, possibly prefixed by the open tag's
    /// own `/>` close marker.
    payload: String,
    /// Whether the source fragment carried a trailing space-when-flat
    /// line break.
    trailing_line: bool,
}

/// Match the nested shape layout gives a self-closing tag printed
/// directly after an open tag, and extract its placeholder payload.
fn self_closing_shape(part: &DocNode) -> Option<SelfClosing> {
    let DocNode::Contents(outer) = part else {
        return None;
    };
    let DocNode::Contents(inner) = outer.as_ref() else {
        return None;
    };
    let DocNode::Parts(sub) = inner.as_ref() else {
        return None;
    };
    let DocNode::Contents(first) = sub.first()? else {
        return None;
    };
    let DocNode::Contents(leaf) = first.as_ref() else {
        return None;
    };
    let DocNode::Text(text) = leaf.as_ref() else {
        return None;
    };

    let payload = text.trim();
    let key = payload.strip_prefix("/>").unwrap_or(payload).trim_start();
    if !grammar::is_tag(key) {
        return None;
    }
    Some(SelfClosing {
        payload: payload.to_owned(),
        trailing_line: matches!(sub.get(2), Some(node) if node.is_line()),
    })
}
