/*
 * walker.rs
 * Copyright (c) 2026 eexfmt contributors
 */

//! Iterative tree walk that resolves placeholders reachable by direct
//! tree identity.
//!
//! The walk is a depth-first traversal driven by an explicit frame
//! stack rather than call recursion. Each frame owns the child sequence
//! of one ancestor level: children are detached from their node on
//! descent and reattached on pop, so in-place replacement during the
//! walk cannot alias or dangle.
//!
//! Two placeholder shapes are resolved here:
//!
//! - a placeholder that appears whole in a single text leaf is replaced
//!   in place;
//! - a split placeholder, whose opening half (`<EEXT<n>`) and closing
//!   fragment (`>` or `/>`) were emitted as separate leaves by layout,
//!   is recombined through *chase mode*: between the opening half and
//!   the closing fragment only whitespace leaves and markers are
//!   tolerated, and on success the resolved text replaces the whole
//!   construct starting at the opening half's slot at the shallowest
//!   level the chase has surfaced to. A closing fragment found at that
//!   level stays in the sequence; one buried deeper is dropped with the
//!   rest of the construct. No placeholder fragment survives a
//!   successful chase.
//!
//! Script-scoped placeholders are deliberately not resolved here; their
//! deferred map deletion belongs to the substitution pass.

use eexfmt_doc::DocNode;

use crate::error::{DecodeError, DecodeResult};
use crate::expression::ExpressionMap;
use crate::grammar;

/// How the detached child sequence of a frame reattaches to its node.
enum Role {
    List,
    Parts,
    Contents,
}

/// One suspended ancestor level of the traversal.
struct Frame {
    /// The sequence being iterated at this level, with the children of
    /// `seq[resume - 1]` detached into the level below.
    seq: Vec<DocNode>,
    /// Index at which iteration of `seq` resumes after the pop.
    resume: usize,
    /// How to reattach the detached children on pop.
    role: Role,
    /// Set when a chase replaced the construct this frame descended
    /// into; the detached subtree is dropped instead of reattached.
    clobbered: bool,
}

/// State between detecting a split-tag opening half and its closing fragment.
struct Chase {
    /// The opening half's trimmed text (start of the composite key).
    tag_start: String,
    /// Frame-stack depth of the sequence owning the construct. The
    /// current sequence counts as depth `frames.len()`; updated on
    /// every pop that surfaces above it while the chase is active.
    depth: usize,
    /// Index of the construct's first slot in the `depth`-level
    /// sequence: the opening half itself, or the subtree it sits in
    /// once the chase has popped out of that subtree.
    start: usize,
}

enum Step {
    Skip,
    Descend,
    ChaseOpen(String),
    ChaseClose(String),
    ChaseGarbage(String),
    Whole(String),
}

/// Walk `root` in place, resolving whole and split placeholders and
/// removing the consumed keys from `map`.
pub fn walk(root: &mut DocNode, map: &mut ExpressionMap) -> DecodeResult<()> {
    let mut frames: Vec<Frame> = Vec::new();
    let mut cur: Vec<DocNode> = vec![std::mem::take(root)];
    let mut idx = 0usize;
    let mut chase: Option<Chase> = None;

    loop {
        while idx < cur.len() {
            let i = idx;
            idx += 1;

            let step = match &cur[i] {
                DocNode::Marker(_) => Step::Skip,
                DocNode::Text(text) => {
                    let trimmed = text.trim();
                    if chase.is_some() {
                        if grammar::is_split_close(trimmed) {
                            Step::ChaseClose(trimmed.to_owned())
                        } else if trimmed.is_empty() {
                            Step::Skip
                        } else {
                            Step::ChaseGarbage(text.clone())
                        }
                    } else if grammar::is_split_open(trimmed) {
                        Step::ChaseOpen(trimmed.to_owned())
                    } else if grammar::is_standalone(trimmed) {
                        Step::Whole(trimmed.to_owned())
                    } else {
                        Step::Skip
                    }
                }
                _ => Step::Descend,
            };

            match step {
                Step::Skip => {}

                Step::Whole(key) => {
                    let record = map.take(&key, "")?;
                    cur[i] = DocNode::Text(record.print);
                }

                Step::ChaseOpen(tag_start) => {
                    tracing::trace!(tag_start = %tag_start, "entering split-tag chase");
                    chase = Some(Chase {
                        tag_start,
                        depth: frames.len(),
                        start: i,
                    });
                }

                Step::ChaseClose(close) => {
                    if let Some(active) = chase.take() {
                        let record = map.take(&active.tag_start, &close)?;
                        if active.depth == frames.len() {
                            // Surfaced: replace the construct from the opening
                            // half up to the closing leaf, which stays.
                            cur[active.start] = DocNode::Text(record.print);
                            cur.drain(active.start + 1..i);
                            idx = active.start + 2;
                        } else {
                            // The closing fragment sits deeper than the chase
                            // surfaced to; replace the construct at the
                            // candidate level, closing subtree included.
                            let frame = &mut frames[active.depth];
                            frame.seq[active.start] = DocNode::Text(record.print);
                            frame.seq.drain(active.start + 1..frame.resume);
                            frame.resume = active.start + 1;
                            frame.clobbered = true;
                        }
                        tracing::trace!("split-tag chase resolved");
                    }
                }

                Step::ChaseGarbage(fragment) => {
                    return Err(DecodeError::MalformedSplitTag { fragment });
                }

                Step::Descend => {
                    let role;
                    let children = match &mut cur[i] {
                        DocNode::List(items) => {
                            role = Role::List;
                            std::mem::take(items)
                        }
                        DocNode::Parts(items) => {
                            role = Role::Parts;
                            std::mem::take(items)
                        }
                        DocNode::Contents(child) => {
                            role = Role::Contents;
                            vec![std::mem::take(child.as_mut())]
                        }
                        // Leaves were handled above.
                        _ => continue,
                    };
                    let parent = std::mem::replace(&mut cur, children);
                    frames.push(Frame {
                        seq: parent,
                        resume: idx,
                        role,
                        clobbered: false,
                    });
                    idx = 0;
                }
            }
        }

        // Sequence exhausted: pop back to the parent, or finish at the root.
        let Some(frame) = frames.pop() else { break };
        let Frame {
            mut seq,
            resume,
            role,
            clobbered,
        } = frame;
        let mut children = std::mem::take(&mut cur);
        if !clobbered {
            match (&mut seq[resume - 1], role) {
                (DocNode::List(items), Role::List) => *items = children,
                (DocNode::Parts(items), Role::Parts) => *items = children,
                (DocNode::Contents(slot), Role::Contents) => {
                    if let Some(only) = children.pop() {
                        *slot.as_mut() = only;
                    }
                }
                // The shell cannot change variant while its children are
                // detached; nothing to reattach otherwise.
                _ => {}
            }
        }
        cur = seq;
        idx = resume;
        if let Some(active) = &mut chase {
            if frames.len() < active.depth {
                active.depth = frames.len();
                active.start = resume - 1;
            }
        }
    }

    *root = cur.pop().unwrap_or_default();
    Ok(())
}
