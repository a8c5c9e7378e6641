// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expand registered nodes into the leaf set handed to the ray picker.

use alloc::vec::Vec;

use crate::types::SceneGraph;

/// Expand `nodes` into leaves, depth-first and pre-order by child order.
///
/// Group nodes (those for which [`SceneGraph::children_of`] returns `Some`) are replaced by
/// the leaves of their subtree; empty groups contribute nothing. Leaves are emitted as-is.
/// A leaf reachable from several inputs (for example a registered group and its registered
/// child) appears once per input.
///
/// Iterative, so nesting depth is bounded only by memory.
pub fn flatten<K, S>(scene: &S, nodes: impl IntoIterator<Item = K>) -> Vec<K>
where
    K: Copy,
    S: SceneGraph<K> + ?Sized,
{
    let mut out = Vec::new();
    let mut stack = Vec::new();
    for root in nodes {
        stack.push(root);
        while let Some(node) = stack.pop() {
            match scene.children_of(&node) {
                Some(children) => stack.extend(children.iter().rev().copied()),
                None => out.push(node),
            }
        }
    }
    out
}
