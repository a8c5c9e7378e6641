// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, queries.

use alloc::vec::Vec;
use glam::Affine3A;

use crate::geometry::{Aabb3, Ray};
use crate::types::{LocalNode, NodeFlags, NodeId, NodeKind};

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level scene tree.
pub struct Tree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

/// A ray intersection with a mesh node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// The mesh that was hit.
    pub node: NodeId,
    /// Distance along the ray to the entry point.
    pub distance: f32,
    /// World-space entry point.
    pub point: glam::Vec3,
}

/// Filters applied during ray intersection.
///
/// Used by [`Tree::intersect_ray`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, only consider nodes marked [`NodeFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider nodes marked [`NodeFlags::PICKABLE`].
    pub pickable_only: bool,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalNode,
}

impl Node {
    fn new(generation: u32, local: LocalNode) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts the node as a root.
    pub fn insert(&mut self, parent: Option<NodeId>, local: LocalNode) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId stores 32-bit slot indices."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId stores 32-bit slot indices."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent.filter(|p| self.is_alive(*p)) {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node (and its subtree) from the tree.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).and_then(|n| n.parent) {
            self.unlink_parent(id, parent);
        }
        let mut stack = alloc::vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.nodes[cur.idx()].take() {
                stack.extend(node.children);
                self.free_list.push(cur.idx());
            }
        }
    }

    /// Reparent `id` under `new_parent` (or detach it as a root with `None`).
    ///
    /// Returns `false` and leaves the tree unchanged if either id is stale or if
    /// `new_parent` is `id` itself or one of its descendants.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if let Some(p) = new_parent {
            if !self.is_alive(p) || self.is_ancestor_or_self(id, p) {
                return false;
            }
        }
        if let Some(parent) = self.node(id).and_then(|n| n.parent) {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
        true
    }

    /// Update local transform.
    pub fn set_local_transform(&mut self, id: NodeId, tf: Affine3A) {
        if let Some(n) = self.node_mut(id) {
            n.local.local_transform = tf;
        }
    }

    /// Update node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_mut(id) {
            n.local.flags = flags;
        }
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    /// See [`NodeId`] docs for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Parent of a live node; `None` for roots and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// Children of a live node in insertion order.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Kind of a live node.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(|n| n.local.kind)
    }

    /// Flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node(id).map(|n| n.local.flags)
    }

    /// Local → world transform of a live node, composed from its ancestors.
    pub fn world_transform(&self, id: NodeId) -> Option<Affine3A> {
        let mut node = self.node(id)?;
        let mut tf = node.local.local_transform;
        while let Some(parent) = node.parent.and_then(|p| self.node(p)) {
            tf = parent.local.local_transform * tf;
            node = parent;
        }
        Some(tf)
    }

    /// World-space bounds of a live mesh node; `None` for groups and stale ids.
    pub fn world_bounds(&self, id: NodeId) -> Option<Aabb3> {
        match self.kind(id)? {
            NodeKind::Group => None,
            NodeKind::Mesh { bounds } => Some(bounds.transformed(self.world_transform(id)?)),
        }
    }

    /// Intersect a world-space ray with `candidates`, nearest first.
    ///
    /// Only live mesh nodes that pass `filter` are tested; groups are not expanded.
    /// Each candidate contributes at most one hit (its bounds entry point).
    /// Equal distances keep candidate order.
    pub fn intersect_ray(&self, ray: &Ray, candidates: &[NodeId], filter: QueryFilter) -> Vec<RayHit> {
        let mut hits: Vec<RayHit> = candidates
            .iter()
            .filter(|id| {
                let Some(flags) = self.flags(**id) else {
                    return false;
                };
                if filter.visible_only && !flags.contains(NodeFlags::VISIBLE) {
                    return false;
                }
                if filter.pickable_only && !flags.contains(NodeFlags::PICKABLE) {
                    return false;
                }
                true
            })
            .filter_map(|&id| {
                let bounds = self.world_bounds(id)?;
                let distance = bounds.intersect_ray(ray)?;
                Some(RayHit {
                    node: id,
                    distance,
                    point: ray.point_at(distance),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    // --- internals ---

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .filter(|n| n.generation == id.1)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.parent_of(id) {
                Some(p) => id = p,
                None => return false,
            }
        }
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = None;
        }
    }
}
