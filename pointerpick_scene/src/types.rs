// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers, flags, node kinds, and local data.

use glam::Affine3A;

use crate::geometry::Aabb3;

/// Identifier for a node in the scene.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ### Ordering
///
/// `NodeId` orders by slot index, then generation. Consumers that keep nodes in
/// ordered maps (for example a subscription registry) therefore enumerate them in
/// slot order, which for a scene without removals is creation order.
///
/// ### Liveness
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeId` still refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// The generation of the slot this identifier was issued for.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible (participates in rendering and ray queries).
        const VISIBLE  = 0b0000_0001;
        /// Node is pickable (participates in ray picking).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// What a node is: a container for other nodes, or intersectable geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    /// Pure container. Never intersected itself; pickers expand it into its children.
    Group,
    /// Renderable geometry, represented for picking by its local bounds.
    Mesh {
        /// Local (untransformed) bounds of the geometry.
        bounds: Aabb3,
    },
}

impl NodeKind {
    /// Returns true for [`NodeKind::Group`].
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group)
    }
}

/// Local data for a node.
#[derive(Clone, Debug)]
pub struct LocalNode {
    /// Group or mesh.
    pub kind: NodeKind,
    /// Local transform relative to parent space.
    pub local_transform: Affine3A,
    /// Visibility and picking flags.
    ///
    /// See [`NodeFlags`] for available bits and how they interact with [`QueryFilter`](crate::QueryFilter).
    pub flags: NodeFlags,
}

impl LocalNode {
    /// A group node with identity transform and default flags.
    pub fn group() -> Self {
        Self {
            kind: NodeKind::Group,
            ..Default::default()
        }
    }

    /// A mesh node with the given local bounds, identity transform, and default flags.
    pub fn mesh(bounds: Aabb3) -> Self {
        Self {
            kind: NodeKind::Mesh { bounds },
            ..Default::default()
        }
    }

    /// Replace the local transform.
    pub fn with_transform(mut self, local_transform: Affine3A) -> Self {
        self.local_transform = local_transform;
        self
    }
}

impl Default for LocalNode {
    fn default() -> Self {
        Self {
            kind: NodeKind::Group,
            local_transform: Affine3A::IDENTITY,
            flags: NodeFlags::default(),
        }
    }
}
