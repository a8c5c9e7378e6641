// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Pointerpick Scene.
//!
//! ## Feature
//!
//! Enable with `scene_adapter`.
//!
//! ## Notes
//!
//! [`SceneView`] borrows a [`Tree`] and implements [`SceneGraph`] over its [`NodeId`]s.
//! Only [`NodeKind::Group`] nodes are expanded during flattening; a mesh with children is
//! treated as a leaf. Stale ids behave like leaves that are never hit.

use alloc::vec::Vec;

use glam::Vec2;
use pointerpick_scene::{NodeId, NodeKind, PerspectiveCamera, QueryFilter, Tree};

use crate::types::{Camera, Intersection, ParentLookup, Ray, SceneGraph};

/// A borrowed view of a [`Tree`] with the filter applied to ray queries.
#[derive(Clone, Copy, Debug)]
pub struct SceneView<'a> {
    tree: &'a Tree,
    filter: QueryFilter,
}

impl<'a> SceneView<'a> {
    /// View `tree` with the default filter (every live mesh is pickable).
    pub fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            filter: QueryFilter::default(),
        }
    }

    /// Restrict ray queries with `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: QueryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The underlying tree.
    pub fn tree(&self) -> &'a Tree {
        self.tree
    }
}

impl ParentLookup<NodeId> for SceneView<'_> {
    fn parent_of(&self, node: &NodeId) -> Option<NodeId> {
        self.tree.parent_of(*node)
    }
}

impl SceneGraph<NodeId> for SceneView<'_> {
    fn children_of(&self, node: &NodeId) -> Option<&[NodeId]> {
        match self.tree.kind(*node)? {
            NodeKind::Group => Some(self.tree.children_of(*node)),
            NodeKind::Mesh { .. } => None,
        }
    }

    fn intersect_ray(&self, ray: &Ray, candidates: &[NodeId]) -> Vec<Intersection<NodeId>> {
        let ray = pointerpick_scene::Ray::new(ray.origin, ray.direction);
        self.tree
            .intersect_ray(&ray, candidates, self.filter)
            .into_iter()
            .map(|hit| Intersection {
                node: hit.node,
                distance: hit.distance,
                point: hit.point,
            })
            .collect()
    }
}

impl Camera for PerspectiveCamera {
    fn ray_through(&self, ndc: Vec2) -> Ray {
        let ray = Self::ray_through(self, ndc);
        Ray {
            origin: ray.origin,
            direction: ray.direction,
        }
    }
}
