// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pointerpick_scene --heading-base-level=0

//! Pointerpick Scene: a Glam-native 3D scene arena for ray picking.
//!
//! Pointerpick Scene is the reference scene graph behind the Pointerpick responder.
//!
//! - Represents a hierarchy of group and mesh nodes with local transforms and flags.
//! - Computes world transforms and world-space mesh bounds on demand by walking ancestors.
//! - Intersects world-space rays with a candidate set of meshes, nearest first.
//! - Builds picking rays from normalized device coordinates with a [`PerspectiveCamera`].
//!
//! ## Not a renderer
//!
//! This crate holds no GPU state and performs no triangle-level intersection.
//! Meshes are represented for picking by their local [`Aabb3`]; world bounds are loose under
//! rotation (an axis-aligned box that fully contains the transformed box).
//!
//! ## API overview
//!
//! - [`Tree`]: container managing nodes.
//! - [`LocalNode`]: per-node local data (kind, transform, flags).
//! - [`NodeKind`]: [`NodeKind::Group`] containers versus [`NodeKind::Mesh`] geometry.
//! - [`NodeFlags`]: visibility and picking controls.
//! - [`NodeId`]: generational handle of a node.
//! - [`QueryFilter`]: restricts ray results (visible/pickable).
//!
//! Key operations:
//! - [`Tree::insert`](Tree::insert) → [`NodeId`]
//! - [`Tree::remove`](Tree::remove) / [`Tree::reparent`](Tree::reparent)
//! - [`Tree::set_local_transform`](Tree::set_local_transform) / [`Tree::set_flags`](Tree::set_flags)
//! - [`Tree::parent_of`](Tree::parent_of) / [`Tree::children_of`](Tree::children_of)
//! - [`Tree::intersect_ray`](Tree::intersect_ray) → hits sorted by distance.
//!
//! ### Minimal usage
//!
//! ```
//! use glam::{Affine3A, Vec2, Vec3};
//! use pointerpick_scene::{Aabb3, LocalNode, PerspectiveCamera, QueryFilter, Tree};
//!
//! let mut tree = Tree::new();
//! let group = tree.insert(None, LocalNode::group());
//! let cube = tree.insert(
//!     Some(group),
//!     LocalNode::mesh(Aabb3::new(Vec3::splat(-1.0), Vec3::splat(1.0)))
//!         .with_transform(Affine3A::from_translation(Vec3::new(0.0, 0.0, -2.0))),
//! );
//!
//! let camera = PerspectiveCamera::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
//! let ray = camera.ray_through(Vec2::ZERO);
//! let hits = tree.intersect_ray(&ray, &[cube], QueryFilter::default());
//! assert_eq!(hits[0].node, cube);
//! assert_eq!(tree.parent_of(cube), Some(group));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod camera;
mod geometry;
mod tree;
mod types;

pub use camera::PerspectiveCamera;
pub use geometry::{Aabb3, Ray};
pub use tree::{QueryFilter, RayHit, Tree};
pub use types::{LocalNode, NodeFlags, NodeId, NodeKind};
