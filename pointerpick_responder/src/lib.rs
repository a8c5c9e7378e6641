// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pointerpick_responder --heading-base-level=0

//! Pointerpick Responder: pointer picking and dispatch for 3D scene graphs.
//!
//! ## Overview
//!
//! Application code subscribes scene nodes to pointer interactions (`click`, `hover`) with
//! callbacks. When the pointer acts on the viewport, this crate works out which subscribed
//! node is nearest under the cursor and invokes its callback.
//!
//! Subscriptions may name group nodes. Picking is performed against the leaves of the
//! subscribed subtrees, and a hit is resolved back to the nearest subscribed ancestor.
//!
//! ## Pipeline
//!
//! Every handled raw event runs one pass:
//!
//! 1) Normalize: [`to_normalized`](crate::viewport::to_normalized) maps the client position
//!    into normalized device coordinates, correcting for surfaces whose displayed size differs
//!    from their backing size.
//! 2) Flatten: [`flatten`](crate::flatten::flatten) expands the subscribed nodes, in
//!    ascending key order, into their leaves in depth-first pre-order.
//! 3) Pick: [`pick`](crate::picker::pick) casts a camera ray through the normalized point
//!    and sorts the leaf intersections nearest first.
//! 4) Resolve: [`resolve`](crate::resolver::resolve) walks from the nearest leaf up the
//!    parent chain to the subscribed node that owns it.
//! 5) Invoke: the [`Dispatcher`](crate::dispatcher::Dispatcher) calls the registration's
//!    callback with the intersected leaf and the raw event.
//!
//! Click fires once per click. Hover fires its enter callback when the pointer first hits
//! something while idle and its leave callback when the pointer next hits nothing; see
//! [`hover`] for the state table.
//!
//! ## Collaborators
//!
//! The host supplies the scene ([`SceneGraph`](crate::types::SceneGraph)), the camera
//! ([`Camera`](crate::types::Camera)), the surface ([`Viewport`](crate::types::Viewport)), and
//! its event type ([`PointerEvent`](crate::types::PointerEvent)). With the `scene_adapter`
//! feature, [`adapters::scene`] implements the scene and camera traits for Pointerpick Scene.
//!
//! ## Minimal usage
//!
//! ```
//! use glam::{Vec2, Vec3};
//! use kurbo::{Point, Rect, Size};
//! use pointerpick_responder::dispatcher::{DispatchOutcome, Dispatcher};
//! use pointerpick_responder::registry::Callbacks;
//! use pointerpick_responder::types::{
//!     Camera, Intersection, ParentLookup, PointerEvent, RawEventKind, Ray, SceneGraph, Viewport,
//! };
//!
//! // A scene with one leaf that is always hit.
//! struct OneLeaf;
//! impl ParentLookup<u32> for OneLeaf {
//!     fn parent_of(&self, _: &u32) -> Option<u32> { None }
//! }
//! impl SceneGraph<u32> for OneLeaf {
//!     fn children_of(&self, _: &u32) -> Option<&[u32]> { None }
//!     fn intersect_ray(&self, _: &Ray, c: &[u32]) -> Vec<Intersection<u32>> {
//!         c.iter().map(|&node| Intersection { node, distance: 1.0, point: Vec3::ZERO }).collect()
//!     }
//! }
//! struct Cam;
//! impl Camera for Cam {
//!     fn ray_through(&self, ndc: Vec2) -> Ray {
//!         Ray { origin: ndc.extend(0.0), direction: Vec3::NEG_Z }
//!     }
//! }
//! struct Surface;
//! impl Viewport for Surface {
//!     fn bounding_rect(&self) -> Rect { Rect::new(0.0, 0.0, 100.0, 100.0) }
//!     fn surface_size(&self) -> Size { Size::new(100.0, 100.0) }
//!     fn listen(&mut self, _: RawEventKind) {}
//! }
//! struct Click(Point);
//! impl PointerEvent for Click {
//!     fn client_position(&self) -> Point { self.0 }
//!     fn prevent_default(&mut self) {}
//! }
//!
//! let mut dispatcher = Dispatcher::new(Surface);
//! dispatcher
//!     .subscribe("click", 7_u32, Callbacks::new().on_fire(|leaf, _: &Click| {
//!         assert_eq!(*leaf, 7);
//!         Ok(())
//!     }))
//!     .unwrap();
//! let out = dispatcher.handle_click(&OneLeaf, &Cam, &mut Click(Point::new(50.0, 50.0)));
//! assert!(matches!(out, DispatchOutcome::Clicked { target: 7, leaf: 7, .. }));
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: unsupported method names are `warn`, resolution
//! and callback failures are `error`, subscription changes are `debug`, and hover transitions
//! are `trace`.
//!
//! This crate is `no_std` and uses `alloc`. The `std` feature (on by default) additionally
//! contains panics raised by callbacks.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod adapters;
pub mod dispatcher;
pub mod error;
pub mod flatten;
pub mod hover;
pub mod picker;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod viewport;
