// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the responder: methods, raw events, rays, intersections, and the
//! collaborator traits the host implements.
//!
//! ## Overview
//!
//! The responder does no geometry of its own. It asks the host for:
//! - Scene structure via [`ParentLookup`] and [`SceneGraph`].
//! - Picking rays via [`Camera`].
//! - Surface layout and listener installation via [`Viewport`].
//! - Pointer positions and default suppression via [`PointerEvent`].

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use glam::{Vec2, Vec3};
use kurbo::{Point, Rect, Size};

use crate::error::UnsupportedMethod;

/// A pointer interaction a node can subscribe to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// Fires the first callback when the node is clicked.
    Click,
    /// Fires the first callback on pointer enter and the second on pointer leave.
    Hover,
}

impl Method {
    /// Every supported method, in dispatch-table order.
    pub const ALL: [Self; 2] = [Self::Click, Self::Hover];

    /// The method's public name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Hover => "hover",
        }
    }

    /// The raw event this method listens to.
    pub const fn raw_event(self) -> RawEventKind {
        match self {
            Self::Click => RawEventKind::Click,
            Self::Hover => RawEventKind::PointerMove,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click" => Ok(Self::Click),
            "hover" => Ok(Self::Hover),
            other => Err(UnsupportedMethod::new(other)),
        }
    }
}

/// Raw pointer events delivered by the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawEventKind {
    /// A click (press and release) on the surface.
    Click,
    /// The pointer moved over the surface.
    PointerMove,
}

/// A world-space picking ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// A ray intersection reported by the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<K> {
    /// The intersected leaf node.
    pub node: K,
    /// Distance along the ray. Lower is nearer.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Look up the parent of a node.
///
/// The [resolver](crate::resolver) walks this chain from an intersected leaf to the nearest
/// registered ancestor.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// Scene structure and ray intersection, provided by the host's scene graph.
pub trait SceneGraph<K>: ParentLookup<K> {
    /// Children of a group node in order, or `None` if `node` is a leaf.
    ///
    /// Only leaves are handed to [`SceneGraph::intersect_ray`]. An empty group returns
    /// `Some(&[])`.
    fn children_of(&self, node: &K) -> Option<&[K]>;

    /// Intersect `ray` with the given leaf nodes.
    ///
    /// Results need not be sorted; the [picker](crate::picker) orders them.
    fn intersect_ray(&self, ray: &Ray, candidates: &[K]) -> Vec<Intersection<K>>;
}

/// Builds picking rays.
pub trait Camera {
    /// Ray from the camera through `ndc`, a point in `[-1, 1]²` with `+y` up.
    fn ray_through(&self, ndc: Vec2) -> Ray;
}

/// The rendering surface pointer events are delivered on.
pub trait Viewport {
    /// On-screen bounding box of the surface, in the same units as event client positions.
    fn bounding_rect(&self) -> Rect;

    /// Size of the surface's backing store in pixels.
    fn surface_size(&self) -> Size;

    /// Install the raw listener for `kind`.
    ///
    /// The [dispatcher](crate::dispatcher::Dispatcher) calls this at most once per kind, on
    /// the first subscription for the matching [`Method`].
    fn listen(&mut self, kind: RawEventKind);
}

/// A raw pointer event.
pub trait PointerEvent {
    /// Pointer position in client (screen) coordinates.
    fn client_position(&self) -> Point;

    /// Suppress the host's default handling. Called on every handled event.
    fn prevent_default(&mut self);
}
