// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rays and axis-aligned boxes in 3D.

use glam::{Affine3A, Vec3};

/// A ray in 3D space, defined by an origin and a normalized direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; `direction` is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box in 3D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb3 {
    /// Create a box from two corners; components are sorted so `min <= max`.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// A box centered at `center` with the given half extents.
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The eight corners of the box.
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Axis-aligned bounds of this box after `tf`.
    ///
    /// Loose under rotation: the result contains the transformed box but is not tight.
    pub fn transformed(&self, tf: Affine3A) -> Self {
        let mut corners = self.corners().into_iter().map(|c| tf.transform_point3(c));
        // Eight corners always exist.
        let first = corners.next().unwrap_or(Vec3::ZERO);
        let (min, max) = corners.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self { min, max }
    }

    /// Entry distance of `ray` into this box, or `None` if it misses.
    ///
    /// Slab test. A ray starting inside the box hits at distance `0`.
    /// Hits behind the origin are rejected.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv = ray.direction.recip();
        let t0 = (self.min - ray.origin) * inv;
        let t1 = (self.max - ray.origin) * inv;
        // Axis-parallel rays produce inf/-inf, and NaN when the origin lies on a slab plane.
        let near = t0.min(t1);
        let far = t0.max(t1);
        let t_enter = near.max_element();
        let t_exit = far.min_element();
        if t_enter.is_nan() || t_exit.is_nan() || t_exit < 0.0 || t_enter > t_exit {
            return None;
        }
        Some(t_enter.max(0.0))
    }
}
