// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ray picking against a flattened candidate set.
//!
//! ## Ordering
//!
//! Intersections are ordered by ascending distance; the first is authoritative.
//! Equal distances keep the order the scene reported them in.
//! Distances are compared with [`f32::total_cmp`], so a NaN reported by the scene sorts after
//! every finite hit and never displaces the nearest one.

use alloc::vec::Vec;

use glam::Vec2;

use crate::types::{Camera, Intersection, SceneGraph};

/// Cast a ray from `camera` through `ndc` and intersect it with `candidates`, nearest first.
///
/// `candidates` should already be flattened (see [`flatten`](crate::flatten::flatten)).
/// An empty result means nothing was hit.
pub fn pick<K, S, C>(scene: &S, camera: &C, ndc: Vec2, candidates: &[K]) -> Vec<Intersection<K>>
where
    S: SceneGraph<K> + ?Sized,
    C: Camera + ?Sized,
{
    if candidates.is_empty() {
        return Vec::new();
    }
    let ray = camera.ray_through(ndc);
    let mut hits = scene.intersect_ray(&ray, candidates);
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParentLookup, Ray};
    use alloc::vec;
    use glam::Vec3;

    /// Reports a fixed distance per candidate, in candidate order.
    struct Fixed(Vec<(u32, f32)>);

    impl ParentLookup<u32> for Fixed {
        fn parent_of(&self, _node: &u32) -> Option<u32> {
            None
        }
    }

    impl SceneGraph<u32> for Fixed {
        fn children_of(&self, _node: &u32) -> Option<&[u32]> {
            None
        }

        fn intersect_ray(&self, _ray: &Ray, candidates: &[u32]) -> Vec<Intersection<u32>> {
            self.0
                .iter()
                .filter(|(n, _)| candidates.contains(n))
                .map(|&(node, distance)| Intersection {
                    node,
                    distance,
                    point: Vec3::ZERO,
                })
                .collect()
        }
    }

    struct Straight;

    impl Camera for Straight {
        fn ray_through(&self, ndc: Vec2) -> Ray {
            Ray {
                origin: ndc.extend(0.0),
                direction: Vec3::NEG_Z,
            }
        }
    }

    fn order(hits: &[Intersection<u32>]) -> Vec<u32> {
        hits.iter().map(|h| h.node).collect()
    }

    #[test]
    fn sorts_nearest_first() {
        let scene = Fixed(vec![(1, 5.0), (2, 1.0), (3, 3.0)]);
        let hits = pick(&scene, &Straight, Vec2::ZERO, &[1, 2, 3]);
        assert_eq!(order(&hits), vec![2, 3, 1]);
    }

    #[test]
    fn only_candidates_are_considered() {
        let scene = Fixed(vec![(1, 5.0), (2, 1.0)]);
        let hits = pick(&scene, &Straight, Vec2::ZERO, &[1]);
        assert_eq!(order(&hits), vec![1]);
        let none: &[u32] = &[];
        assert!(pick(&scene, &Straight, Vec2::ZERO, none).is_empty());
    }

    #[test]
    fn nan_distance_sorts_after_finite_hits() {
        let scene = Fixed(vec![(1, 5.0), (2, f32::NAN), (3, 1.0)]);
        let hits = pick(&scene, &Straight, Vec2::ZERO, &[1, 2, 3]);
        assert_eq!(order(&hits), vec![3, 1, 2]);
    }

    #[test]
    fn equal_distances_are_stable() {
        let scene = Fixed(vec![(4, 2.0), (1, 2.0), (7, 0.5)]);
        let hits = pick(&scene, &Straight, Vec2::ZERO, &[1, 4, 7]);
        assert_eq!(order(&hits), vec![7, 4, 1]);
    }
}
