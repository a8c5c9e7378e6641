// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor resolution: map an intersected leaf to the registration that owns it.
//!
//! ## Overview
//!
//! Candidates for picking are the leaves of registered subtrees, so every hit has a registered
//! node somewhere on its parent chain (itself included). [`resolve`] walks that chain using a
//! [`ParentLookup`] and returns the nearest registered node's [`Registration`].
//!
//! ## Broken chains
//!
//! If the scene changed between flattening and resolution, the walk can reach a root without
//! finding a registration, or loop forever on a cyclic parent graph. Both are reported as a
//! [`ResolveError`]; the walk never exceeds `max_depth` steps.

use crate::error::ResolveError;
use crate::registry::{Registration, Registry};
use crate::types::ParentLookup;

/// Default bound on the number of parent steps taken by [`resolve`].
pub const DEFAULT_MAX_ANCESTOR_DEPTH: usize = 1024;

/// Find the registration for `hit` or its nearest registered ancestor.
///
/// Takes at most `max_depth` parent steps; `hit` itself is checked before any step.
pub fn resolve<'r, K, E, P>(
    registry: &'r Registry<K, E>,
    parents: &P,
    hit: K,
    max_depth: usize,
) -> Result<&'r Registration<K, E>, ResolveError<K>>
where
    K: Copy + Ord,
    P: ParentLookup<K> + ?Sized,
{
    let mut cur = hit;
    for _ in 0..max_depth {
        if let Some(registration) = registry.get(&cur) {
            return Ok(registration);
        }
        match parents.parent_of(&cur) {
            Some(p) => cur = p,
            None => return Err(ResolveError::Unregistered { hit }),
        }
    }
    registry
        .get(&cur)
        .ok_or(ResolveError::DepthExceeded { hit, max_depth })
}
