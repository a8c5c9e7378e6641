// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client coordinates → normalized device coordinates.

use glam::Vec2;
use kurbo::{Point, Rect, Size};

/// Map a client-space pointer position to normalized device coordinates.
///
/// `bounds` is the surface's on-screen box and `surface` its backing-store size. The position
/// is first rescaled into backing pixels (the displayed box may be stretched relative to the
/// backing store), then mapped to `[-1, 1]²` with `+y` up: the top-left corner of `bounds`
/// becomes `(-1, 1)` and the bottom-right `(1, -1)`.
///
/// Zero-sized `bounds` or `surface` produce non-finite output; callers must only map events
/// on a laid-out surface.
pub fn to_normalized(client: Point, bounds: Rect, surface: Size) -> Vec2 {
    let local_x = (client.x - bounds.x0) * surface.width / bounds.width();
    let local_y = (client.y - bounds.y0) * surface.height / bounds.height();
    let x = (local_x / surface.width) * 2.0 - 1.0;
    let y = (local_y / surface.height) * -2.0 + 1.0;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NDC only needs f32 precision for ray construction."
    )]
    Vec2::new(x as f32, y as f32)
}
