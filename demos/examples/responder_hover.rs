// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover enter/leave over two overlapping meshes.
//!
//! The pointer sweeps left to right across a scene with two overlapping cubes that belong to
//! separately subscribed groups. Enter fires on the first cube reached; moving onto the second
//! cube while still over geometry does not re-enter, and leave fires once the pointer reaches
//! empty space.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p pointerpick_demos --example responder_hover`

use glam::{Affine3A, Vec3};
use kurbo::{Point, Rect, Size};
use pointerpick_responder::adapters::scene::SceneView;
use pointerpick_responder::dispatcher::{DispatchOutcome, Dispatcher};
use pointerpick_responder::registry::Callbacks;
use pointerpick_responder::types::{PointerEvent, RawEventKind, Viewport};
use pointerpick_scene::{Aabb3, LocalNode, NodeId, PerspectiveCamera, Tree};

#[derive(Debug)]
struct Canvas;

impl Viewport for Canvas {
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 500.0, 500.0)
    }

    fn surface_size(&self) -> Size {
        Size::new(500.0, 500.0)
    }

    fn listen(&mut self, _kind: RawEventKind) {}
}

struct Move(Point);

impl PointerEvent for Move {
    fn client_position(&self) -> Point {
        self.0
    }

    fn prevent_default(&mut self) {}
}

fn cube_group(tree: &mut Tree, x: f32) -> NodeId {
    let g = tree.insert(
        None,
        LocalNode::group().with_transform(Affine3A::from_translation(Vec3::new(x, 0.0, 0.0))),
    );
    tree.insert(
        Some(g),
        LocalNode::mesh(Aabb3::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0))),
    );
    g
}

fn labelled(name: &'static str) -> Callbacks<NodeId, Move> {
    Callbacks::new()
        .on_fire(move |_, ev: &Move| {
            println!("  enter {name} at x={}", ev.0.x);
            Ok(())
        })
        .on_leave(move |_, ev: &Move| {
            println!("  leave {name} at x={}", ev.0.x);
            Ok(())
        })
}

fn main() {
    env_logger::init();

    let mut tree = Tree::new();
    let left = cube_group(&mut tree, -0.8);
    let right = cube_group(&mut tree, 0.8);
    let camera = PerspectiveCamera::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);

    let mut dispatcher = Dispatcher::new(Canvas);
    for (node, name) in [(left, "left"), (right, "right")] {
        dispatcher
            .subscribe("hover", node, labelled(name))
            .expect("hover is a supported method");
    }

    let scene = SceneView::new(&tree);
    let mut entered = 0;
    let mut left_count = 0;
    for step in 0..=20 {
        let x = f64::from(step) * 25.0;
        let out = dispatcher.handle_pointer_move(&scene, &camera, &mut Move(Point::new(x, 250.0)));
        match out {
            DispatchOutcome::Entered { .. } => entered += 1,
            DispatchOutcome::Left { .. } => left_count += 1,
            _ => {}
        }
    }
    println!("== Sweep ==\n  enters: {entered}, leaves: {left_count}");
    assert_eq!((entered, left_count), (1, 1));
    assert_eq!(dispatcher.hovered(), None);
}
