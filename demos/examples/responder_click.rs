// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click dispatch on a nested scene.
//!
//! This example subscribes a group to clicks and clicks once over a mesh nested two levels
//! below it, then once over empty space. The callback receives the intersected mesh; the
//! outcome names the subscribed group.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p pointerpick_demos --example responder_click`

use glam::{Affine3A, Vec3};
use kurbo::{Point, Rect, Size};
use pointerpick_responder::adapters::scene::SceneView;
use pointerpick_responder::dispatcher::{DispatchOutcome, Dispatcher};
use pointerpick_responder::registry::Callbacks;
use pointerpick_responder::types::{PointerEvent, RawEventKind, Viewport};
use pointerpick_scene::{Aabb3, LocalNode, PerspectiveCamera, Tree};

/// An 800×600 canvas drawn at half size on screen.
#[derive(Debug)]
struct Canvas;

impl Viewport for Canvas {
    fn bounding_rect(&self) -> Rect {
        Rect::new(100.0, 50.0, 500.0, 350.0)
    }

    fn surface_size(&self) -> Size {
        Size::new(800.0, 600.0)
    }

    fn listen(&mut self, kind: RawEventKind) {
        println!("  host: add listener for {kind:?}");
    }
}

struct MouseClick {
    client: Point,
}

impl PointerEvent for MouseClick {
    fn client_position(&self) -> Point {
        self.client
    }

    fn prevent_default(&mut self) {}
}

fn main() {
    env_logger::init();

    // robot = { body, arm = { hand } }
    let mut tree = Tree::new();
    let robot = tree.insert(None, LocalNode::group());
    let body = tree.insert(
        Some(robot),
        LocalNode::mesh(Aabb3::new(Vec3::new(-1.0, -2.0, -1.0), Vec3::new(1.0, 1.0, 1.0))),
    );
    let arm = tree.insert(
        Some(robot),
        LocalNode::group().with_transform(Affine3A::from_translation(Vec3::new(0.0, 0.0, 1.5))),
    );
    let hand = tree.insert(
        Some(arm),
        LocalNode::mesh(Aabb3::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.4))),
    );

    let mut camera = PerspectiveCamera::look_at(Vec3::new(0.0, 0.0, 12.0), Vec3::ZERO);
    camera.aspect = 800.0 / 600.0;

    let mut dispatcher = Dispatcher::new(Canvas);
    dispatcher
        .subscribe(
            "click",
            robot,
            Callbacks::new().on_fire(move |leaf, ev: &MouseClick| {
                let part = if *leaf == hand { "hand" } else { "body" };
                println!("  robot clicked on its {part} at {:?}", ev.client);
                Ok(())
            }),
        )
        .expect("click is a supported method");

    let scene = SceneView::new(&tree);
    for (label, client) in [
        ("center of canvas", Point::new(300.0, 200.0)),
        ("top-left corner", Point::new(110.0, 60.0)),
    ] {
        println!("== Click: {label} ==");
        let mut ev = MouseClick { client };
        match dispatcher.handle_click(&scene, &camera, &mut ev) {
            DispatchOutcome::Clicked { target, leaf, .. } => {
                assert_eq!(target, robot);
                assert!(leaf == hand || leaf == body);
            }
            other => println!("  {other:?}"),
        }
    }

    // Unsupported names are rejected without touching the subscriptions.
    if let Err(e) = dispatcher.subscribe("drag", robot, Callbacks::new()) {
        println!("== Subscribe 'drag' ==\n  {e}");
    }
}
