// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::{Affine3A, Vec2, Vec3};
use kurbo::{Point, Rect, Size};
use pointerpick_responder::adapters::scene::SceneView;
use pointerpick_responder::dispatcher::Dispatcher;
use pointerpick_responder::flatten::flatten;
use pointerpick_responder::picker::pick;
use pointerpick_responder::registry::Callbacks;
use pointerpick_responder::types::{Method, PointerEvent, RawEventKind, Viewport};
use pointerpick_scene::{Aabb3, LocalNode, NodeId, PerspectiveCamera, Tree};

/// `n × n` groups on the XY plane, each holding a 2×2 cluster of unit meshes.
fn gen_grid_scene(n: usize) -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new();
    let mut groups = Vec::with_capacity(n * n);
    let half = n as f32 / 2.0;
    for y in 0..n {
        for x in 0..n {
            let at = Vec3::new((x as f32 - half) * 2.0, (y as f32 - half) * 2.0, 0.0);
            let g = tree.insert(
                None,
                LocalNode::group().with_transform(Affine3A::from_translation(at)),
            );
            for (dx, dy) in [(0.0, 0.0), (0.5, 0.0), (0.0, 0.5), (0.5, 0.5)] {
                let mesh = LocalNode::mesh(Aabb3::from_center_half_extents(
                    Vec3::ZERO,
                    Vec3::splat(0.2),
                ))
                .with_transform(Affine3A::from_translation(Vec3::new(dx, dy, 0.0)));
                tree.insert(Some(g), mesh);
            }
            groups.push(g);
        }
    }
    (tree, groups)
}

fn camera_for(n: usize) -> PerspectiveCamera {
    PerspectiveCamera::look_at(Vec3::new(0.0, 0.0, n as f32 * 3.0), Vec3::ZERO)
}

struct Canvas;

impl Viewport for Canvas {
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 1024.0, 1024.0)
    }

    fn surface_size(&self) -> Size {
        Size::new(2048.0, 2048.0)
    }

    fn listen(&mut self, _kind: RawEventKind) {}
}

struct Pointer(Point);

impl PointerEvent for Pointer {
    fn client_position(&self) -> Point {
        self.0
    }

    fn prevent_default(&mut self) {}
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for &n in &[16usize, 32, 64] {
        let (tree, groups) = gen_grid_scene(n);
        let scene = SceneView::new(&tree);
        group.throughput(Throughput::Elements((n * n * 4) as u64));
        group.bench_function(format!("groups_n{}", n), |b| {
            b.iter(|| black_box(flatten(&scene, groups.iter().copied())));
        });
    }
    group.finish();
}

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");
    for &n in &[16usize, 32, 64] {
        let (tree, groups) = gen_grid_scene(n);
        let scene = SceneView::new(&tree);
        let camera = camera_for(n);
        let leaves = flatten(&scene, groups.iter().copied());
        group.throughput(Throughput::Elements(leaves.len() as u64));
        group.bench_function(format!("center_n{}", n), |b| {
            b.iter(|| black_box(pick(&scene, &camera, Vec2::ZERO, &leaves)));
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &n in &[16usize, 32] {
        let (tree, groups) = gen_grid_scene(n);
        let camera = camera_for(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("click_hover_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut d: Dispatcher<NodeId, Pointer, Canvas> = Dispatcher::new(Canvas);
                    for &g in &groups {
                        d.subscribe_method(
                            Method::Click,
                            g,
                            Callbacks::new().on_fire(|_, _| Ok(())),
                        );
                        d.subscribe_method(
                            Method::Hover,
                            g,
                            Callbacks::new(),
                        );
                    }
                    d
                },
                |mut d| {
                    let scene = SceneView::new(&tree);
                    let mut ev = Pointer(Point::new(512.0, 512.0));
                    black_box(d.handle_click(&scene, &camera, &mut ev));
                    black_box(d.handle_pointer_move(&scene, &camera, &mut ev));
                    ev.0 = Point::new(1.0, 1.0);
                    black_box(d.handle_pointer_move(&scene, &camera, &mut ev));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flatten, bench_pick, bench_dispatch);
criterion_main!(benches);
