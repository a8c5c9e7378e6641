// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics are observable through the `log` facade.

use std::cell::RefCell;
use std::sync::Once;

use glam::{Vec2, Vec3};
use kurbo::{Point, Rect, Size};
use log::{Level, LevelFilter, Log, Metadata, Record};
use pointerpick_responder::dispatcher::{CallbackStatus, DispatchOutcome, Dispatcher};
use pointerpick_responder::registry::Callbacks;
use pointerpick_responder::types::{
    Camera, Intersection, Method, ParentLookup, PointerEvent, RawEventKind, Ray, SceneGraph,
    Viewport,
};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Records every message on the emitting thread, so parallel tests do not interfere.
struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INIT: Once = Once::new();

fn captured<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    (out, RECORDS.with(|r| r.take()))
}

struct Surface;

impl Viewport for Surface {
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    fn surface_size(&self) -> Size {
        Size::new(10.0, 10.0)
    }

    fn listen(&mut self, _kind: RawEventKind) {}
}

struct Event;

impl PointerEvent for Event {
    fn client_position(&self) -> Point {
        Point::new(5.0, 5.0)
    }

    fn prevent_default(&mut self) {}
}

/// Every candidate is hit at distance 1; node 1 has no parent.
struct AlwaysHit;

impl ParentLookup<u32> for AlwaysHit {
    fn parent_of(&self, _node: &u32) -> Option<u32> {
        None
    }
}

impl SceneGraph<u32> for AlwaysHit {
    fn children_of(&self, _node: &u32) -> Option<&[u32]> {
        None
    }

    fn intersect_ray(&self, _ray: &Ray, candidates: &[u32]) -> Vec<Intersection<u32>> {
        candidates
            .iter()
            .map(|&node| Intersection {
                node,
                distance: 1.0,
                point: Vec3::ZERO,
            })
            .collect()
    }
}

struct Cam;

impl Camera for Cam {
    fn ray_through(&self, ndc: Vec2) -> Ray {
        Ray {
            origin: ndc.extend(1.0),
            direction: Vec3::NEG_Z,
        }
    }
}

fn warnings(records: &[(Level, String)]) -> Vec<&str> {
    records
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg.as_str())
        .collect()
}

#[test]
fn unsupported_method_warns_and_changes_nothing() {
    let mut d: Dispatcher<u32, Event, Surface> = Dispatcher::new(Surface);
    d.subscribe("click", 1, Callbacks::new()).unwrap();

    let (res, records) = captured(|| d.subscribe("doubleclick", 2, Callbacks::new()));
    assert!(res.is_err());
    assert_eq!(
        warnings(&records),
        vec!["there is no method called 'doubleclick'"]
    );
    assert_eq!(d.registry(Method::Click).nodes().collect::<Vec<_>>(), vec![1]);
    assert!(d.registry(Method::Hover).is_empty());

    let (res, records) = captured(|| d.unsubscribe(1, Some("wheel")));
    assert!(res.is_err());
    assert_eq!(warnings(&records), vec!["there is no method called 'wheel'"]);
    assert!(d.is_subscribed(Method::Click, &1));
}

#[test]
fn callback_failure_is_logged_as_error() {
    let mut d: Dispatcher<u32, Event, Surface> = Dispatcher::new(Surface);
    d.subscribe(
        "click",
        1,
        Callbacks::new().on_fire(|_, _| Err("disk full".into())),
    )
    .unwrap();

    let (out, records) = captured(|| d.handle_click(&AlwaysHit, &Cam, &mut Event));
    assert!(matches!(
        out,
        DispatchOutcome::Clicked {
            callback: CallbackStatus::Failed(_),
            ..
        }
    ));
    assert!(
        records
            .iter()
            .any(|(level, msg)| *level == Level::Error && msg.contains("disk full")),
        "{records:?}"
    );
}

#[test]
fn listener_installation_is_logged_once() {
    let mut d: Dispatcher<u32, Event, Surface> = Dispatcher::new(Surface);
    let ((), records) = captured(|| {
        d.subscribe_method(Method::Hover, 1, Callbacks::new());
        d.subscribe_method(Method::Hover, 2, Callbacks::new());
    });
    let installs = records
        .iter()
        .filter(|(level, msg)| *level == Level::Debug && msg.starts_with("installing"))
        .count();
    assert_eq!(installs, 1);
}
