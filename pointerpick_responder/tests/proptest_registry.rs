// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for subscription bookkeeping.
//!
//! After any sequence of subscribe/unsubscribe operations, each method's registry holds
//! exactly the nodes that were subscribed to it and not since unsubscribed from it.

use std::collections::BTreeSet;

use kurbo::{Rect, Size};
use pointerpick_responder::dispatcher::Dispatcher;
use pointerpick_responder::registry::Callbacks;
use pointerpick_responder::types::{Method, RawEventKind, Viewport};
use proptest::prelude::*;

struct Surface;

impl Viewport for Surface {
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 1.0, 1.0)
    }

    fn surface_size(&self) -> Size {
        Size::new(1.0, 1.0)
    }

    fn listen(&mut self, _kind: RawEventKind) {}
}

#[derive(Clone, Debug)]
enum Op {
    Subscribe(&'static str, u8),
    Unsubscribe(u8, Option<&'static str>),
    ClearAll,
}

fn method_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("click"), Just("hover"), Just("drag")]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (method_name(), 0u8..16).prop_map(|(m, n)| Op::Subscribe(m, n)),
        4 => (0u8..16, proptest::option::of(method_name())).prop_map(|(n, m)| Op::Unsubscribe(n, m)),
        1 => Just(Op::ClearAll),
    ]
}

proptest! {
    /// Property: registries match a set model of the operations applied
    #[test]
    fn registry_matches_set_model(ops in proptest::collection::vec(op(), 0..64)) {
        let mut dispatcher: Dispatcher<u8, (), Surface> = Dispatcher::new(Surface);
        let mut click = BTreeSet::new();
        let mut hover = BTreeSet::new();

        for op in ops {
            match op {
                Op::Subscribe(m, n) => {
                    let res = dispatcher.subscribe(m, n, Callbacks::new());
                    match m {
                        "click" => { click.insert(n); }
                        "hover" => { hover.insert(n); }
                        _ => prop_assert!(res.is_err()),
                    }
                }
                Op::Unsubscribe(n, m) => {
                    let res = dispatcher.unsubscribe(n, m);
                    match m {
                        Some("click") => { click.remove(&n); }
                        Some("hover") => { hover.remove(&n); }
                        Some(_) => prop_assert!(res.is_err()),
                        None => {
                            click.remove(&n);
                            hover.remove(&n);
                        }
                    }
                }
                Op::ClearAll => {
                    dispatcher.clear_all();
                    click.clear();
                    hover.clear();
                }
            }
        }

        let got_click: Vec<u8> = dispatcher.registry(Method::Click).nodes().collect();
        let got_hover: Vec<u8> = dispatcher.registry(Method::Hover).nodes().collect();
        prop_assert_eq!(got_click, click.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(got_hover, hover.into_iter().collect::<Vec<_>>());
    }
}
