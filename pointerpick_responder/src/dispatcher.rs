// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher: subscriptions plus one controller per [`Method`].
//!
//! ## Overview
//!
//! [`Dispatcher`] owns a [`Registry`] per method, the lazily installed raw-listener flags,
//! and the hover state. The host forwards raw events to [`Dispatcher::handle_click`] and
//! [`Dispatcher::handle_pointer_move`] (or [`Dispatcher::handle`]). Each call runs one full
//! pass: normalize → flatten → pick → resolve → invoke.
//!
//! ## Listener installation
//!
//! The first subscription for a method calls [`Viewport::listen`] for that method's raw
//! event. It is never called again for that method, even after [`Dispatcher::clear_all`].
//! Events for a method whose listener was never installed are ignored.
//!
//! ## Callback isolation
//!
//! A callback that returns an error is logged and otherwise ignored. With the `std` feature,
//! panics are caught as well. State transitions complete before callbacks run, so a failing
//! callback never leaves the hover state half-updated.

use core::fmt::Debug;

use crate::error::{CallbackError, ResolveError, UnsupportedMethod};
use crate::flatten::flatten;
use crate::hover::{HoverState, HoverTransition, Hovered};
use crate::picker::pick;
use crate::registry::{Callback, Callbacks, Registry};
use crate::resolver::{DEFAULT_MAX_ANCESTOR_DEPTH, resolve};
use crate::types::{Camera, Method, PointerEvent, RawEventKind, SceneGraph, Viewport};
use crate::viewport::to_normalized;

/// How a callback invocation went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackStatus {
    /// The registration has no callback for this event.
    Absent,
    /// The callback ran and returned `Ok`.
    Completed,
    /// The callback returned an error or panicked; it was logged.
    Failed(CallbackError),
}

/// Result of handling one raw event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome<K> {
    /// No listener is installed for this event's method; nothing ran.
    NotListening,
    /// Nothing registered was hit (or, for hover, nothing was hit while idle).
    Miss,
    /// A click resolved to `target`.
    Clicked {
        /// Registered node that owns the hit.
        target: K,
        /// Intersected leaf.
        leaf: K,
        /// Result of the fire callback.
        callback: CallbackStatus,
    },
    /// The pointer entered `target`.
    Entered {
        /// Registered node that owns the hit.
        target: K,
        /// Intersected leaf.
        leaf: K,
        /// Result of the enter callback.
        callback: CallbackStatus,
    },
    /// Something was hit while already hovering; nothing fired.
    Hovering,
    /// The pointer left the target it entered.
    Left {
        /// Registered node that was hovered.
        target: K,
        /// Leaf captured on entry.
        leaf: K,
        /// Result of the leave callback.
        callback: CallbackStatus,
    },
    /// The hit's parent chain never reached a registration; it was logged.
    Unresolved(ResolveError<K>),
}

/// Per-method subscriptions and listener flag.
struct Controller<K, E> {
    registry: Registry<K, E>,
    listening: bool,
}

impl<K: Ord, E> Controller<K, E> {
    fn new() -> Self {
        Self {
            registry: Registry::new(),
            listening: false,
        }
    }
}

/// Routes pointer events on a viewport to subscribed scene nodes.
///
/// ## Usage
///
/// - Construct with [`Dispatcher::new`], handing over the host [`Viewport`].
/// - Subscribe nodes with [`Dispatcher::subscribe`] (by name) or
///   [`Dispatcher::subscribe_method`] (typed).
/// - Optionally configure [`Dispatcher::set_max_ancestor_depth`].
/// - Forward raw events with [`Dispatcher::handle`], passing the current scene and camera.
///
/// `K` is the scene's node key, `E` the host's pointer event type, `V` the viewport.
pub struct Dispatcher<K, E, V> {
    viewport: V,
    click: Controller<K, E>,
    hover: Controller<K, E>,
    hover_state: HoverState<K, Option<Callback<K, E>>>,
    max_ancestor_depth: usize,
}

impl<K: Debug, E, V: Debug> Debug for Dispatcher<K, E, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("viewport", &self.viewport)
            .field("click", &self.click.registry)
            .field("hover", &self.hover.registry)
            .field("hovered", &self.hover_state.current().map(|h| &h.target))
            .field("max_ancestor_depth", &self.max_ancestor_depth)
            .finish_non_exhaustive()
    }
}

impl<K, E, V> Dispatcher<K, E, V>
where
    K: Copy + Ord + Debug,
    V: Viewport,
{
    /// Create a dispatcher with no subscriptions and no listeners installed.
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            click: Controller::new(),
            hover: Controller::new(),
            hover_state: HoverState::new(),
            max_ancestor_depth: DEFAULT_MAX_ANCESTOR_DEPTH,
        }
    }

    /// The viewport events are delivered on.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the viewport, for example to update its layout.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Bound the number of parent steps taken when resolving a hit.
    pub fn set_max_ancestor_depth(&mut self, depth: usize) {
        self.max_ancestor_depth = depth;
    }

    /// Subscribe `node` to the method named `method` (`"click"` or `"hover"`).
    ///
    /// Replaces any existing subscription of `node` for that method. An unsupported name is
    /// logged as a warning and changes nothing.
    pub fn subscribe(
        &mut self,
        method: &str,
        node: K,
        callbacks: Callbacks<K, E>,
    ) -> Result<(), UnsupportedMethod> {
        let method = parse_method(method)?;
        self.subscribe_method(method, node, callbacks);
        Ok(())
    }

    /// Subscribe `node` to `method`, replacing any existing subscription.
    ///
    /// Installs the method's raw listener on the first subscription.
    pub fn subscribe_method(&mut self, method: Method, node: K, callbacks: Callbacks<K, E>) {
        log::debug!("subscribe {method} {node:?} ({callbacks:?})");
        let controller = self.controller_mut(method);
        controller.registry.insert(node, callbacks);
        if !controller.listening {
            controller.listening = true;
            log::debug!("installing {:?} listener for {method}", method.raw_event());
            self.viewport.listen(method.raw_event());
        }
    }

    /// Unsubscribe `node` from the method named `method`, or from every method if `None`.
    ///
    /// An unsupported name is logged as a warning and changes nothing.
    pub fn unsubscribe(&mut self, node: K, method: Option<&str>) -> Result<(), UnsupportedMethod> {
        let method = method.map(parse_method).transpose()?;
        self.unsubscribe_method(node, method);
        Ok(())
    }

    /// Unsubscribe `node` from `method`, or from every method if `None`.
    pub fn unsubscribe_method(&mut self, node: K, method: Option<Method>) {
        match method {
            Some(m) => {
                self.controller_mut(m).registry.remove(&node);
                log::debug!("unsubscribe {node:?} from {m}");
            }
            None => {
                for m in Method::ALL {
                    self.controller_mut(m).registry.remove(&node);
                }
                log::debug!("unsubscribe {node:?} from all methods");
            }
        }
    }

    /// Remove every subscription. Installed listeners and hover state are kept.
    pub fn clear_all(&mut self) {
        for m in Method::ALL {
            self.controller_mut(m).registry.clear();
        }
        log::debug!("cleared all subscriptions");
    }

    /// Whether `node` is subscribed to `method`.
    pub fn is_subscribed(&self, method: Method, node: &K) -> bool {
        self.controller(method).registry.contains(node)
    }

    /// Nodes subscribed to `method`, in ascending key order.
    pub fn registered(&self, method: Method) -> impl Iterator<Item = K> + '_ {
        self.controller(method).registry.nodes()
    }

    /// The registry for `method`.
    pub fn registry(&self, method: Method) -> &Registry<K, E> {
        &self.controller(method).registry
    }

    /// Whether the raw listener for `method` has been installed.
    pub fn is_listening(&self, method: Method) -> bool {
        self.controller(method).listening
    }

    /// The hovered `(target, leaf)` pair, if hovering.
    pub fn hovered(&self) -> Option<(K, K)> {
        self.hover_state.current().map(|h| (h.target, h.leaf))
    }

    /// Route a raw event of `kind` to the matching controller.
    pub fn handle<S, C>(
        &mut self,
        kind: RawEventKind,
        scene: &S,
        camera: &C,
        event: &mut E,
    ) -> DispatchOutcome<K>
    where
        S: SceneGraph<K> + ?Sized,
        C: Camera + ?Sized,
        E: PointerEvent,
    {
        match kind {
            RawEventKind::Click => self.handle_click(scene, camera, event),
            RawEventKind::PointerMove => self.handle_pointer_move(scene, camera, event),
        }
    }

    /// Handle a raw click: fire the resolved registration's `on_fire` for the nearest hit.
    pub fn handle_click<S, C>(&mut self, scene: &S, camera: &C, event: &mut E) -> DispatchOutcome<K>
    where
        S: SceneGraph<K> + ?Sized,
        C: Camera + ?Sized,
        E: PointerEvent,
    {
        if !self.click.listening {
            return DispatchOutcome::NotListening;
        }
        event.prevent_default();
        let Some(leaf) = self.nearest_hit(Method::Click, scene, camera, event) else {
            return DispatchOutcome::Miss;
        };
        let registration = match resolve(&self.click.registry, scene, leaf, self.max_ancestor_depth)
        {
            Ok(r) => r,
            Err(e) => return unresolved(Method::Click, e),
        };
        let target = registration.node;
        let on_fire = registration.callbacks.fire_callback().cloned();
        let callback = invoke(Method::Click, on_fire.as_ref(), &leaf, event);
        DispatchOutcome::Clicked {
            target,
            leaf,
            callback,
        }
    }

    /// Handle a raw pointer move: drive the hover state machine.
    pub fn handle_pointer_move<S, C>(
        &mut self,
        scene: &S,
        camera: &C,
        event: &mut E,
    ) -> DispatchOutcome<K>
    where
        S: SceneGraph<K> + ?Sized,
        C: Camera + ?Sized,
        E: PointerEvent,
    {
        if !self.hover.listening {
            return DispatchOutcome::NotListening;
        }
        event.prevent_default();
        let hit = self.nearest_hit(Method::Hover, scene, camera, event);
        match (self.hover_state.transition(hit.is_some()), hit) {
            (HoverTransition::Enter, Some(leaf)) => {
                let registration =
                    match resolve(&self.hover.registry, scene, leaf, self.max_ancestor_depth) {
                        Ok(r) => r,
                        Err(e) => return unresolved(Method::Hover, e),
                    };
                let target = registration.node;
                let on_fire = registration.callbacks.fire_callback().cloned();
                let on_leave = registration.callbacks.leave_callback().cloned();
                log::trace!("hover enter {target:?} via {leaf:?}");
                self.hover_state.enter(Hovered {
                    target,
                    leaf,
                    payload: on_leave,
                });
                let callback = invoke(Method::Hover, on_fire.as_ref(), &leaf, event);
                DispatchOutcome::Entered {
                    target,
                    leaf,
                    callback,
                }
            }
            (HoverTransition::Leave, _) => {
                let Some(left) = self.hover_state.leave() else {
                    return DispatchOutcome::Miss;
                };
                log::trace!("hover leave {:?}", left.target);
                let callback = invoke(Method::Hover, left.payload.as_ref(), &left.leaf, event);
                DispatchOutcome::Left {
                    target: left.target,
                    leaf: left.leaf,
                    callback,
                }
            }
            (HoverTransition::Stay, _) => DispatchOutcome::Hovering,
            (HoverTransition::Rest | HoverTransition::Enter, _) => DispatchOutcome::Miss,
        }
    }

    fn nearest_hit<S, C>(&self, method: Method, scene: &S, camera: &C, event: &E) -> Option<K>
    where
        S: SceneGraph<K> + ?Sized,
        C: Camera + ?Sized,
        E: PointerEvent,
    {
        let ndc = to_normalized(
            event.client_position(),
            self.viewport.bounding_rect(),
            self.viewport.surface_size(),
        );
        let candidates = flatten(scene, self.controller(method).registry.nodes());
        pick(scene, camera, ndc, &candidates)
            .first()
            .map(|hit| hit.node)
    }

    fn controller(&self, method: Method) -> &Controller<K, E> {
        match method {
            Method::Click => &self.click,
            Method::Hover => &self.hover,
        }
    }

    fn controller_mut(&mut self, method: Method) -> &mut Controller<K, E> {
        match method {
            Method::Click => &mut self.click,
            Method::Hover => &mut self.hover,
        }
    }
}

fn parse_method(name: &str) -> Result<Method, UnsupportedMethod> {
    name.parse::<Method>().inspect_err(|e| log::warn!("{e}"))
}

fn unresolved<K: Debug>(method: Method, e: ResolveError<K>) -> DispatchOutcome<K> {
    log::error!("{method}: {e}");
    DispatchOutcome::Unresolved(e)
}

fn invoke<K: Debug, E>(
    method: Method,
    callback: Option<&Callback<K, E>>,
    leaf: &K,
    event: &E,
) -> CallbackStatus {
    let Some(callback) = callback else {
        log::trace!("{method}: no callback for {leaf:?}");
        return CallbackStatus::Absent;
    };
    match call_isolated(callback, leaf, event) {
        Ok(()) => CallbackStatus::Completed,
        Err(e) => {
            log::error!("{method} on {leaf:?}: {e}");
            CallbackStatus::Failed(e)
        }
    }
}

#[cfg(feature = "std")]
fn call_isolated<K, E>(callback: &Callback<K, E>, leaf: &K, event: &E) -> Result<(), CallbackError> {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    catch_unwind(AssertUnwindSafe(|| callback(leaf, event))).unwrap_or_else(|payload| {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            std::string::String::from(*s)
        } else if let Some(s) = payload.downcast_ref::<std::string::String>() {
            s.clone()
        } else {
            std::string::String::from("callback panicked")
        };
        Err(CallbackError::new(message))
    })
}

#[cfg(not(feature = "std"))]
fn call_isolated<K, E>(callback: &Callback<K, E>, leaf: &K, event: &E) -> Result<(), CallbackError> {
    callback(leaf, event)
}
