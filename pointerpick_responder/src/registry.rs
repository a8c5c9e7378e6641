// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-method subscription storage.
//!
//! A [`Registry`] maps node keys to their [`Registration`]. Each node appears at most once;
//! inserting an existing key replaces its callbacks. Iteration is in ascending key order,
//! which is also the order registered nodes are flattened into picking candidates.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;

use crate::error::CallbackError;

/// An application callback: receives the intersected leaf and the raw event.
pub type Callback<K, E> = Rc<dyn Fn(&K, &E) -> Result<(), CallbackError>>;

/// The callbacks attached to one subscription.
///
/// `on_fire` runs on click or hover-enter. `on_leave` runs on hover-leave only and is
/// ignored for click.
pub struct Callbacks<K, E> {
    on_fire: Option<Callback<K, E>>,
    on_leave: Option<Callback<K, E>>,
}

impl<K, E> Callbacks<K, E> {
    /// No callbacks. Hits on the node still resolve but invoke nothing.
    pub fn new() -> Self {
        Self {
            on_fire: None,
            on_leave: None,
        }
    }

    /// Set the click / hover-enter callback.
    pub fn on_fire(mut self, f: impl Fn(&K, &E) -> Result<(), CallbackError> + 'static) -> Self {
        self.on_fire = Some(Rc::new(f));
        self
    }

    /// Set the hover-leave callback.
    pub fn on_leave(mut self, f: impl Fn(&K, &E) -> Result<(), CallbackError> + 'static) -> Self {
        self.on_leave = Some(Rc::new(f));
        self
    }

    /// The click / hover-enter callback, if any.
    pub fn fire_callback(&self) -> Option<&Callback<K, E>> {
        self.on_fire.as_ref()
    }

    /// The hover-leave callback, if any.
    pub fn leave_callback(&self) -> Option<&Callback<K, E>> {
        self.on_leave.as_ref()
    }
}

impl<K, E> Default for Callbacks<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> Clone for Callbacks<K, E> {
    fn clone(&self) -> Self {
        Self {
            on_fire: self.on_fire.clone(),
            on_leave: self.on_leave.clone(),
        }
    }
}

impl<K, E> core::fmt::Debug for Callbacks<K, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_fire", &self.on_fire.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

/// A subscribed node and its callbacks.
pub struct Registration<K, E> {
    /// The subscribed node.
    pub node: K,
    /// Callbacks attached to it.
    pub callbacks: Callbacks<K, E>,
}

// `E` only appears behind `Rc<dyn Fn>`, so neither impl bounds it.
impl<K: Clone, E> Clone for Registration<K, E> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<K: core::fmt::Debug, E> core::fmt::Debug for Registration<K, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registration")
            .field("node", &self.node)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

/// Subscriptions for a single method.
pub struct Registry<K, E> {
    entries: BTreeMap<K, Registration<K, E>>,
}

impl<K, E> core::fmt::Debug for Registry<K, E>
where
    K: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

impl<K: Ord, E> Default for Registry<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, E> Registry<K, E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace the registration for `node`.
    ///
    /// Returns the replaced registration, if any.
    pub fn insert(&mut self, node: K, callbacks: Callbacks<K, E>) -> Option<Registration<K, E>>
    where
        K: Copy,
    {
        self.entries.insert(node, Registration { node, callbacks })
    }

    /// Remove the registration for `node`.
    pub fn remove(&mut self, node: &K) -> Option<Registration<K, E>> {
        self.entries.remove(node)
    }

    /// Remove every registration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The registration for `node`, if subscribed.
    pub fn get(&self, node: &K) -> Option<&Registration<K, E>> {
        self.entries.get(node)
    }

    /// Whether `node` is subscribed.
    pub fn contains(&self, node: &K) -> bool {
        self.entries.contains_key(node)
    }

    /// Subscribed nodes in ascending key order.
    pub fn nodes(&self) -> impl Iterator<Item = K> + '_
    where
        K: Copy,
    {
        self.entries.keys().copied()
    }

    /// Number of subscribed nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
